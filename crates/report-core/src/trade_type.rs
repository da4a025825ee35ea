//! Trade direction as exported by the broker (`buy` / `sell` / anything else).

use std::fmt;

use serde::{Serialize, Serializer};

/// Direction of a closed position.
///
/// Broker exports occasionally carry other kinds of rows (balance,
/// credit, ...). Those are kept verbatim in `Other` instead of being
/// dropped.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TradeType {
    Buy,
    Sell,
    Other(String),
}

impl TradeType {
    /// Parse the `type` column, case-insensitive, surrounding whitespace ignored.
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.eq_ignore_ascii_case("buy") {
            TradeType::Buy
        } else if trimmed.eq_ignore_ascii_case("sell") {
            TradeType::Sell
        } else {
            TradeType::Other(trimmed.to_string())
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            TradeType::Buy => "buy",
            TradeType::Sell => "sell",
            TradeType::Other(s) => s,
        }
    }
}

impl fmt::Display for TradeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for TradeType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}
