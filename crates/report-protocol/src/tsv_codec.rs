// crates/report-protocol/src/tsv_codec.rs

//! Broker trade-log codec.
//!
//! Logs are plain text, one closed position per line, fields separated
//! by tabs. The first line is a header and is discarded.
//!
//! Column order:
//!
//! ```text
//!  0 time         open time
//!  1 position     broker position id
//!  2 symbol
//!  3 type         buy / sell / ...
//!  4 volume
//!  5 entryPrice
//!  6 (unused)     stop loss
//!  7 (unused)     take profit
//!  8 exitTime     close time
//!  9 exitPrice
//! 10 commission
//! 11 swap
//! 12 profit
//! ```
//!
//! Exports are often dirty, so parsing is best effort:
//! - rows with fewer than [`MIN_FIELDS`] fields are rejected,
//! - numeric fields that do not parse become `0`,
//! - timestamps that do not parse become `None`.

use chrono::NaiveDateTime;

use report_core::{Trade, TradeType};

use crate::error::ParseError;

/// Minimum number of fields a row needs to reach the `profit` column.
pub const MIN_FIELDS: usize = 13;

const COL_TIME: usize = 0;
const COL_POSITION: usize = 1;
const COL_SYMBOL: usize = 2;
const COL_TYPE: usize = 3;
const COL_VOLUME: usize = 4;
const COL_ENTRY_PRICE: usize = 5;
const COL_EXIT_TIME: usize = 8;
const COL_EXIT_PRICE: usize = 9;
const COL_COMMISSION: usize = 10;
const COL_SWAP: usize = 11;
const COL_PROFIT: usize = 12;

const TIME_FORMATS: &[&str] = &[
    "%Y.%m.%d %H:%M:%S",
    "%Y.%m.%d %H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
];

/// What to do with a row that cannot be parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParsePolicy {
    /// Skip the row and keep going.
    #[default]
    BestEffort,
    /// Stop at the first bad row.
    Strict,
}

/// Parse a single data row into a [`Trade`].
pub fn parse_row(raw: &str) -> Result<Trade, ParseError> {
    let line = raw.trim_end_matches(['\r', '\n']);
    let fields: Vec<&str> = line.split('\t').collect();

    if fields.len() < MIN_FIELDS {
        return Err(ParseError::TooFewFields {
            expected: MIN_FIELDS,
            found: fields.len(),
        });
    }

    Ok(Trade {
        time: parse_time(fields[COL_TIME]),
        position: fields[COL_POSITION].trim().to_string(),
        symbol: fields[COL_SYMBOL].trim().to_string(),
        trade_type: TradeType::parse(fields[COL_TYPE]),
        volume: parse_number(fields[COL_VOLUME]),
        entry_price: parse_number(fields[COL_ENTRY_PRICE]),
        exit_time: parse_time(fields[COL_EXIT_TIME]),
        exit_price: parse_number(fields[COL_EXIT_PRICE]),
        commission: parse_number(fields[COL_COMMISSION]),
        swap: parse_number(fields[COL_SWAP]),
        profit: parse_number(fields[COL_PROFIT]),
    })
}

/// Parse a whole log (header first) into trades, in file order.
///
/// Blank lines are ignored under either policy.
pub fn parse_report(text: &str, policy: ParsePolicy) -> Result<Vec<Trade>, ParseError> {
    let mut trades = Vec::new();

    for (i, line) in text.lines().enumerate().skip(1) {
        if line.trim().is_empty() {
            continue;
        }

        match parse_row(line) {
            Ok(trade) => trades.push(trade),
            Err(err) => match policy {
                ParsePolicy::BestEffort => continue,
                ParsePolicy::Strict => {
                    return Err(ParseError::Strict {
                        line: i + 1,
                        source: Box::new(err),
                    })
                }
            },
        }
    }

    Ok(trades)
}

// -----------------------------------------------------------------------------
// Helpers
// -----------------------------------------------------------------------------

fn parse_number(s: &str) -> f64 {
    let cleaned: String = s.chars().filter(|c| !c.is_whitespace()).collect();
    match cleaned.parse::<f64>() {
        Ok(v) if v.is_finite() => v,
        _ => 0.0,
    }
}

fn parse_time(s: &str) -> Option<NaiveDateTime> {
    let trimmed = s.trim();
    TIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(trimmed, fmt).ok())
}
