//! A single closed position read from a broker trade log.
//!
//! Records are immutable once parsed. Parsing itself lives in the
//! `report-protocol` crate; this type is purely logical.

use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;

use crate::trade_type::TradeType;

/// One closed position.
///
/// Timestamps are optional: an unreadable time column does not cost us
/// the rest of the row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Trade {
    /// Open time.
    pub time: Option<NaiveDateTime>,

    /// Broker position identifier.
    pub position: String,

    /// Instrument symbol, e.g. `"EURUSD"`.
    pub symbol: String,

    #[serde(rename = "type")]
    pub trade_type: TradeType,

    pub volume: f64,
    pub entry_price: f64,

    /// Close time.
    pub exit_time: Option<NaiveDateTime>,
    pub exit_price: f64,

    /// Net result of the position as reported by the broker.
    pub profit: f64,
    pub swap: f64,
    pub commission: f64,
}

impl Trade {
    pub fn is_win(&self) -> bool {
        self.profit > 0.0
    }

    pub fn is_loss(&self) -> bool {
        self.profit < 0.0
    }

    /// Date used on chart x-axes: close date, falling back to open date.
    pub fn chart_date(&self) -> Option<NaiveDate> {
        self.exit_time.or(self.time).map(|t| t.date())
    }
}

/// Sort trades by open time (stable).
///
/// Trades without an open time keep their relative order and go last.
/// Reports keep file order unless a caller opts into this.
pub fn sort_chronologically(trades: &mut [Trade]) {
    trades.sort_by(|a, b| match (a.time, b.time) {
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => std::cmp::Ordering::Less,
        (None, Some(_)) => std::cmp::Ordering::Greater,
        (None, None) => std::cmp::Ordering::Equal,
    });
}
