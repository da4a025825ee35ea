//! The `{ summary, series }` object rendered per account.

use serde::Serialize;

use crate::series::{cumulative_profit_series, top_symbol_performance, ProfitPoint, SymbolProfit};
use crate::summary::AccountSummary;
use crate::trade::Trade;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ReportSeries {
    pub cumulative_profit: Vec<ProfitPoint>,
    pub top_symbols: Vec<SymbolProfit>,
}

/// Everything presentation needs for one account.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AccountReport {
    pub account: String,
    pub summary: AccountSummary,
    pub series: ReportSeries,
}

impl AccountReport {
    /// Derive the report for `account` from its trades (in the order given).
    pub fn build(account: impl Into<String>, trades: &[Trade], top_symbols: usize) -> Self {
        AccountReport {
            account: account.into(),
            summary: AccountSummary::from_trades(trades),
            series: ReportSeries {
                cumulative_profit: cumulative_profit_series(trades),
                top_symbols: top_symbol_performance(trades, top_symbols),
            },
        }
    }

    /// Zeroed report, used when an account's log could not be loaded.
    pub fn empty(account: impl Into<String>) -> Self {
        AccountReport {
            account: account.into(),
            summary: AccountSummary::default(),
            series: ReportSeries::default(),
        }
    }
}
