//! Chart-ready series derived from a trade sequence.

use chrono::NaiveDate;
use indexmap::IndexMap;
use serde::Serialize;

use crate::trade::Trade;

/// How many symbols the performance ranking keeps by default.
pub const DEFAULT_TOP_SYMBOLS: usize = 10;

/// One point of the equity curve.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfitPoint {
    /// 1-based trade number in sequence order.
    pub index: usize,

    /// Date of the trade this point closes on (x-axis label).
    pub date: Option<NaiveDate>,

    /// Running sum of profit up to and including this trade.
    pub cumulative_profit: f64,
}

/// Total profit of a single symbol.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SymbolProfit {
    pub symbol: String,
    pub profit: f64,
}

/// Prefix sum of `profit`, one point per trade, in the order given.
///
/// The sequence order is taken as chronological; callers that need
/// time order should sort first (see [`crate::sort_chronologically`]).
pub fn cumulative_profit_series(trades: &[Trade]) -> Vec<ProfitPoint> {
    let mut running = 0.0;
    trades
        .iter()
        .enumerate()
        .map(|(i, trade)| {
            running += trade.profit;
            ProfitPoint {
                index: i + 1,
                date: trade.chart_date(),
                cumulative_profit: running,
            }
        })
        .collect()
}

/// Per-symbol profit, best first, at most `limit` entries.
///
/// Symbols with equal totals keep the order they first appeared in.
pub fn top_symbol_performance(trades: &[Trade], limit: usize) -> Vec<SymbolProfit> {
    let mut by_symbol: IndexMap<&str, f64> = IndexMap::new();
    for trade in trades {
        *by_symbol.entry(trade.symbol.as_str()).or_insert(0.0) += trade.profit;
    }

    let mut ranked: Vec<SymbolProfit> = by_symbol
        .into_iter()
        .map(|(symbol, profit)| SymbolProfit {
            symbol: symbol.to_string(),
            profit,
        })
        .collect();

    // Stable sort; NaN never appears because unparsable numbers become 0.
    ranked.sort_by(|a, b| b.profit.total_cmp(&a.profit));
    ranked.truncate(limit);
    ranked
}
