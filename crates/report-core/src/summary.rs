//! Aggregate statistics over a sequence of trades.
//!
//! Everything here is derived: recompute whenever the trade list changes.

use serde::Serialize;

use crate::trade::Trade;

/// Headline numbers for one account.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AccountSummary {
    pub total_trades: usize,
    pub profitable_trades: usize,
    pub loss_trades: usize,

    /// Percentage of trades with `profit > 0`, in `[0, 100]`.
    pub win_rate: f64,

    pub total_profit: f64,

    /// Mean profit of winning trades (0 when there are none).
    pub avg_profit: f64,

    /// Mean profit of losing trades, negative (0 when there are none).
    pub avg_loss: f64,

    pub best_trade: f64,
    pub worst_trade: f64,

    pub total_commission: f64,
    pub total_swap: f64,
    pub total_volume: f64,
}

impl AccountSummary {
    /// Compute the summary in a single pass.
    ///
    /// An empty slice yields the all-zero summary.
    pub fn from_trades(trades: &[Trade]) -> Self {
        if trades.is_empty() {
            return AccountSummary::default();
        }

        let mut summary = AccountSummary {
            total_trades: trades.len(),
            best_trade: f64::NEG_INFINITY,
            worst_trade: f64::INFINITY,
            ..AccountSummary::default()
        };

        let mut gross_profit = 0.0;
        let mut gross_loss = 0.0;

        for trade in trades {
            summary.total_profit += trade.profit;
            summary.total_commission += trade.commission;
            summary.total_swap += trade.swap;
            summary.total_volume += trade.volume;
            summary.best_trade = summary.best_trade.max(trade.profit);
            summary.worst_trade = summary.worst_trade.min(trade.profit);

            if trade.is_win() {
                summary.profitable_trades += 1;
                gross_profit += trade.profit;
            } else if trade.is_loss() {
                summary.loss_trades += 1;
                gross_loss += trade.profit;
            }
        }

        summary.win_rate = win_rate(trades);
        summary.avg_profit = mean(gross_profit, summary.profitable_trades);
        summary.avg_loss = mean(gross_loss, summary.loss_trades);
        summary
    }
}

/// Sum of `profit` over all trades.
pub fn total_profit(trades: &[Trade]) -> f64 {
    trades.iter().map(|t| t.profit).sum()
}

/// Share of winning trades as a percentage; 0 for an empty slice.
pub fn win_rate(trades: &[Trade]) -> f64 {
    if trades.is_empty() {
        return 0.0;
    }
    let wins = trades.iter().filter(|t| t.is_win()).count();
    wins as f64 / trades.len() as f64 * 100.0
}

fn mean(sum: f64, count: usize) -> f64 {
    if count == 0 {
        0.0
    } else {
        sum / count as f64
    }
}
