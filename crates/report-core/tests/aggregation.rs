// crates/report-core/tests/aggregation.rs
use chrono::NaiveDate;
use report_core::{
    cumulative_profit_series, sort_chronologically, top_symbol_performance, total_profit,
    win_rate, AccountReport, AccountSummary, Trade, TradeType, DEFAULT_TOP_SYMBOLS,
};

/// A trade carrying only a symbol and a profit.
fn closed(symbol: impl Into<String>, profit: f64) -> Trade {
    Trade {
        time: None,
        position: String::new(),
        symbol: symbol.into(),
        trade_type: TradeType::Buy,
        volume: 0.0,
        entry_price: 0.0,
        exit_time: None,
        exit_price: 0.0,
        profit,
        swap: 0.0,
        commission: 0.0,
    }
}

fn trades(profits: &[f64]) -> Vec<Trade> {
    profits.iter().map(|p| closed("EURUSD", *p)).collect()
}

fn at(day: u32) -> Option<chrono::NaiveDateTime> {
    NaiveDate::from_ymd_opt(2024, 1, day).and_then(|d| d.and_hms_opt(12, 0, 0))
}

#[test]
fn win_rate_of_empty_sequence_is_zero() {
    assert_eq!(win_rate(&[]), 0.0);
    assert_eq!(AccountSummary::from_trades(&[]), AccountSummary::default());
}

#[test]
fn win_rate_counts_positive_profits() {
    let rate = win_rate(&trades(&[10.0, -5.0, 3.0]));
    assert!((rate - 66.67).abs() < 0.01, "got {}", rate);
}

#[test]
fn summary_splits_wins_and_losses() {
    let summary = AccountSummary::from_trades(&trades(&[10.0, -5.0, 3.0, 0.0, -1.0]));

    assert_eq!(summary.total_trades, 5);
    assert_eq!(summary.profitable_trades, 2);
    assert_eq!(summary.loss_trades, 2);
    assert!((summary.total_profit - 7.0).abs() < 1e-9);
    assert!((summary.avg_profit - 6.5).abs() < 1e-9);
    assert!((summary.avg_loss + 3.0).abs() < 1e-9);
    assert_eq!(summary.best_trade, 10.0);
    assert_eq!(summary.worst_trade, -5.0);
    assert!((summary.win_rate - 40.0).abs() < 1e-9);
}

#[test]
fn averages_are_zero_without_wins_or_losses() {
    let only_wins = AccountSummary::from_trades(&trades(&[1.0, 2.0]));
    assert_eq!(only_wins.avg_loss, 0.0);

    let only_losses = AccountSummary::from_trades(&trades(&[-1.0, -2.0]));
    assert_eq!(only_losses.avg_profit, 0.0);
    assert_eq!(only_losses.win_rate, 0.0);
}

#[test]
fn cumulative_series_is_prefix_sum() {
    let series = cumulative_profit_series(&trades(&[10.0, -5.0, 3.0]));
    let values: Vec<f64> = series.iter().map(|p| p.cumulative_profit).collect();
    let indices: Vec<usize> = series.iter().map(|p| p.index).collect();

    assert_eq!(values, vec![10.0, 5.0, 8.0]);
    assert_eq!(indices, vec![1, 2, 3]);
    assert!((total_profit(&trades(&[10.0, -5.0, 3.0])) - 8.0).abs() < 1e-9);
}

#[test]
fn cumulative_series_dates_prefer_close_time() {
    let mut trade = closed("EURUSD", 1.0);
    trade.time = at(2);
    trade.exit_time = at(3);
    let mut open_only = closed("EURUSD", 1.0);
    open_only.time = at(4);

    let series = cumulative_profit_series(&[trade, open_only]);
    assert_eq!(series[0].date, NaiveDate::from_ymd_opt(2024, 1, 3));
    assert_eq!(series[1].date, NaiveDate::from_ymd_opt(2024, 1, 4));
}

#[test]
fn top_symbols_sum_and_rank() {
    let input = vec![
        closed("EURUSD", 10.0),
        closed("EURUSD", -3.0),
        closed("GBPUSD", 1.0),
    ];

    let ranked = top_symbol_performance(&input, DEFAULT_TOP_SYMBOLS);
    assert_eq!(ranked.len(), 2);
    assert_eq!(ranked[0].symbol, "EURUSD");
    assert!((ranked[0].profit - 7.0).abs() < 1e-9);
    assert_eq!(ranked[1].symbol, "GBPUSD");
    assert!((ranked[1].profit - 1.0).abs() < 1e-9);
}

#[test]
fn top_symbols_truncates_to_limit() {
    let input: Vec<Trade> = (0..15)
        .map(|i| closed(format!("SYM{}", i), i as f64))
        .collect();

    let ranked = top_symbol_performance(&input, DEFAULT_TOP_SYMBOLS);
    assert_eq!(ranked.len(), 10);
    assert_eq!(ranked[0].symbol, "SYM14");
    assert!(ranked.windows(2).all(|w| w[0].profit >= w[1].profit));
}

#[test]
fn chronological_sort_is_stable_and_puts_untimed_last() {
    let mut a = closed("A", 1.0);
    a.time = at(5);
    let b = closed("B", 1.0);
    let mut c = closed("C", 1.0);
    c.time = at(1);
    let d = closed("D", 1.0);

    let mut list = vec![a, b, c, d];
    sort_chronologically(&mut list);

    let order: Vec<&str> = list.iter().map(|t| t.symbol.as_str()).collect();
    assert_eq!(order, vec!["C", "A", "B", "D"]);
}

#[test]
fn report_bundles_summary_and_series() {
    let report = AccountReport::build("1001", &trades(&[10.0, -5.0, 3.0]), 10);
    assert_eq!(report.account, "1001");
    assert_eq!(report.summary.total_trades, 3);
    assert_eq!(report.series.cumulative_profit.len(), 3);
    assert_eq!(report.series.top_symbols.len(), 1);

    let empty = AccountReport::empty("1002");
    assert_eq!(empty.summary.win_rate, 0.0);
    assert!(empty.series.cumulative_profit.is_empty());
}
