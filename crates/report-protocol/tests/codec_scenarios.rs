// crates/report-protocol/tests/codec_scenarios.rs
use chrono::NaiveDate;
use report_core::{AccountReport, TradeType};
use report_protocol::{export_csv, parse_report, parse_row, ParseError, ParsePolicy};
use serde::Serialize;

const LOG: &str = include_str!("data/account_5001.tsv");

fn row(fields: &[&str]) -> String {
    fields.join("\t")
}

#[test]
fn full_log_parses_in_file_order() {
    let trades = parse_report(LOG, ParsePolicy::BestEffort).expect("best effort never fails");

    // header dropped, short row dropped, blank line ignored
    assert_eq!(trades.len(), 4);

    let positions: Vec<&str> = trades.iter().map(|t| t.position.as_str()).collect();
    assert_eq!(positions, vec!["5001", "5002", "5003", "5004"]);

    let first = &trades[0];
    assert_eq!(first.symbol, "EURUSD");
    assert_eq!(first.trade_type, TradeType::Buy);
    assert_eq!(
        first.time,
        NaiveDate::from_ymd_opt(2024, 1, 2).and_then(|d| d.and_hms_opt(9, 15, 0))
    );
    assert_eq!(
        first.exit_time,
        NaiveDate::from_ymd_opt(2024, 1, 2).and_then(|d| d.and_hms_opt(14, 40, 12))
    );
    assert!((first.profit - 16.0).abs() < 1e-9);
    assert!((first.commission + 0.70).abs() < 1e-9);
    assert_eq!(trades[1].trade_type, TradeType::Sell);
}

#[test]
fn thousand_separators_are_tolerated() {
    let trades = parse_report(LOG, ParsePolicy::BestEffort).unwrap();
    let gold = &trades[2];
    assert!((gold.entry_price - 2045.10).abs() < 1e-9);
    assert!((gold.swap + 1.20).abs() < 1e-9);
}

#[test]
fn non_numeric_profit_defaults_to_zero() {
    let trades = parse_report(LOG, ParsePolicy::BestEffort).unwrap();
    assert_eq!(trades[3].profit, 0.0);

    let parsed = parse_row(&row(&[
        "2024.01.02 09:15:00", "1", "EURUSD", "buy", "abc", "1.1", "", "",
        "2024.01.02 10:00:00", "1.2", "", "0", "not-a-number",
    ]))
    .expect("13 fields is enough");
    assert_eq!(parsed.profit, 0.0);
    assert_eq!(parsed.volume, 0.0);
    assert_eq!(parsed.commission, 0.0);
}

#[test]
fn short_row_is_rejected() {
    let err = parse_row(&row(&["a"; 12])).unwrap_err();
    assert_eq!(err, ParseError::TooFewFields { expected: 13, found: 12 });

    let only_header_and_short = "header\nx\ty\tz\n";
    assert!(parse_report(only_header_and_short, ParsePolicy::BestEffort)
        .unwrap()
        .is_empty());
}

#[test]
fn bad_timestamp_keeps_the_row() {
    let parsed = parse_row(&row(&[
        "yesterday", "7", "USDJPY", "Balance", "1", "1", "", "", "", "1", "0", "0", "5",
    ]))
    .unwrap();
    assert_eq!(parsed.time, None);
    assert_eq!(parsed.exit_time, None);
    assert_eq!(parsed.trade_type, TradeType::Other("Balance".to_string()));
    assert_eq!(parsed.profit, 5.0);
}

#[test]
fn strict_policy_reports_the_failing_line() {
    let err = parse_report(LOG, ParsePolicy::Strict).unwrap_err();
    match err {
        ParseError::Strict { line, source } => {
            assert_eq!(line, 4);
            assert_eq!(*source, ParseError::TooFewFields { expected: 13, found: 3 });
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[derive(Serialize)]
struct Pair {
    a: u32,
    b: u32,
}

#[test]
fn csv_export_uses_first_record_keys() {
    let csv = export_csv(&[Pair { a: 1, b: 2 }]).unwrap();
    assert_eq!(csv, "a,b\n1,2");
}

#[test]
fn csv_export_of_nothing_is_empty() {
    let csv = export_csv::<Pair>(&[]).unwrap();
    assert_eq!(csv, "");
}

#[derive(Serialize)]
struct Note {
    symbol: String,
    text: String,
}

#[test]
fn csv_export_quotes_free_text() {
    let csv = export_csv(&[Note {
        symbol: "EURUSD".to_string(),
        text: "closed early, \"news\"".to_string(),
    }])
    .unwrap();
    assert_eq!(csv, "symbol,text\nEURUSD,\"closed early, \"\"news\"\"\"");
}

#[test]
fn csv_export_rejects_scalars() {
    assert!(export_csv(&[1, 2, 3]).is_err());
}

#[test]
fn report_series_export_to_csv() {
    let trades = parse_report(LOG, ParsePolicy::BestEffort).unwrap();
    let report = AccountReport::build("5001", &trades, 10);

    let csv = export_csv(&report.series.top_symbols).unwrap();
    let mut lines = csv.lines();
    assert_eq!(lines.next(), Some("symbol,profit"));
    assert_eq!(lines.next(), Some("XAUUSD,32.5"));
    assert_eq!(lines.next(), Some("EURUSD,16.0"));
    assert_eq!(lines.next(), Some("GBPUSD,-30.0"));

    let curve = export_csv(&report.series.cumulative_profit).unwrap();
    assert!(curve.starts_with("index,date,cumulative_profit\n1,2024-01-02,16.0"));
}
