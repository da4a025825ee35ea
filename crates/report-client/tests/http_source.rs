// crates/report-client/tests/http_source.rs
use std::time::Duration;

use report_client::app::{load_accounts, LoadOptions};
use report_client::network::{FetchError, HttpSource, TradeSource};
use report_client::types::{AccountConfig, ViewerConfig};
use warp::http::StatusCode;
use warp::Filter;

const LOG: &str = include_str!("data/1001.tsv");

/// Serve a tiny site on an ephemeral port and return its base URL.
///
/// - `/data/1001.tsv` : the fixture log
/// - `/data/5005.tsv` : 500
/// - anything else    : 404
fn start_site() -> String {
    let log = warp::path!("data" / "1001.tsv").map(|| LOG);
    let broken = warp::path!("data" / "5005.tsv")
        .map(|| warp::reply::with_status("boom", StatusCode::INTERNAL_SERVER_ERROR));

    let (addr, server) = warp::serve(warp::get().and(log.or(broken)))
        .bind_ephemeral(([127, 0, 0, 1], 0));
    tokio::spawn(server);

    format!("http://{}/", addr)
}

#[tokio::test]
async fn fetches_log_over_http() {
    let source = HttpSource::new(&start_site(), Duration::from_secs(5)).unwrap();
    let text = source.fetch("1001").await.unwrap();
    assert_eq!(text, LOG);
}

#[tokio::test]
async fn non_success_status_is_an_error() {
    let source = HttpSource::new(&start_site(), Duration::from_secs(5)).unwrap();

    let err = source.fetch("5005").await.unwrap_err();
    assert!(matches!(err, FetchError::Status(500)), "got {:?}", err);

    let err = source.fetch("4040").await.unwrap_err();
    assert!(matches!(err, FetchError::Status(404)), "got {:?}", err);
}

#[tokio::test]
async fn missing_logs_degrade_per_account() {
    let source = HttpSource::new(&start_site(), Duration::from_secs(5)).unwrap();
    let accounts = vec![
        AccountConfig::from_id("4040"),
        AccountConfig::from_id("1001"),
        AccountConfig::from_id("5005"),
    ];

    let loaded = load_accounts(&source, &accounts, &LoadOptions::from(&ViewerConfig::default())).await;

    assert_eq!(loaded.len(), 3);
    assert!(loaded[0].trades.is_empty());
    assert_eq!(loaded[0].report.summary.total_trades, 0);
    assert_eq!(loaded[1].trades.len(), 3);
    assert_eq!(loaded[1].report.summary.total_trades, 3);
    assert!(loaded[2].trades.is_empty());
}
