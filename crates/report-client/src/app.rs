// crates/report-client/src/app.rs

//! Loading every configured account and deriving its report.
//!
//! Accounts are fetched concurrently. A failure on one account (missing
//! file, HTTP error, timeout, strict-mode parse error) is logged and
//! leaves that account with an empty trade list; the others are not
//! affected.

use std::time::Duration;

use futures::future::join_all;
use serde::Serialize;
use tracing::{info, warn};

use report_core::{sort_chronologically, AccountReport, Trade};
use report_protocol::{parse_report, ParsePolicy};

use crate::network::{FetchError, TradeSource};
use crate::types::{AccountConfig, ViewerConfig};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadOptions {
    pub timeout: Duration,
    pub policy: ParsePolicy,
    pub sort_by_time: bool,
    pub top_symbols: usize,
}

impl From<&ViewerConfig> for LoadOptions {
    fn from(cfg: &ViewerConfig) -> Self {
        LoadOptions {
            timeout: cfg.timeout(),
            policy: if cfg.strict {
                ParsePolicy::Strict
            } else {
                ParsePolicy::BestEffort
            },
            sort_by_time: cfg.sort_by_time,
            top_symbols: cfg.top_symbols,
        }
    }
}

/// One account's trades and the report derived from them.
#[derive(Debug, Clone, Serialize)]
pub struct AccountData {
    #[serde(skip)]
    pub trades: Vec<Trade>,
    #[serde(flatten)]
    pub report: AccountReport,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

/// Fetch and parse one account's log. Never fails: any problem gives
/// an empty list and a warning.
pub async fn load_trades(source: &dyn TradeSource, account: &str, opts: &LoadOptions) -> Vec<Trade> {
    let text = match tokio::time::timeout(opts.timeout, source.fetch(account)).await {
        Ok(Ok(text)) => text,
        Ok(Err(err)) => {
            warn!(account, error = %err, "could not load trade log");
            return Vec::new();
        }
        Err(_) => {
            let err = FetchError::Timeout(opts.timeout);
            warn!(account, error = %err, "could not load trade log");
            return Vec::new();
        }
    };

    let mut trades = match parse_report(&text, opts.policy) {
        Ok(trades) => trades,
        Err(err) => {
            warn!(account, error = %err, "could not parse trade log");
            return Vec::new();
        }
    };

    if opts.sort_by_time {
        sort_chronologically(&mut trades);
    }
    trades
}

/// Load all `accounts` in parallel, preserving their order in the output.
pub async fn load_accounts(
    source: &dyn TradeSource,
    accounts: &[AccountConfig],
    opts: &LoadOptions,
) -> Vec<AccountData> {
    let loads = accounts.iter().map(|account| async move {
        let trades = load_trades(source, &account.id, opts).await;
        info!(account = account.id.as_str(), trades = trades.len(), "account loaded");
        let report = AccountReport::build(account.id.clone(), &trades, opts.top_symbols);
        AccountData {
            trades,
            report,
            label: account.label.clone(),
        }
    });

    join_all(loads).await
}
