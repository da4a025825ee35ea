// crates/report-client/src/network.rs

//! Where trade logs come from.
//!
//! - [`HttpSource`]: `{base_url}/data/{account}.tsv` over HTTP
//! - [`DirSource`]:  `{dir}/{account}.tsv` on disk

use std::path::PathBuf;
use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("invalid account id {0:?}")]
    InvalidAccount(String),

    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("server answered {0}")]
    Status(u16),

    #[error("read failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("timed out after {0:?}")]
    Timeout(Duration),
}

/// A place trade logs can be read from, one log per account.
#[async_trait]
pub trait TradeSource: Send + Sync {
    /// Raw log text for `account`.
    async fn fetch(&self, account: &str) -> Result<String, FetchError>;
}

pub struct HttpSource {
    client: reqwest::Client,
    base_url: String,
}

impl HttpSource {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn url_for(&self, account: &str) -> String {
        format!("{}/data/{}.tsv", self.base_url, account)
    }
}

#[async_trait]
impl TradeSource for HttpSource {
    async fn fetch(&self, account: &str) -> Result<String, FetchError> {
        check_account(account)?;
        let url = self.url_for(account);
        debug!("GET {}", url);

        let resp = self.client.get(&url).send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }
        Ok(resp.text().await?)
    }
}

pub struct DirSource {
    dir: PathBuf,
}

impl DirSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

#[async_trait]
impl TradeSource for DirSource {
    async fn fetch(&self, account: &str) -> Result<String, FetchError> {
        check_account(account)?;
        let path = self.dir.join(format!("{}.tsv", account));
        debug!("reading {}", path.display());
        Ok(tokio::fs::read_to_string(&path).await?)
    }
}

/// Account ids end up in URLs and file names; keep them to `[A-Za-z0-9_-]`.
fn check_account(account: &str) -> Result<(), FetchError> {
    let ok = !account.is_empty()
        && account
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
    if ok {
        Ok(())
    } else {
        Err(FetchError::InvalidAccount(account.to_string()))
    }
}
