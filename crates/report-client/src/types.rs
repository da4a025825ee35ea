// crates/report-client/src/types.rs

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use report_core::DEFAULT_TOP_SYMBOLS;

/// Configuration for the report viewer.
///
/// Loaded from TOML; every field is optional there and command-line
/// flags take precedence.
///
/// ```toml
/// base_url = "https://academy.example.com"
/// accounts = [
///     { id = "51234567", label = "Swing" },
///     "51234568",
/// ]
/// timeout_secs = 10
/// top_symbols = 10
/// sort_by_time = false
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    /// Site root; logs are fetched from `{base_url}/data/{account}.tsv`.
    pub base_url: Option<String>,

    /// Local directory holding `{account}.tsv` files, used instead of `base_url`.
    pub data_dir: Option<PathBuf>,

    pub accounts: Vec<AccountConfig>,

    /// Per-account fetch timeout.
    pub timeout_secs: u64,

    pub top_symbols: usize,

    /// Sort each log by open time before building series (default: file order).
    pub sort_by_time: bool,

    /// Fail an account on the first malformed row instead of skipping it.
    pub strict: bool,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            data_dir: None,
            accounts: Vec::new(),
            timeout_secs: 10,
            top_symbols: DEFAULT_TOP_SYMBOLS,
            sort_by_time: false,
            strict: false,
        }
    }
}

impl ViewerConfig {
    pub fn from_toml_str(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    pub async fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = tokio::fs::read_to_string(path).await?;
        Ok(Self::from_toml_str(&raw)?)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// One showcased account: its log id and an optional display label.
///
/// In TOML either a bare id (`"1001"`) or a table
/// (`{ id = "1001", label = "Main" }`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "AccountEntry")]
pub struct AccountConfig {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl AccountConfig {
    pub fn from_id(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: None,
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum AccountEntry {
    Id(String),
    Labelled {
        id: String,
        #[serde(default)]
        label: Option<String>,
    },
}

impl From<AccountEntry> for AccountConfig {
    fn from(entry: AccountEntry) -> Self {
        match entry {
            AccountEntry::Id(id) => AccountConfig::from_id(id),
            AccountEntry::Labelled { id, label } => AccountConfig { id, label },
        }
    }
}
