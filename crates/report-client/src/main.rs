// crates/report-client/src/main.rs

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{bail, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use report_client::app::{load_accounts, LoadOptions};
use report_client::export::{export_account, ExportKind};
use report_client::network::{DirSource, HttpSource, TradeSource};
use report_client::types::{AccountConfig, ViewerConfig};

#[derive(Parser)]
#[clap(name = "report-client")]
#[clap(about = "Trade performance reports for the site's showcased accounts")]
struct Cli {
    /// TOML configuration file
    #[clap(short, long)]
    config: Option<PathBuf>,

    /// Site root serving /data/{account}.tsv
    #[clap(short, long)]
    base_url: Option<String>,

    /// Read {account}.tsv from this directory instead of over HTTP
    #[clap(short, long)]
    data_dir: Option<PathBuf>,

    /// Account ids, comma separated
    #[clap(short, long, value_delimiter = ',')]
    accounts: Vec<String>,

    /// Per-account fetch timeout in seconds
    #[clap(long)]
    timeout_secs: Option<u64>,

    /// Symbols kept in the performance ranking
    #[clap(long)]
    top: Option<usize>,

    /// Sort trades by open time instead of keeping file order
    #[clap(long)]
    sort_by_time: bool,

    /// Drop an account on its first malformed row
    #[clap(long)]
    strict: bool,

    /// Export a table as CSV instead of printing JSON reports
    #[clap(short, long, value_enum)]
    export: Option<ExportKind>,

    /// Directory for exported CSV files (stdout if omitted)
    #[clap(short, long)]
    out_dir: Option<PathBuf>,
}

impl Cli {
    async fn into_config(self) -> Result<(ViewerConfig, Option<ExportKind>, Option<PathBuf>)> {
        let mut cfg = match &self.config {
            Some(path) => ViewerConfig::load(path).await?,
            None => ViewerConfig::default(),
        };

        if self.base_url.is_some() {
            cfg.base_url = self.base_url;
        }
        if self.data_dir.is_some() {
            cfg.data_dir = self.data_dir;
        }
        if !self.accounts.is_empty() {
            cfg.accounts = self.accounts.into_iter().map(AccountConfig::from_id).collect();
        }
        if let Some(secs) = self.timeout_secs {
            cfg.timeout_secs = secs;
        }
        if let Some(top) = self.top {
            cfg.top_symbols = top;
        }
        cfg.sort_by_time |= self.sort_by_time;
        cfg.strict |= self.strict;

        Ok((cfg, self.export, self.out_dir))
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let (cfg, export, out_dir) = Cli::parse().into_config().await?;

    if cfg.accounts.is_empty() {
        bail!("no accounts given (use --accounts or the config file)");
    }

    let source: Arc<dyn TradeSource> = match (&cfg.data_dir, &cfg.base_url) {
        (Some(dir), _) => Arc::new(DirSource::new(dir.clone())),
        (None, Some(url)) => Arc::new(HttpSource::new(url, cfg.timeout())?),
        (None, None) => bail!("either --base-url or --data-dir is required"),
    };

    let opts = LoadOptions::from(&cfg);
    let accounts = load_accounts(source.as_ref(), &cfg.accounts, &opts).await;

    let Some(kind) = export else {
        println!("{}", serde_json::to_string_pretty(&accounts)?);
        return Ok(());
    };

    for data in &accounts {
        let csv = export_account(kind, data)?;
        match &out_dir {
            Some(dir) => {
                tokio::fs::create_dir_all(dir).await?;
                let path = dir.join(kind.file_name(&data.report.account));
                tokio::fs::write(&path, csv).await?;
                info!("wrote {}", path.display());
            }
            None => {
                println!("# {}", data.report.account);
                println!("{}", csv);
            }
        }
    }

    Ok(())
}
