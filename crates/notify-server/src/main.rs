//! Notification gateway binary.

use notify_server::config::Config;
use notify_server::server;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = Config::from_env()?;

    tracing::info!(
        "Starting notify-server on {}:{} (max body {} bytes)",
        config.bind_addr,
        config.port,
        config.max_body_bytes
    );

    server::run(config).await
}
