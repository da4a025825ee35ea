//! Configuration for the notification gateway.
//!
//! Everything comes from environment variables. Credentials and the
//! staff address have no defaults; startup fails without them.
//!
//! - `NOTIFY_BIND_ADDR`         (default: "0.0.0.0")
//! - `NOTIFY_PORT`              (default: "8080")
//! - `NOTIFY_STAFF_ADDRESS`     (required)
//! - `NOTIFY_MAIL_TRANSPORT`    (default: "http"; "log" prints instead of sending)
//! - `NOTIFY_MAIL_FROM`         (required for "http")
//! - `NOTIFY_MAIL_API_URL`      (required for "http")
//! - `NOTIFY_MAIL_API_KEY`      (required for "http")
//! - `NOTIFY_MAIL_TIMEOUT_SECS` (default: "10")
//! - `NOTIFY_MAX_BODY_BYTES`    (default: "16384")
//! - `NOTIFY_CORS_ORIGIN`       (default: any origin)

use std::env;
use std::str::FromStr;
use std::time::Duration;

use crate::error::ConfigError;

/// How outbound mail leaves the process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransportConfig {
    /// POST to a mail API.
    Http {
        api_url: String,
        api_key: String,
        from: String,
        timeout: Duration,
    },
    /// Log the message and report success. Development only.
    Log,
}

/// Gateway configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// IP address / interface to bind to (e.g. "0.0.0.0" or "127.0.0.1").
    pub bind_addr: String,

    /// TCP port to listen on.
    pub port: u16,

    /// Where every notification is delivered.
    pub staff_address: String,

    pub transport: TransportConfig,

    /// Largest accepted request body.
    pub max_body_bytes: u64,

    /// Allowed CORS origin; `None` allows any.
    pub cors_origin: Option<String>,
}

impl Config {
    /// Construct a `Config` from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`Config::from_env`] but reading through `lookup`, so
    /// tests do not have to mutate the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bind_addr = lookup("NOTIFY_BIND_ADDR").unwrap_or_else(|| "0.0.0.0".to_string());
        let port = read_or_default(&lookup, "NOTIFY_PORT", 8080u16)?;
        let staff_address = required(&lookup, "NOTIFY_STAFF_ADDRESS")?;
        let max_body_bytes = read_or_default(&lookup, "NOTIFY_MAX_BODY_BYTES", 16 * 1024u64)?;
        let cors_origin = match lookup("NOTIFY_CORS_ORIGIN").filter(|v| !v.trim().is_empty()) {
            Some(raw) => Some(normalize_origin(&raw)?),
            None => None,
        };

        let kind = lookup("NOTIFY_MAIL_TRANSPORT").unwrap_or_else(|| "http".to_string());
        let transport = match kind.trim().to_ascii_lowercase().as_str() {
            "http" => TransportConfig::Http {
                api_url: required(&lookup, "NOTIFY_MAIL_API_URL")?,
                api_key: required(&lookup, "NOTIFY_MAIL_API_KEY")?,
                from: required(&lookup, "NOTIFY_MAIL_FROM")?,
                timeout: Duration::from_secs(read_or_default(
                    &lookup,
                    "NOTIFY_MAIL_TIMEOUT_SECS",
                    10u64,
                )?),
            },
            "log" => TransportConfig::Log,
            _ => {
                return Err(ConfigError::Invalid {
                    key: "NOTIFY_MAIL_TRANSPORT",
                    reason: format!("unknown transport {:?} (expected \"http\" or \"log\")", kind),
                })
            }
        };

        Ok(Config {
            bind_addr,
            port,
            staff_address,
            transport,
            max_body_bytes,
            cors_origin,
        })
    }

    /// Convenience: `addr:port` socket string.
    pub fn socket_addr_string(&self) -> String {
        format!("{}:{}", self.bind_addr, self.port)
    }
}

/// Reduce `raw` to a bare `scheme://host[:port]` origin.
fn normalize_origin(raw: &str) -> Result<String, ConfigError> {
    let invalid = |reason: &str| ConfigError::Invalid {
        key: "NOTIFY_CORS_ORIGIN",
        reason: format!("{:?}: {}", raw, reason),
    };

    let url = reqwest::Url::parse(raw.trim()).map_err(|e| invalid(&e.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid("scheme must be http or https"));
    }
    if url.path() != "/" || url.query().is_some() {
        return Err(invalid("origin must not carry a path or query"));
    }

    if url.host_str().is_none() {
        return Err(invalid("origin has no host"));
    }

    Ok(url.origin().ascii_serialization())
}

fn required<F>(lookup: &F, key: &'static str) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(val) if !val.trim().is_empty() => Ok(val),
        _ => Err(ConfigError::Missing(key)),
    }
}

fn read_or_default<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        Some(val) => val.trim().parse::<T>().map_err(|e| ConfigError::Invalid {
            key,
            reason: e.to_string(),
        }),
        None => Ok(default),
    }
}
