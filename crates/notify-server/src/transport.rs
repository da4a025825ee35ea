//! Outbound mail transports.
//!
//! Handlers only see `Arc<dyn MailTransport>`; which implementation sits
//! behind it is decided once at startup from [`TransportConfig`].
//! A transport is called exactly once per accepted request and never
//! retries.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use serde::Serialize;
use tracing::info;

use crate::config::TransportConfig;
use crate::error::TransportError;
use crate::types::EmailMessage;

/// Something that can deliver an [`EmailMessage`].
#[async_trait]
pub trait MailTransport: Send + Sync {
    async fn send(&self, msg: &EmailMessage) -> Result<(), TransportError>;
}

/// Build the transport described by `config`.
pub fn from_config(config: &TransportConfig) -> Result<Arc<dyn MailTransport>, TransportError> {
    match config {
        TransportConfig::Http {
            api_url,
            api_key,
            from,
            timeout,
        } => Ok(Arc::new(HttpMailTransport::new(
            api_url.clone(),
            api_key.clone(),
            from.clone(),
            *timeout,
        )?)),
        TransportConfig::Log => Ok(Arc::new(LogTransport)),
    }
}

/// Sends mail through a JSON mail API.
///
/// Request: `POST {api_url}` with `Authorization: Bearer {api_key}` and
/// body `{ "from", "to", "subject", "text" }`. Any 2xx counts as sent.
pub struct HttpMailTransport {
    client: reqwest::Client,
    api_url: String,
    api_key: String,
    from: String,
}

#[derive(Serialize)]
struct ApiPayload<'a> {
    from: &'a str,
    to: &'a str,
    subject: &'a str,
    text: &'a str,
}

impl HttpMailTransport {
    pub fn new(
        api_url: String,
        api_key: String,
        from: String,
        timeout: Duration,
    ) -> Result<Self, TransportError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            api_url,
            api_key,
            from,
        })
    }
}

#[async_trait]
impl MailTransport for HttpMailTransport {
    async fn send(&self, msg: &EmailMessage) -> Result<(), TransportError> {
        let payload = ApiPayload {
            from: &self.from,
            to: &msg.to,
            subject: &msg.subject,
            text: &msg.text,
        };

        let resp = self
            .client
            .post(&self.api_url)
            .bearer_auth(&self.api_key)
            .json(&payload)
            .send()
            .await?;

        let status = resp.status();
        if status.is_success() {
            return Ok(());
        }

        let body = resp.text().await.unwrap_or_default();
        Err(TransportError::Rejected {
            status: status.as_u16(),
            body,
        })
    }
}

/// Logs each message instead of sending it.
pub struct LogTransport;

#[async_trait]
impl MailTransport for LogTransport {
    async fn send(&self, msg: &EmailMessage) -> Result<(), TransportError> {
        info!(to = %msg.to, subject = %msg.subject, "mail (log transport)\n{}", msg.text);
        Ok(())
    }
}
