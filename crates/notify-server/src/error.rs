//! Error types for the gateway.
//!
//! Validation errors become `400`, transport errors become `500`,
//! configuration errors stop the process at startup.

use thiserror::Error;

/// A request body that cannot be turned into a notification.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("body is not valid JSON: {0}")]
    MalformedJson(String),

    #[error("body must be a JSON object")]
    NotAnObject,

    #[error("missing required field `{0}`")]
    MissingField(&'static str),

    #[error("field `{0}` must be a string")]
    NotAString(&'static str),

    #[error("field `{0}` must not be empty")]
    Empty(&'static str),

    #[error("field `{0}` is not a valid email address")]
    InvalidEmail(&'static str),
}

impl ValidationError {
    /// Name of the offending field, when there is one.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            ValidationError::MalformedJson(_) | ValidationError::NotAnObject => None,
            ValidationError::MissingField(f)
            | ValidationError::NotAString(f)
            | ValidationError::Empty(f)
            | ValidationError::InvalidEmail(f) => Some(f),
        }
    }
}

/// The mail transport failed to hand off a message.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("mail request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("mail API rejected the message with status {status}: {body}")]
    Rejected { status: u16, body: String },
}

/// Bad or missing startup configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required setting {0}")]
    Missing(&'static str),

    #[error("invalid value for {key}: {reason}")]
    Invalid { key: &'static str, reason: String },
}
