//! Shared types for the notification gateway.
//!
//! This module defines:
//! - `Route`: which form endpoint a request arrived on
//! - the three request payloads and `NotificationRequest`
//! - `EmailMessage`: what the transport actually sends

use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::ValidationError;

/// The form endpoints exposed by the gateway.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Enroll,
    Contact,
    Newsletter,
}

impl Route {
    pub fn as_str(self) -> &'static str {
        match self {
            Route::Enroll => "enroll",
            Route::Contact => "contact",
            Route::Newsletter => "newsletter",
        }
    }

    /// Whether a transport failure is echoed back in the `details` field.
    pub fn exposes_failure_details(self) -> bool {
        matches!(self, Route::Contact)
    }
}

/// Course enrollment form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnrollRequest {
    pub name: String,
    pub language: String,
    pub phone: String,
    pub course: String,
}

/// General contact form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// Newsletter sign-up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewsletterRequest {
    pub email: String,
}

/// A validated form submission. Every field is untrusted text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotificationRequest {
    Enroll(EnrollRequest),
    Contact(ContactRequest),
    Newsletter(NewsletterRequest),
}

impl NotificationRequest {
    /// Validate a raw request body for `route`.
    ///
    /// Every declared field must be present, a string, and not blank.
    /// Email fields must also look like `local@domain`.
    pub fn from_body(route: Route, body: &[u8]) -> Result<Self, ValidationError> {
        let value: Value = serde_json::from_slice(body)
            .map_err(|e| ValidationError::MalformedJson(e.to_string()))?;
        let Value::Object(obj) = value else {
            return Err(ValidationError::NotAnObject);
        };

        let req = match route {
            Route::Enroll => NotificationRequest::Enroll(EnrollRequest {
                name: text_field(&obj, "name")?,
                language: text_field(&obj, "language")?,
                phone: text_field(&obj, "phone")?,
                course: text_field(&obj, "course")?,
            }),
            Route::Contact => NotificationRequest::Contact(ContactRequest {
                name: text_field(&obj, "name")?,
                email: email_field(&obj, "email")?,
                subject: text_field(&obj, "subject")?,
                message: text_field(&obj, "message")?,
            }),
            Route::Newsletter => NotificationRequest::Newsletter(NewsletterRequest {
                email: email_field(&obj, "email")?,
            }),
        };

        Ok(req)
    }

    pub fn route(&self) -> Route {
        match self {
            NotificationRequest::Enroll(_) => Route::Enroll,
            NotificationRequest::Contact(_) => Route::Contact,
            NotificationRequest::Newsletter(_) => Route::Newsletter,
        }
    }
}

/// An outbound plain-text email.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmailMessage {
    pub to: String,
    pub subject: String,
    pub text: String,
}

// -----------------------------------------------------------------------------
// Helpers
// -----------------------------------------------------------------------------

fn text_field(obj: &Map<String, Value>, name: &'static str) -> Result<String, ValidationError> {
    match obj.get(name) {
        None | Some(Value::Null) => Err(ValidationError::MissingField(name)),
        Some(Value::String(s)) if s.trim().is_empty() => Err(ValidationError::Empty(name)),
        Some(Value::String(s)) => Ok(s.clone()),
        Some(_) => Err(ValidationError::NotAString(name)),
    }
}

fn email_field(obj: &Map<String, Value>, name: &'static str) -> Result<String, ValidationError> {
    let value = text_field(obj, name)?;
    if looks_like_email(value.trim()) {
        Ok(value)
    } else {
        Err(ValidationError::InvalidEmail(name))
    }
}

fn looks_like_email(s: &str) -> bool {
    match s.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.is_empty()
                && !domain.contains('@')
                && !s.contains(char::is_whitespace)
        }
        None => false,
    }
}
