//! Request handlers.
//!
//! One handler serves all three form routes: validate, build the email,
//! call the transport once, answer. Nothing here can fail the process;
//! every outcome is turned into a response.

use std::convert::Infallible;
use std::sync::Arc;

use bytes::Bytes;
use serde_json::{json, Value};
use tracing::{error, info, warn};
use warp::http::StatusCode;
use warp::reply::Response;
use warp::{Rejection, Reply};

use crate::email::build_email;
use crate::error::ValidationError;
use crate::transport::MailTransport;
use crate::types::{NotificationRequest, Route};

pub const SENT_MESSAGE: &str = "Email sent successfully";
pub const SEND_FAILED: &str = "Failed to send email";
pub const INVALID_REQUEST: &str = "Invalid request";

/// Dependencies handed to every request.
///
/// Cheap to clone; shared read-only across concurrent requests.
#[derive(Clone)]
pub struct AppState {
    pub transport: Arc<dyn MailTransport>,
    pub staff_address: Arc<str>,
}

impl AppState {
    pub fn new(transport: Arc<dyn MailTransport>, staff_address: impl Into<Arc<str>>) -> Self {
        Self {
            transport,
            staff_address: staff_address.into(),
        }
    }
}

/// Handle a form submission on `route`.
pub async fn handle_notification(
    route: Route,
    body: Bytes,
    state: AppState,
) -> Result<Response, Infallible> {
    let req = match NotificationRequest::from_body(route, &body) {
        Ok(req) => req,
        Err(err) => {
            warn!(route = route.as_str(), error = %err, "rejected submission");
            return Ok(validation_response(&err));
        }
    };

    let email = build_email(&req, &state.staff_address);

    match state.transport.send(&email).await {
        Ok(()) => {
            info!(route = req.route().as_str(), subject = %email.subject, "notification sent");
            Ok(json_response(
                StatusCode::OK,
                &json!({ "message": SENT_MESSAGE }),
            ))
        }
        Err(err) => {
            error!(route = route.as_str(), error = %err, "failed to send notification");
            let mut body = json!({ "error": SEND_FAILED });
            if route.exposes_failure_details() {
                body["details"] = Value::String(err.to_string());
            }
            Ok(json_response(StatusCode::INTERNAL_SERVER_ERROR, &body))
        }
    }
}

/// Liveness probe.
pub fn health() -> Response {
    json_response(StatusCode::OK, &json!({ "status": "ok" }))
}

/// Map warp rejections (unknown path, wrong method, oversized body...)
/// to JSON error bodies.
pub async fn handle_rejection(err: Rejection) -> Result<Response, Infallible> {
    let (status, message) = if err.is_not_found() {
        (StatusCode::NOT_FOUND, "Not found")
    } else if err.find::<warp::reject::PayloadTooLarge>().is_some() {
        (StatusCode::PAYLOAD_TOO_LARGE, "Payload too large")
    } else if err.find::<warp::reject::LengthRequired>().is_some() {
        (StatusCode::LENGTH_REQUIRED, "Content-Length required")
    } else if err.find::<warp::reject::MethodNotAllowed>().is_some() {
        (StatusCode::METHOD_NOT_ALLOWED, "Method not allowed")
    } else if err.find::<warp::cors::CorsForbidden>().is_some() {
        (StatusCode::FORBIDDEN, "Origin not allowed")
    } else {
        error!("unhandled rejection: {:?}", err);
        (StatusCode::INTERNAL_SERVER_ERROR, "Internal error")
    };

    Ok(json_response(status, &json!({ "error": message })))
}

// -----------------------------------------------------------------------------
// Helpers
// -----------------------------------------------------------------------------

fn validation_response(err: &ValidationError) -> Response {
    let mut body = json!({
        "error": INVALID_REQUEST,
        "details": err.to_string(),
    });
    if let Some(field) = err.field() {
        body["field"] = Value::String(field.to_string());
    }
    json_response(StatusCode::BAD_REQUEST, &body)
}

fn json_response(status: StatusCode, body: &Value) -> Response {
    warp::reply::with_status(warp::reply::json(body), status).into_response()
}
