//! HTTP listener and top-level server wiring.
//!
//! This module:
//! - builds the mail transport from configuration,
//! - assembles the route tree (`routes`),
//! - serves it until Ctrl-C.
//!
//! Routes:
//! - `POST /api/enroll`
//! - `POST /api/contact`
//! - `POST /api/newsletter`
//! - `GET  /api/health`

use std::net::SocketAddr;

use anyhow::Context;
use bytes::Bytes;
use tracing::info;
use warp::reply::Response;
use warp::{Filter, Rejection, Reply};

use crate::config::Config;
use crate::handlers::{self, AppState};
use crate::transport;
use crate::types::Route;

/// Run the gateway with the given configuration.
pub async fn run(config: Config) -> anyhow::Result<()> {
    let transport = transport::from_config(&config.transport)
        .context("failed to build mail transport")?;
    let state = AppState::new(transport, config.staff_address.clone());

    let addr: SocketAddr = config
        .socket_addr_string()
        .parse()
        .with_context(|| format!("invalid listen address {}", config.socket_addr_string()))?;

    let api = routes(state, config.max_body_bytes, config.cors_origin.as_deref());

    let (bound, serving) = warp::serve(api)
        .try_bind_with_graceful_shutdown(addr, async {
            let _ = tokio::signal::ctrl_c().await;
        })
        .with_context(|| format!("failed to bind {}", addr))?;

    info!("Listening on {}", bound);
    serving.await;
    info!("Shutting down");

    Ok(())
}

/// The full route tree, ready to serve or to drive from tests.
pub fn routes(
    state: AppState,
    max_body_bytes: u64,
    cors_origin: Option<&str>,
) -> impl Filter<Extract = (impl Reply,), Error = std::convert::Infallible> + Clone {
    let enroll = form_endpoint(
        warp::path!("api" / "enroll"),
        Route::Enroll,
        state.clone(),
        max_body_bytes,
    );
    let contact = form_endpoint(
        warp::path!("api" / "contact"),
        Route::Contact,
        state.clone(),
        max_body_bytes,
    );
    let newsletter = form_endpoint(
        warp::path!("api" / "newsletter"),
        Route::Newsletter,
        state,
        max_body_bytes,
    );
    let health = warp::path!("api" / "health")
        .and(warp::get())
        .map(handlers::health);

    let cors = match cors_origin {
        Some(origin) => warp::cors().allow_origin(origin),
        None => warp::cors().allow_any_origin(),
    }
    .allow_methods(vec!["GET", "POST"])
    .allow_header("content-type");

    enroll
        .or(contact)
        .or(newsletter)
        .or(health)
        .with(cors)
        .recover(handlers::handle_rejection)
        .with(warp::trace::request())
}

fn form_endpoint<P>(
    path: P,
    route: Route,
    state: AppState,
    max_body_bytes: u64,
) -> impl Filter<Extract = (Response,), Error = Rejection> + Clone
where
    P: Filter<Extract = (), Error = Rejection> + Clone + Send + Sync + 'static,
{
    path.and(warp::post())
        .and(warp::body::content_length_limit(max_body_bytes))
        .and(warp::body::bytes())
        .and(warp::any().map(move || state.clone()))
        .and_then(move |body: Bytes, state: AppState| {
            handlers::handle_notification(route, body, state)
        })
}
