//! Router configuration.
//!
//! This module sets up the Axum router with all routes and middleware.

use std::sync::Arc;
use std::time::Duration;

use axum::middleware;
use axum::routing::get;
use axum::Router;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::auth::require_hmac;
use crate::handlers::{admin, health, not_found};
use crate::state::AppState;

/// Create the service router with all routes and middleware.
///
/// # Routes
///
/// ## Public
/// - `GET /health` - Health check
///
/// ## Admin (HMAC credential in the configured header)
/// - `GET /admin/hello` - Authenticated greeting
pub fn create_router(state: AppState) -> Router {
    // Extract config values before moving state
    let max_body_bytes = state.config.max_body_bytes;
    let request_timeout_seconds = state.config.request_timeout_seconds;

    let state = Arc::new(state);

    // `route_layer` so unknown admin paths still fall through to 404.
    let admin_routes = Router::new()
        .route("/hello", get(admin::hello))
        .route_layer(middleware::from_fn_with_state(
            Arc::clone(&state),
            require_hmac,
        ));

    Router::new()
        .route("/health", get(health::health))
        .nest("/admin", admin_routes)
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .layer(RequestBodyLimitLayer::new(max_body_bytes))
        .layer(TimeoutLayer::new(Duration::from_secs(
            request_timeout_seconds,
        )))
        .with_state(state)
}
