//! Liveness endpoint.
//!
//! Public so load balancers can poll it without a shared secret. Reports
//! the credential window the service enforces, never key material.

use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use hmac_auth_core::KeyPolicy;
use serde::Serialize;

use crate::state::AppState;

/// Name reported by `GET /health`.
pub const SERVICE_NAME: &str = "hmac-auth";

/// `GET /health` body.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Always `ok` while the process serves requests.
    pub status: &'static str,
    /// Always [`SERVICE_NAME`].
    pub service: &'static str,
    /// Crate version.
    pub version: &'static str,
    /// Accepted distance between a credential timestamp and server time.
    pub allowed_skew_seconds: i64,
    /// `any` or `first`, matching `HMAC_KEY_POLICY`.
    pub key_policy: &'static str,
}

/// Report liveness and the enforced credential window.
pub async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let key_policy = match state.validator.policy() {
        KeyPolicy::AnyKey => "any",
        KeyPolicy::PrimaryOnly => "first",
    };

    Json(HealthResponse {
        status: "ok",
        service: SERVICE_NAME,
        version: env!("CARGO_PKG_VERSION"),
        allowed_skew_seconds: state.validator.skew().num_seconds(),
        key_policy,
    })
}
