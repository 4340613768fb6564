//! Handlers behind HMAC authentication.

use axum::{Extension, Json};
use serde::Serialize;

use hmac_auth_core::Authorized;

/// Greeting returned to authenticated callers.
#[derive(Debug, Serialize)]
pub struct HelloResponse {
    /// Always `"world"`.
    pub hello: String,
}

/// `GET /admin/hello`.
pub async fn hello(Extension(authorized): Extension<Authorized>) -> Json<HelloResponse> {
    tracing::info!(
        timestamp = authorized.timestamp.timestamp(),
        key_index = authorized.key_index,
        "Serving authenticated hello"
    );

    Json(HelloResponse {
        hello: "world".to_string(),
    })
}
