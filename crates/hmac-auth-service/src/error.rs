//! API and configuration error types.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use hmac_auth_core::{AuthError, KeySetError};

/// API error type.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request failed HMAC authentication.
    #[error("unauthorized: {0}")]
    Unauthorized(#[from] AuthError),

    /// No route matched.
    #[error("not found: {0}")]
    NotFound(String),
}

/// JSON error response body: `{"error": "<reason>"}`.
#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error) = match &self {
            Self::Unauthorized(err) => (StatusCode::UNAUTHORIZED, err.reason()),
            Self::NotFound(path) => (StatusCode::NOT_FOUND, format!("no route for {path}")),
        };

        (status, Json(ErrorResponse { error })).into_response()
    }
}

/// Errors loading [`crate::ServiceConfig`]. All are fatal at startup.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// `HMAC_KEYS` is unset or lists no key.
    #[error("please set the HMAC_KEYS environment variable: {0}")]
    MissingKeys(#[from] KeySetError),

    /// A setting is present but unusable.
    #[error("invalid {name}: {message}")]
    Invalid {
        /// The environment variable.
        name: &'static str,
        /// What is wrong with it.
        message: String,
    },
}
