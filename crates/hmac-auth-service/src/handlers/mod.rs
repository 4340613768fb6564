//! API handlers.

use axum::http::Uri;

use crate::error::ApiError;

pub mod admin;
pub mod health;

/// Fallback for unknown routes.
pub async fn not_found(uri: Uri) -> ApiError {
    ApiError::NotFound(uri.path().to_string())
}
