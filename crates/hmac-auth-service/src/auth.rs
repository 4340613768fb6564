//! HMAC authentication middleware.
//!
//! Protected routes are wrapped with [`require_hmac`]:
//!
//! ```ignore
//! Router::new()
//!     .route("/hello", get(admin::hello))
//!     .route_layer(middleware::from_fn_with_state(state.clone(), require_hmac))
//! ```
//!
//! A rejected request never reaches the inner handler. An accepted request
//! carries [`hmac_auth_core::Authorized`] in its extensions.

use std::sync::Arc;

use axum::extract::{Request, State};
use axum::http::{HeaderMap, HeaderName};
use axum::middleware::Next;
use axum::response::Response;

use hmac_auth_core::{parse, AuthError, ParseError};

use crate::error::ApiError;
use crate::state::AppState;

/// Reject requests without a valid HMAC credential.
pub async fn require_hmac(
    State(state): State<Arc<AppState>>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let now = state.clock.now();
    let header = credential_header(request.headers(), &state.config.header_name);
    let claimed = match &header {
        Ok(Some(raw)) => claimed_timestamp(raw),
        _ => None,
    };
    let outcome = header.and_then(|value| state.validator.authenticate(value, now));

    match outcome {
        Ok(authorized) => {
            tracing::debug!(
                path = %request.uri().path(),
                key_index = authorized.key_index,
                "HMAC credential accepted"
            );
            request.extensions_mut().insert(authorized);
            Ok(next.run(request).await)
        }
        Err(err) => {
            tracing::warn!(
                path = %request.uri().path(),
                kind = err.kind(),
                timestamp = claimed,
                "Rejected request with invalid HMAC credential"
            );
            Err(ApiError::Unauthorized(err))
        }
    }
}

/// Extract the credential header value.
///
/// Absent is `Ok(None)`. Repeated or non-ASCII values are malformed.
fn credential_header<'a>(
    headers: &'a HeaderMap,
    name: &HeaderName,
) -> Result<Option<&'a str>, AuthError> {
    let mut values = headers.get_all(name).iter();
    let Some(value) = values.next() else {
        return Ok(None);
    };
    if values.next().is_some() {
        return Err(ParseError::MalformedToken.into());
    }
    value
        .to_str()
        .map(Some)
        .map_err(|_| ParseError::MalformedToken.into())
}

/// The Unix timestamp a credential claims, if it decodes at all.
fn claimed_timestamp(raw: &str) -> Option<i64> {
    parse(raw).ok().map(|credential| credential.unix_seconds())
}
