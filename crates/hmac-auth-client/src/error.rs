//! Client error types.

/// Errors that can occur when calling an HMAC-protected service.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server rejected the credential.
    #[error("unauthorized: {reason}")]
    Unauthorized {
        /// The server's rejection reason.
        reason: String,
    },

    /// Server returned another error response.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Error message from the body, or the status text.
        message: String,
    },

    /// Invalid configuration.
    #[error("configuration error: {0}")]
    Configuration(String),
}
