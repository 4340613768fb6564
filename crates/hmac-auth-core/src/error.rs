//! Error types for HMAC request authentication.

/// Errors produced while decoding a wire-format credential.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// The value is not `<timestamp>.<mac>`.
    #[error("credential is not in `<timestamp>.<mac>` format")]
    MalformedToken,

    /// The timestamp field is not a base-10 signed 64-bit integer.
    #[error("invalid credential timestamp {0:?}")]
    InvalidTimestamp(String),

    /// The MAC field is empty.
    #[error("credential MAC is empty")]
    EmptyMac,

    /// The MAC field is not valid hexadecimal.
    #[error("credential MAC could not be decoded as hex")]
    InvalidHexEncoding,
}

/// Errors produced while checking a parsed credential.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// The timestamp lies outside the allowed clock-skew window.
    #[error("HMAC timestamp {timestamp} is outside the allowed range")]
    TimestampOutOfRange {
        /// The credential's Unix timestamp in seconds.
        timestamp: i64,
    },

    /// No configured key produces the supplied MAC.
    #[error("invalid HMAC")]
    MacMismatch,
}

/// Any reason a request fails authentication.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    /// No credential was presented.
    #[error("missing request HMAC")]
    MissingCredential,

    /// The credential could not be parsed.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// The credential was parsed but is not valid.
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl AuthError {
    /// The rejection reason shown to clients.
    ///
    /// Parse failures collapse into one message so that probing the format
    /// reveals nothing beyond "not accepted".
    #[must_use]
    pub fn reason(&self) -> String {
        match self {
            Self::MissingCredential => self.to_string(),
            Self::Parse(_) => "invalid request HMAC".to_string(),
            Self::Validation(err) => err.to_string(),
        }
    }

    /// A short, stable identifier for logs.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::MissingCredential => "missing_credential",
            Self::Parse(ParseError::MalformedToken) => "malformed_token",
            Self::Parse(ParseError::InvalidTimestamp(_)) => "invalid_timestamp",
            Self::Parse(ParseError::EmptyMac) => "empty_mac",
            Self::Parse(ParseError::InvalidHexEncoding) => "invalid_hex_encoding",
            Self::Validation(ValidationError::TimestampOutOfRange { .. }) => {
                "timestamp_out_of_range"
            }
            Self::Validation(ValidationError::MacMismatch) => "mac_mismatch",
        }
    }
}

/// Errors loading the shared-secret key set.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum KeySetError {
    /// The key source was absent or contained no usable key.
    #[error("no HMAC keys configured")]
    MissingKeys,
}
