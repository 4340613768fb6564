//! Timestamped HMAC-SHA256 request credentials.
//!
//! A client proves knowledge of a shared secret by sending
//! `<unix-seconds>.<hex HMAC-SHA256(secret, unix-seconds)>`, usually in the
//! `Request-Hmac` header. The server parses the value, recomputes the MAC
//! with its configured keys and checks the timestamp is within an allowed
//! clock skew of its own time.
//!
//! - **Parsing**: [`parse`], [`Credential`]
//! - **Signing**: [`sign`], [`Credential::sign`]
//! - **Validation**: [`validate`], [`Validator`], [`KeyPolicy`]
//! - **Keys**: [`KeySet`], [`SecretKey`]
//!
//! # Example
//!
//! ```
//! use chrono::{DateTime, Utc};
//! use hmac_auth_core::{sign, KeySet, Validator};
//!
//! let validator = Validator::new(KeySet::parse("deadbeef").unwrap());
//! let now: DateTime<Utc> = DateTime::from_timestamp(1_700_000_000, 0).unwrap();
//! let token = sign(b"deadbeef", now.timestamp());
//!
//! assert!(validator.authenticate(Some(token.as_str()), now).is_ok());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod crypto;
pub mod error;
pub mod keys;
pub mod token;
pub mod validator;

pub use crypto::{compute_mac, compute_mac_hex, constant_time_eq, MAC_LEN};
pub use error::{AuthError, KeySetError, ParseError, ValidationError};
pub use keys::{KeySet, SecretKey};
pub use token::{parse, sign, Credential};
pub use validator::{validate, Authorized, KeyPolicy, Validator, DEFAULT_SKEW};

/// Default request header carrying the credential.
pub const HEADER_NAME: &str = "Request-Hmac";
