//! HMAC Auth Client SDK.
//!
//! Signs every request with a `<timestamp>.<hex-mac>` credential computed
//! from the current time and a shared secret.
//!
//! # Example
//!
//! ```no_run
//! use hmac_auth_client::HmacAuthClient;
//!
//! # async fn example() -> Result<(), hmac_auth_client::ClientError> {
//! let client = HmacAuthClient::new("http://localhost:5000", "deadbeef")?;
//!
//! let hello: serde_json::Value = client.get_json("/admin/hello").await?;
//! println!("{hello}");
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod client;
mod error;

pub use client::{ClientOptions, HmacAuthClient};
pub use error::ClientError;
