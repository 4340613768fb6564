//! HMAC-authenticated HTTP service.
//!
//! Routes under `/admin` require a `<timestamp>.<hex-mac>` credential in the
//! `Request-Hmac` header (configurable), validated by
//! [`hmac_auth_core::Validator`]. Rejections are `401` with
//! `{"error": "<reason>"}`.
//!
//! # Configuration
//!
//! See [`ServiceConfig::from_env`]. `HMAC_KEYS` is mandatory; the service
//! refuses to start without it.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)] // Axum handlers all return Result
#![allow(clippy::unused_async)] // Handlers are async for axum

pub mod auth;
pub mod config;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

pub use config::ServiceConfig;
pub use error::{ApiError, ConfigError};
pub use routes::create_router;
pub use state::{AppState, Clock, FixedClock, SystemClock};
