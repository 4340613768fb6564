//! Application state.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use hmac_auth_core::Validator;

use crate::config::ServiceConfig;

/// Source of the current time for credential validation.
pub trait Clock: Send + Sync {
    /// The current instant.
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock stuck at one instant, for tests and replays.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Service configuration.
    pub config: ServiceConfig,

    /// Credential validator built from the configured keys.
    pub validator: Arc<Validator>,

    /// Time source for skew checks.
    pub clock: Arc<dyn Clock>,
}

impl AppState {
    /// Create application state using the system clock.
    #[must_use]
    pub fn new(config: ServiceConfig) -> Self {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    /// Create application state with an explicit clock.
    #[must_use]
    pub fn with_clock(config: ServiceConfig, clock: Arc<dyn Clock>) -> Self {
        let validator = Validator::new(config.hmac_keys.clone())
            .with_skew(config.allowed_skew)
            .with_policy(config.key_policy);

        tracing::info!(
            keys = config.hmac_keys.len(),
            skew_seconds = validator.skew().num_seconds(),
            policy = ?validator.policy(),
            header = %config.header_name,
            "HMAC validator configured"
        );

        Self {
            config,
            validator: Arc::new(validator),
            clock,
        }
    }
}
