//! Common test utilities for hmac-auth-service integration tests.

#![allow(dead_code)] // Some utilities are used by different test files

use std::sync::Arc;

use axum::http::{HeaderName, HeaderValue};
use axum::Router;
use axum_test::TestServer;
use chrono::{DateTime, Utc};

use hmac_auth_core::{sign, KeyPolicy, KeySet};
use hmac_auth_service::{create_router, AppState, FixedClock, ServiceConfig};

/// Instant the harness clock is frozen at.
pub const NOW: i64 = 1_700_000_000;

/// Primary key configured in the harness.
pub const PRIMARY_KEY: &str = "deadbeef";

/// Secondary key configured in the harness.
pub const ROTATED_KEY: &str = "rotated";

/// Test harness containing everything needed for integration tests.
pub struct TestHarness {
    /// The test server for making HTTP requests.
    pub server: TestServer,
}

impl TestHarness {
    /// Harness with both keys and the default (any key) policy.
    pub fn new() -> Self {
        Self::with_policy(KeyPolicy::AnyKey)
    }

    /// Harness with both keys and the given policy.
    pub fn with_policy(policy: KeyPolicy) -> Self {
        let keys = format!("{PRIMARY_KEY},{ROTATED_KEY}");
        let keys = KeySet::parse(&keys).expect("Failed to parse keys");
        let mut config = ServiceConfig::new(keys);
        config.listen_addr = "127.0.0.1:0".into();
        config.key_policy = policy;

        let clock = Arc::new(FixedClock(at(NOW)));
        let state = AppState::with_clock(config, clock);
        let router: Router = create_router(state);

        let server = TestServer::new(router).expect("Failed to create test server");

        Self { server }
    }
}

impl Default for TestHarness {
    fn default() -> Self {
        Self::new()
    }
}

/// The credential header name.
pub fn hmac_header() -> HeaderName {
    HeaderName::from_static("request-hmac")
}

/// A header value signed with `key` at `timestamp`.
pub fn signed(key: &str, timestamp: i64) -> HeaderValue {
    let token = sign(key.as_bytes(), timestamp);
    HeaderValue::from_str(&token).expect("Token is a valid header")
}

/// A raw header value.
pub fn raw(value: &'static str) -> HeaderValue {
    HeaderValue::from_static(value)
}

/// Convert Unix seconds to a `DateTime`.
pub fn at(seconds: i64) -> DateTime<Utc> {
    DateTime::from_timestamp(seconds, 0).expect("Timestamp in range")
}
