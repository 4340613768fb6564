//! Health endpoint integration tests.

mod common;

use axum::http::StatusCode;
use common::TestHarness;
use hmac_auth_core::KeyPolicy;

#[tokio::test]
async fn health_check_returns_ok() {
    let harness = TestHarness::new();

    let response = harness.server.get("/health").await;

    response.assert_status_ok();
}

#[tokio::test]
async fn health_check_returns_json() {
    let harness = TestHarness::new();

    let response = harness.server.get("/health").await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["status"], "ok");
    assert_eq!(body["service"], "hmac-auth");
}

#[tokio::test]
async fn health_reports_credential_window() {
    let harness = TestHarness::new();

    let body: serde_json::Value = harness.server.get("/health").await.json();

    assert_eq!(body["allowed_skew_seconds"], 600);
    assert_eq!(body["key_policy"], "any");
}

#[tokio::test]
async fn health_reports_primary_only_policy() {
    let harness = TestHarness::with_policy(KeyPolicy::PrimaryOnly);

    let body: serde_json::Value = harness.server.get("/health").await.json();

    assert_eq!(body["key_policy"], "first");
}

#[tokio::test]
async fn health_check_needs_no_credential() {
    let harness = TestHarness::new();

    let response = harness
        .server
        .get("/health")
        .add_header(common::hmac_header(), common::raw("garbage"))
        .await;

    response.assert_status_ok();
}

#[tokio::test]
async fn unknown_route_is_404_json() {
    let harness = TestHarness::new();

    let response = harness.server.get("/nope").await;

    response.assert_status(StatusCode::NOT_FOUND);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "no route for /nope");
}
