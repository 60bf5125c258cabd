//! # Compare Endpoint Integration Tests
//!
//! Exercises the full HTTP contract of `POST /compare` against a live
//! server with a stub face-matching collaborator. The broker is unreachable
//! throughout, which doubles as coverage for the publish-skip path: every
//! response here must be identical to the connected-broker case.

mod common;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde_json::json;

use common::{reference_image_fixture, StubFaceMatcher, TestGateway};

fn encoded_source() -> String {
    STANDARD.encode(b"inbound-face-bytes")
}

#[tokio::test]
async fn test_missing_image_is_rejected_with_400() {
    let reference = reference_image_fixture();
    let gateway = TestGateway::start(StubFaceMatcher::matching(99.0), reference.path()).await;

    let response = gateway.post_compare(&json!({})).await;
    assert_eq!(response.status(), 400);

    let body: serde_json::Value = response.json().await.unwrap();
    assert!(body["error"].is_string(), "400 body carries an error string");
}

#[tokio::test]
async fn test_empty_image_is_rejected_with_400() {
    let reference = reference_image_fixture();
    let gateway = TestGateway::start(StubFaceMatcher::matching(99.0), reference.path()).await;

    let response = gateway.post_compare(&json!({ "base64": "" })).await;
    assert_eq!(response.status(), 400);
}

#[tokio::test]
async fn test_undecodable_image_is_rejected_with_400() {
    let reference = reference_image_fixture();
    let gateway = TestGateway::start(StubFaceMatcher::matching(99.0), reference.path()).await;

    let response = gateway
        .post_compare(&json!({ "base64": "not-valid-base64!!!" }))
        .await;
    assert_eq!(response.status(), 400);

    let body: serde_json::Value = response.json().await.unwrap();
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_match_returns_similarity_of_first_candidate() {
    let reference = reference_image_fixture();
    let gateway = TestGateway::start(StubFaceMatcher::matching(97.5), reference.path()).await;

    let response = gateway
        .post_compare(&json!({ "base64": encoded_source(), "requestId": "req-1" }))
        .await;
    assert_eq!(response.status(), 200);

    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["match"], true);
    let similarity = body["similarity"].as_f64().unwrap();
    assert!((similarity - 97.5).abs() < 1e-3);
}

#[tokio::test]
async fn test_no_match_returns_zero_similarity() {
    let reference = reference_image_fixture();
    let gateway = TestGateway::start(StubFaceMatcher::not_matching(), reference.path()).await;

    let response = gateway
        .post_compare(&json!({ "base64": encoded_source() }))
        .await;
    assert_eq!(response.status(), 200);

    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["match"], false);
    assert_eq!(body["similarity"].as_f64().unwrap(), 0.0);
}

#[tokio::test]
async fn test_comparison_failure_returns_500_with_message() {
    let reference = reference_image_fixture();
    let gateway = TestGateway::start(
        StubFaceMatcher::failing(502, "face service exploded"),
        reference.path(),
    )
    .await;

    let response = gateway
        .post_compare(&json!({ "base64": encoded_source() }))
        .await;
    assert_eq!(response.status(), 500);

    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["error"], true);
    assert!(
        body["message"]
            .as_str()
            .unwrap()
            .contains("face service exploded"),
        "failure message passes through to the caller"
    );
}

#[tokio::test]
async fn test_missing_reference_image_is_a_comparison_failure() {
    let gateway = TestGateway::start(
        StubFaceMatcher::matching(99.0),
        std::path::Path::new("/nonexistent/facegate/target.jpg"),
    )
    .await;

    let response = gateway
        .post_compare(&json!({ "base64": encoded_source() }))
        .await;
    assert_eq!(response.status(), 500);

    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["error"], true);
}

#[tokio::test]
async fn test_responses_unaffected_by_missing_broker() {
    let reference = reference_image_fixture();
    let gateway = TestGateway::start(StubFaceMatcher::matching(88.0), reference.path()).await;

    // No broker handle exists; the publish is skipped silently
    assert!(!gateway.broker.is_connected().await);

    let response = gateway
        .post_compare(&json!({ "base64": encoded_source() }))
        .await;
    assert_eq!(response.status(), 200);

    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["match"], true);
}

#[tokio::test]
async fn test_health_reports_broker_snapshot() {
    let reference = reference_image_fixture();
    let gateway = TestGateway::start(StubFaceMatcher::matching(99.0), reference.path()).await;

    let response = gateway.get_health().await;
    assert_eq!(response.status(), 200);

    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["status"], "ok");
    assert_eq!(body["broker_connected"], false);
}

#[tokio::test]
async fn test_shutdown_is_idempotent_while_disconnected() {
    let reference = reference_image_fixture();
    let gateway = TestGateway::start(StubFaceMatcher::matching(99.0), reference.path()).await;

    gateway.broker.shutdown().await;
    gateway.broker.shutdown().await;
    assert!(gateway.broker.current_channel().await.is_none());
}
