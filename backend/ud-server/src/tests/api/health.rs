use crate::tests::{FailingStore, fast_hasher, test_codec};
use crate::{AppState, build_router};

use std::sync::Arc;

use axum::body::Body;
use http::{Request, StatusCode};
use http_body_util::BodyExt;
use tower::ServiceExt;

async fn failing_state() -> AppState {
    AppState::new(Arc::new(FailingStore), fast_hasher(), test_codec())
        .await
        .unwrap()
}

async fn get(state: AppState, uri: &str) -> (StatusCode, Vec<u8>) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    let response = build_router(state).oneshot(request).await.unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, body.to_vec())
}

#[tokio::test]
async fn test_health_reports_degraded_when_store_unreachable() {
    let (status, body) = get(failing_state().await, "/health").await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["status"], "degraded");
    assert_eq!(json["components"]["database"], "unavailable");
}

#[tokio::test]
async fn test_ready_fails_when_store_unreachable() {
    let (status, body) = get(failing_state().await, "/ready").await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body, b"Not Ready");
}

#[tokio::test]
async fn test_live_succeeds_even_when_store_unreachable() {
    let (status, _) = get(failing_state().await, "/live").await;

    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_storage_failure_on_protected_route_is_sanitized_500() {
    let state = failing_state().await;
    let token = state
        .codec
        .issue(&ud_auth::IdentityClaims {
            id: 1,
            username: "ops".into(),
            email: None,
        })
        .unwrap();

    let request = Request::builder()
        .uri("/users")
        .header("Authorization", format!("Bearer {}", token))
        .body(Body::empty())
        .unwrap();
    let response = build_router(state).oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["error"]["code"], "STORAGE_ERROR");
    assert_eq!(json["error"]["message"], "Database operation failed");
}
