use crate::AppState;

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use log::warn;
use serde_json::json;

/// GET /health - status with database reachability
pub async fn health_check(State(state): State<AppState>) -> Response {
    let database_ok = match state.store.ping().await {
        Ok(()) => true,
        Err(e) => {
            warn!("Health check: database unreachable: {}", e);
            false
        }
    };

    let health = json!({
        "status": if database_ok { "healthy" } else { "degraded" },
        "version": env!("CARGO_PKG_VERSION"),
        "components": {
            "database": if database_ok { "operational" } else { "unavailable" },
        },
        "timestamp": chrono::Utc::now().to_rfc3339(),
    });

    let status = if database_ok {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (status, Json(health)).into_response()
}

/// GET /live - is the process alive?
pub async fn liveness_check() -> Response {
    (StatusCode::OK, "OK").into_response()
}

/// GET /ready - ready only while the store answers
pub async fn readiness_check(State(state): State<AppState>) -> Response {
    match state.store.ping().await {
        Ok(()) => (StatusCode::OK, "Ready").into_response(),
        Err(e) => {
            warn!("Readiness check failed: {}", e);
            (StatusCode::SERVICE_UNAVAILABLE, "Not Ready").into_response()
        }
    }
}
