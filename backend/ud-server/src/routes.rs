use crate::middleware::{auth::require_identity, request_logging::log_requests};
use crate::{
    AppState, delete_user, get_user, health, list_users, login, register, update_user,
};

use axum::{
    Router, middleware,
    routing::{get, post},
};
use tower_http::cors::{Any, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    // Every route here runs require_identity first
    let protected = Router::new()
        .route("/users", get(list_users))
        .route(
            "/users/{id}",
            get(get_user).put(update_user).delete(delete_user),
        )
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            require_identity,
        ));

    Router::new()
        .route("/users", post(register))
        .route("/users/login", post(login))
        // Health check endpoints
        .route("/health", get(health::health_check))
        .route("/live", get(health::liveness_check))
        .route("/ready", get(health::readiness_check))
        .merge(protected)
        .with_state(state)
        .layer(middleware::from_fn(log_requests))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
