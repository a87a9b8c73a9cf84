#![allow(dead_code)]

//! Test infrastructure for ud-server API tests

use ud_auth::{CredentialHasher, IdentityClaims, TokenCodec};
use ud_db::{MIGRATOR, UserRepository, UserStore};
use ud_server::{AppState, build_router};

use std::sync::Arc;
use std::time::Duration;

use axum_test::TestServer;
use serde_json::json;
use sqlx::sqlite::SqlitePoolOptions;

/// HS256 requires at least 32 bytes
pub const TEST_JWT_SECRET: &[u8] = b"test-secret-key-for-integration-tests-min-32-bytes-long";

pub async fn create_test_store() -> Arc<dyn UserStore> {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("Failed to create test database");

    MIGRATOR
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    Arc::new(UserRepository::new(pool))
}

pub async fn create_test_app_state() -> AppState {
    let store = create_test_store().await;
    let hasher = CredentialHasher::new(1024, 1, 1).expect("Failed to build hasher");
    let codec = Arc::new(TokenCodec::with_hs256(
        TEST_JWT_SECRET,
        Duration::from_secs(3600),
    ));

    AppState::new(store, hasher, codec)
        .await
        .expect("Failed to build app state")
}

pub async fn create_test_server() -> (TestServer, AppState) {
    let state = create_test_app_state().await;
    let server = TestServer::builder()
        .build(build_router(state.clone()))
        .expect("Failed to create test server");
    (server, state)
}

pub async fn register(server: &TestServer, username: &str, password: &str) {
    server
        .post("/users")
        .json(&json!({ "username": username, "password": password }))
        .await
        .assert_status(http::StatusCode::CREATED);
}

pub async fn login(server: &TestServer, username: &str, password: &str) -> String {
    let response = server
        .post("/users/login")
        .json(&json!({ "username": username, "password": password }))
        .await;
    response.assert_status_ok();

    let body: serde_json::Value = response.json();
    body["token"]
        .as_str()
        .expect("login response carries a token")
        .to_string()
}

/// Register + login, returning a bearer token
pub async fn register_and_login(server: &TestServer, username: &str, password: &str) -> String {
    register(server, username, password).await;
    login(server, username, password).await
}

/// Token signed with the test secret that has already expired
pub fn create_expired_token(id: i64, username: &str) -> String {
    let codec = TokenCodec::with_hs256(TEST_JWT_SECRET, Duration::from_secs(60));
    let identity = IdentityClaims {
        id,
        username: username.to_string(),
        email: None,
    };
    codec
        .issue_at(&identity, chrono::Utc::now().timestamp() - 3600)
        .expect("Failed to issue token")
}

/// Well-formed token signed with a different secret
pub fn create_token_wrong_secret(id: i64, username: &str) -> String {
    let codec = TokenCodec::with_hs256(
        b"some-other-secret-that-is-also-32-bytes-long",
        Duration::from_secs(3600),
    );
    let identity = IdentityClaims {
        id,
        username: username.to_string(),
        email: None,
    };
    codec.issue(&identity).expect("Failed to issue token")
}

pub fn bearer(token: &str) -> String {
    format!("Bearer {}", token)
}
