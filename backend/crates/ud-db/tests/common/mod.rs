#![allow(dead_code)]

use ud_core::NewUser;
use ud_db::MIGRATOR;

use sqlx::SqlitePool;
use sqlx::sqlite::SqlitePoolOptions;

/// In-memory pool with the schema applied.
///
/// A single connection keeps every query on the same in-memory database.
pub async fn create_test_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("Failed to create test database");

    MIGRATOR.run(&pool).await.expect("Failed to run migrations");

    pool
}

/// Creates a NewUser with a placeholder digest
pub fn create_test_new_user(username: &str) -> NewUser {
    NewUser::new(
        username.to_string(),
        format!("digest-for-{}", username),
        Some(format!("{}@example.com", username)),
    )
}
