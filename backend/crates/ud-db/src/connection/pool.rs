use crate::{DbError, Result};

use ud_core::ErrorLocation;

use std::panic::Location;
use std::path::Path;
use std::time::Duration;

use log::info;
use sqlx::migrate::Migrator;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};
use sqlx::SqlitePool;

/// Embedded schema migrations for the user directory
pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Open the SQLite pool and bring the schema up to date.
///
/// The parent directory is created when missing. The pool is the only
/// handle to the store; callers own it and close it at shutdown.
pub async fn open_pool(path: &Path, max_connections: u32) -> Result<SqlitePool> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(|e| DbError::Initialization {
                message: format!("Failed to create database directory: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;
    }

    let options = SqliteConnectOptions::new()
        .filename(path)
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .synchronous(SqliteSynchronous::Normal)
        .busy_timeout(Duration::from_secs(5));

    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await?;

    info!("Running database migrations...");
    MIGRATOR.run(&pool).await?;
    info!("Migrations complete");

    Ok(pool)
}
