use ud_auth::{CredentialHasher, TokenCodec};
use ud_config::Config;
use ud_db::{UserRepository, UserStore, open_pool};
use ud_server::error::Result as ServerErrorResult;
use ud_server::{AppState, build_router, logger};

use std::path::PathBuf;
use std::sync::Arc;

use log::{error, info};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> ServerErrorResult<()> {
    // A missing .env is fine
    dotenvy::dotenv().ok();

    let config = Config::load()?;
    config.validate()?;

    let log_file_path: Option<PathBuf> = match config.logging.file {
        Some(ref filename) => {
            let log_dir = config.log_dir()?;
            std::fs::create_dir_all(&log_dir)?;
            Some(log_dir.join(filename))
        }
        None => None,
    };

    // Initialize logger (before any other logging)
    logger::initialize(config.logging.level, log_file_path, config.logging.colored)?;

    info!("Starting ud-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    let database_path = config.database_path()?;
    info!("Opening database: {}", database_path.display());
    let pool = open_pool(&database_path, config.database.max_connections).await?;

    let store: Arc<dyn UserStore> = Arc::new(UserRepository::new(pool.clone()));
    let hasher = CredentialHasher::new(
        config.hashing.memory_kib,
        config.hashing.iterations,
        config.hashing.parallelism,
    )?;
    let codec = Arc::new(TokenCodec::with_hs256(
        config.auth.jwt_secret_bytes(),
        config.auth.token_ttl_duration()?,
    ));

    let app_state = AppState::new(store, hasher, codec).await?;
    let app = build_router(app_state);

    let listener = TcpListener::bind(config.bind_addr()).await?;
    // Actual address matters when port is 0 (auto-assigned)
    let actual_addr = listener.local_addr()?;
    info!("Server listening on {}", actual_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    pool.close().await;
    info!("Graceful shutdown complete");

    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Received SIGINT (Ctrl+C), initiating graceful shutdown"),
        Err(e) => {
            error!("Failed to listen for SIGINT: {}", e);
            // Without a signal handler, run until killed
            std::future::pending::<()>().await;
        }
    }
}
