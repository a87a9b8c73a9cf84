use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Config error: {0}")]
    Config(#[from] ud_config::ConfigError),

    #[error("Database error: {0}")]
    Database(#[from] ud_db::DbError),

    #[error("Auth setup error: {0}")]
    Auth(#[from] ud_auth::AuthError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Logger error: {message}")]
    Logger { message: String },
}

pub type Result<T> = std::result::Result<T, ServerError>;
