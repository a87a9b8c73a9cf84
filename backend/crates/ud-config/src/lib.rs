mod auth_config;
mod config;
mod database_config;
mod error;
mod hashing_config;
mod log_level;
mod logging_config;
mod server_config;

pub use auth_config::AuthConfig;
pub use config::Config;
pub use database_config::DatabaseConfig;
pub use error::{ConfigError, ConfigErrorResult};
pub use hashing_config::HashingConfig;
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use server_config::ServerConfig;

#[cfg(test)]
mod tests;

const CONFIG_DIR_ENV: &str = "UD_CONFIG_DIR";
const DEFAULT_CONFIG_DIR: &str = ".ud";
const CONFIG_FILENAME: &str = "config.toml";

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 3001;
const MIN_PORT: u16 = 1024;

const DEFAULT_DATABASE_FILENAME: &str = "users.db";
const DEFAULT_DATABASE_MAX_CONNECTIONS: u32 = 10;
const MIN_DATABASE_MAX_CONNECTIONS: u32 = 1;
const MAX_DATABASE_MAX_CONNECTIONS: u32 = 100;

const DEFAULT_TOKEN_TTL: &str = "1h";
const MIN_JWT_SECRET_LENGTH: usize = 32;

// Argon2id recommended parameters (RFC 9106 / OWASP)
const DEFAULT_HASHING_MEMORY_KIB: u32 = 19 * 1024;
const DEFAULT_HASHING_ITERATIONS: u32 = 2;
const DEFAULT_HASHING_PARALLELISM: u32 = 1;
const MAX_HASHING_PARALLELISM: u32 = 64;
const MAX_HASHING_MEMORY_KIB: u32 = 4 * 1024 * 1024;

const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
