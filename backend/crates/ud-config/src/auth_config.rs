use crate::{ConfigError, ConfigErrorResult, DEFAULT_TOKEN_TTL, MIN_JWT_SECRET_LENGTH};

use std::fmt;
use std::time::Duration;

use serde::Deserialize;

#[derive(Clone, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// HS256 signing secret
    pub jwt_secret: Option<String>,
    /// Token lifetime as a humantime string ("1h", "30m", "2h 30m")
    pub token_ttl: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: None,
            token_ttl: String::from(DEFAULT_TOKEN_TTL),
        }
    }
}

impl AuthConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        match &self.jwt_secret {
            None => {
                return Err(ConfigError::auth(
                    "auth.jwt_secret is required (set UD_AUTH_JWT_SECRET)",
                ));
            }
            Some(secret) if secret.len() < MIN_JWT_SECRET_LENGTH => {
                return Err(ConfigError::auth(format!(
                    "auth.jwt_secret must be at least {} characters",
                    MIN_JWT_SECRET_LENGTH
                )));
            }
            Some(_) => {}
        }

        self.token_ttl_duration()?;

        Ok(())
    }

    /// Parsed token lifetime; zero is rejected.
    pub fn token_ttl_duration(&self) -> ConfigErrorResult<Duration> {
        let ttl = humantime::parse_duration(self.token_ttl.trim()).map_err(|e| {
            ConfigError::auth(format!(
                "auth.token_ttl '{}' is not a valid duration: {}",
                self.token_ttl, e
            ))
        })?;

        if ttl.is_zero() {
            return Err(ConfigError::auth("auth.token_ttl must be greater than zero"));
        }

        Ok(ttl)
    }

    /// Secret bytes; empty when unset (validate() rejects that case).
    pub fn jwt_secret_bytes(&self) -> &[u8] {
        self.jwt_secret.as_deref().unwrap_or_default().as_bytes()
    }
}

impl fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthConfig")
            .field("jwt_secret", &self.jwt_secret.as_ref().map(|_| "<redacted>"))
            .field("token_ttl", &self.token_ttl)
            .finish()
    }
}
