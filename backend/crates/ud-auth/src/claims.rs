use crate::{AuthError, Result as AuthErrorResult};

use ud_core::User;

use std::panic::Location;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Identity fields embedded in an issued token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentityClaims {
    pub id: i64,
    pub username: String,
    pub email: Option<String>,
}

impl From<&User> for IdentityClaims {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            username: user.username.clone(),
            email: user.email.clone(),
        }
    }
}

/// JWT Claims structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user id rendered as a string)
    pub sub: String,
    pub id: i64,
    pub username: String,
    #[serde(default)]
    pub email: Option<String>,
    /// Issued at timestamp (Unix)
    pub iat: i64,
    /// Expiration timestamp (Unix)
    pub exp: i64,
}

impl Claims {
    pub fn new(identity: &IdentityClaims, issued_at: i64, expires_at: i64) -> Self {
        Self {
            sub: identity.id.to_string(),
            id: identity.id,
            username: identity.username.clone(),
            email: identity.email.clone(),
            iat: issued_at,
            exp: expires_at,
        }
    }

    /// Validate claims after JWT signature verification
    #[track_caller]
    pub fn validate(&self) -> AuthErrorResult<()> {
        if self.sub != self.id.to_string() {
            return Err(AuthError::InvalidClaim {
                claim: "sub".to_string(),
                message: "sub does not match id".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        if self.username.is_empty() {
            return Err(AuthError::InvalidClaim {
                claim: "username".to_string(),
                message: "username cannot be empty".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        if self.exp < self.iat {
            return Err(AuthError::InvalidClaim {
                claim: "exp".to_string(),
                message: "exp precedes iat".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(())
    }
}
