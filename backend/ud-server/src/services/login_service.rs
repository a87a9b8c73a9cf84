//! Credential check and token issuance.
//!
//! Unknown users and wrong passwords produce the same `InvalidCredentials`
//! outcome. For an unknown user the password is still verified against a
//! placeholder digest so both paths cost one Argon2 verification.

use crate::{ApiError, ApiResult, LoginRequest};

use ud_auth::{CredentialHasher, IdentityClaims, TokenCodec};
use ud_core::require_field;
use ud_db::UserStore;

use std::sync::Arc;

use log::{info, warn};

const PLACEHOLDER_SECRET: &str = "placeholder-credential-for-unknown-users";

#[derive(Clone)]
pub struct LoginService {
    store: Arc<dyn UserStore>,
    hasher: CredentialHasher,
    codec: Arc<TokenCodec>,
    placeholder_digest: Arc<str>,
}

impl LoginService {
    /// Hashes the placeholder digest once, with the same work factor as real digests.
    pub async fn new(
        store: Arc<dyn UserStore>,
        hasher: CredentialHasher,
        codec: Arc<TokenCodec>,
    ) -> ud_auth::Result<Self> {
        let placeholder_digest = hasher
            .hash_blocking(PLACEHOLDER_SECRET.to_string())
            .await?
            .into();

        Ok(Self {
            store,
            hasher,
            codec,
            placeholder_digest,
        })
    }

    /// Returns a signed token for valid credentials.
    pub async fn login(&self, request: LoginRequest) -> ApiResult<String> {
        let username = require_field("username", request.username.as_deref())?;
        let password = require_field("password", request.password.as_deref())?;

        let Some(user) = self.store.find_by_username(username).await? else {
            // Result ignored: only the time spent matters here
            let _ = self
                .hasher
                .verify_blocking(password.to_string(), self.placeholder_digest.to_string())
                .await;
            warn!("Login failed: unknown username");
            return Err(ApiError::invalid_credentials());
        };

        let verified = self
            .hasher
            .verify_blocking(password.to_string(), user.credential_digest.clone())
            .await?;

        if !verified {
            warn!("Login failed for user id {}", user.id);
            return Err(ApiError::invalid_credentials());
        }

        let token = self.codec.issue(&IdentityClaims::from(&user))?;

        info!("User {} logged in", user.id);
        Ok(token)
    }
}
