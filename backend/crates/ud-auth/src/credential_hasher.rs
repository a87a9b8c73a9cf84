//! One-way credential storage with Argon2id.
//!
//! Digests are PHC strings (`$argon2id$v=19$m=..,t=..,p=..$salt$hash`), so
//! each digest carries its own salt and work factor. Verification reads
//! both from the digest, which keeps old digests valid after the
//! configured work factor changes.

use crate::{AuthError, Result as AuthErrorResult};

use std::panic::Location;

use argon2::password_hash::{
    Error as PasswordHashError, PasswordHash, PasswordHasher, PasswordVerifier, SaltString,
    rand_core::OsRng,
};
use argon2::{Algorithm, Argon2, Params, Version};
use error_location::ErrorLocation;

#[derive(Debug, Clone)]
pub struct CredentialHasher {
    params: Params,
}

impl CredentialHasher {
    /// Build a hasher with an explicit work factor.
    ///
    /// * `memory_kib` - memory cost in KiB
    /// * `iterations` - number of passes
    /// * `parallelism` - degree of parallelism (lanes)
    #[track_caller]
    pub fn new(memory_kib: u32, iterations: u32, parallelism: u32) -> AuthErrorResult<Self> {
        let params = Params::new(memory_kib, iterations, parallelism, None).map_err(|e| {
            AuthError::InvalidHashingParams {
                message: e.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }
        })?;

        Ok(Self { params })
    }

    fn argon2(&self) -> Argon2<'static> {
        Argon2::new(Algorithm::Argon2id, Version::V0x13, self.params.clone())
    }

    /// Hash a plaintext secret with a fresh random salt.
    ///
    /// CPU bound; async callers should use [`Self::hash_blocking`].
    #[track_caller]
    pub fn hash(&self, plaintext: &str) -> AuthErrorResult<String> {
        let salt = SaltString::generate(&mut OsRng);

        self.argon2()
            .hash_password(plaintext.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| AuthError::Hashing {
                message: e.to_string(),
                location: ErrorLocation::from(Location::caller()),
            })
    }

    /// Check a plaintext secret against a stored digest.
    ///
    /// A mismatch is `Ok(false)`. Only a structurally malformed digest or a
    /// primitive failure is an error.
    #[track_caller]
    pub fn verify(&self, plaintext: &str, digest: &str) -> AuthErrorResult<bool> {
        let parsed = PasswordHash::new(digest).map_err(|e| AuthError::Hashing {
            message: format!("Malformed credential digest: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        match self.argon2().verify_password(plaintext.as_bytes(), &parsed) {
            Ok(()) => Ok(true),
            Err(PasswordHashError::Password) => Ok(false),
            Err(e) => Err(AuthError::Hashing {
                message: e.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }

    /// [`Self::hash`] on the blocking thread pool.
    pub async fn hash_blocking(&self, plaintext: String) -> AuthErrorResult<String> {
        let hasher = self.clone();
        tokio::task::spawn_blocking(move || hasher.hash(&plaintext))
            .await
            .map_err(|e| AuthError::Hashing {
                message: format!("Hashing task failed: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?
    }

    /// [`Self::verify`] on the blocking thread pool.
    pub async fn verify_blocking(
        &self,
        plaintext: String,
        digest: String,
    ) -> AuthErrorResult<bool> {
        let hasher = self.clone();
        tokio::task::spawn_blocking(move || hasher.verify(&plaintext, &digest))
            .await
            .map_err(|e| AuthError::Hashing {
                message: format!("Verification task failed: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?
    }
}

impl Default for CredentialHasher {
    fn default() -> Self {
        Self {
            params: Params::default(),
        }
    }
}
