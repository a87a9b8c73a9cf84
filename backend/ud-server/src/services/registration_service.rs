//! Account creation.
//!
//! Input is validated before any hashing or storage work. A duplicate
//! username comes back from the store as `DbError::UniqueViolation` and
//! leaves as `ApiError::DuplicateUsername`.

use crate::{ApiResult, RegisterRequest};

use ud_auth::CredentialHasher;
use ud_core::{NewUser, User, require_field};
use ud_db::UserStore;

use std::sync::Arc;

use log::info;

#[derive(Clone)]
pub struct RegistrationService {
    store: Arc<dyn UserStore>,
    hasher: CredentialHasher,
}

impl RegistrationService {
    pub fn new(store: Arc<dyn UserStore>, hasher: CredentialHasher) -> Self {
        Self { store, hasher }
    }

    pub async fn register(&self, request: RegisterRequest) -> ApiResult<User> {
        let username = require_field("username", request.username.as_deref())?;
        let password = require_field("password", request.password.as_deref())?;
        let email = request.email.filter(|e| !e.trim().is_empty());

        let digest = self.hasher.hash_blocking(password.to_string()).await?;

        let user = self
            .store
            .insert(&NewUser::new(username.to_string(), digest, email))
            .await?;

        info!("Registered user {} (id {})", user.username, user.id);
        Ok(user)
    }
}
