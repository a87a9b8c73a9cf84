use crate::{LoginService, RegistrationService};

use ud_auth::{AuthGate, CredentialHasher, TokenCodec};
use ud_db::UserStore;

use std::sync::Arc;

/// Shared application state for the REST handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn UserStore>,
    pub hasher: CredentialHasher,
    pub codec: Arc<TokenCodec>,
    pub gate: AuthGate,
    pub registration: RegistrationService,
    pub login: LoginService,
}

impl AppState {
    pub async fn new(
        store: Arc<dyn UserStore>,
        hasher: CredentialHasher,
        codec: Arc<TokenCodec>,
    ) -> ud_auth::Result<Self> {
        let gate = AuthGate::new(codec.clone());
        let registration = RegistrationService::new(store.clone(), hasher.clone());
        let login = LoginService::new(store.clone(), hasher.clone(), codec.clone()).await?;

        Ok(Self {
            store,
            hasher,
            codec,
            gate,
            registration,
            login,
        })
    }
}
