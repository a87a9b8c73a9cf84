//! Bearer-token guard for protected routes.
//!
//! Wraps [`AuthGate::inspect`](ud_auth::AuthGate::inspect): an `Allow`
//! decision stores the [`AuthenticatedIdentity`] in the request extensions
//! and runs the handler; a `Reject` answers 401 or 403 and the handler never
//! runs.

use crate::{ApiError, AppState};

use ud_auth::{AuthDecision, AuthenticatedIdentity};

use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};
use log::debug;

pub async fn require_identity(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok());

    match state.gate.inspect(header) {
        AuthDecision::Allow(identity) => {
            debug!(
                "{} {} authorized for user {}",
                request.method(),
                request.uri().path(),
                identity.id
            );
            request.extensions_mut().insert::<AuthenticatedIdentity>(identity);
            Ok(next.run(request).await)
        }
        AuthDecision::Reject(rejection) => Err(ApiError::from(rejection)),
    }
}
