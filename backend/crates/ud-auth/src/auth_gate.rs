use crate::{AuthDecision, AuthRejection, AuthenticatedIdentity, TokenCodec};

use std::sync::Arc;

use log::warn;

const BEARER_SCHEME: &str = "Bearer";

/// Request guard for protected endpoints.
///
/// Runs per request, touches no shared mutable state and never consults
/// the user store: the token signature and its claims are trusted as-is.
#[derive(Clone)]
pub struct AuthGate {
    codec: Arc<TokenCodec>,
}

impl AuthGate {
    pub fn new(codec: Arc<TokenCodec>) -> Self {
        Self { codec }
    }

    /// Decide on a request from its raw `Authorization` header value.
    pub fn inspect(&self, authorization: Option<&str>) -> AuthDecision {
        let Some(token) = authorization.and_then(extract_bearer) else {
            warn!("Missing or malformed bearer authorization header");
            return AuthDecision::Reject(AuthRejection::MissingToken);
        };

        match self.codec.verify(token) {
            Ok(claims) => AuthDecision::Allow(AuthenticatedIdentity::from_claims(claims)),
            Err(reason) => {
                warn!("Bearer token rejected: {}", reason);
                AuthDecision::Reject(AuthRejection::InvalidToken(reason))
            }
        }
    }
}

/// Pull the token out of `Bearer <token>`; `None` for any other shape.
/// The scheme name is matched case-insensitively.
pub fn extract_bearer(header: &str) -> Option<&str> {
    let (scheme, token) = header.split_once(' ')?;
    if !scheme.eq_ignore_ascii_case(BEARER_SCHEME) {
        return None;
    }

    Some(token.trim()).filter(|token| !token.is_empty())
}
