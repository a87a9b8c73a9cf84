use crate::{AuthenticatedIdentity, TokenRejection};

/// Outcome of gating one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthDecision {
    Allow(AuthenticatedIdentity),
    Reject(AuthRejection),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthRejection {
    /// No `Authorization: Bearer <token>` header (HTTP 401)
    MissingToken,
    /// A bearer token was present but did not verify (HTTP 403)
    InvalidToken(TokenRejection),
}
