use crate::Claims;

/// Identity attached to a request after its token verified.
///
/// A snapshot of the claims taken at login; it is not re-read from the
/// store and lives only as long as the request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedIdentity {
    pub id: i64,
    pub username: String,
    pub email: Option<String>,
    pub issued_at: i64,
    pub expires_at: i64,
}

impl AuthenticatedIdentity {
    pub fn from_claims(claims: Claims) -> Self {
        Self {
            id: claims.id,
            username: claims.username,
            email: claims.email,
            issued_at: claims.iat,
            expires_at: claims.exp,
        }
    }
}
