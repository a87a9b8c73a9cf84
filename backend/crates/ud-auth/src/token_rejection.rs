use thiserror::Error;

/// Why a presented token was not accepted.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenRejection {
    /// Not a JWT, not HS256, or the payload does not decode into [`crate::Claims`]
    #[error("token is malformed")]
    Malformed,

    #[error("token signature is invalid")]
    SignatureInvalid,

    #[error("token has expired")]
    Expired,
}
