use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuthError {
    /// The hashing primitive failed (entropy, resources, or a malformed digest)
    #[error("Hashing failed: {message} {location}")]
    Hashing {
        message: String,
        location: ErrorLocation,
    },

    #[error("Invalid hashing parameters: {message} {location}")]
    InvalidHashingParams {
        message: String,
        location: ErrorLocation,
    },

    #[error("JWT encode failed: {source} {location}")]
    JwtEncode {
        #[source]
        source: jsonwebtoken::errors::Error,
        location: ErrorLocation,
    },

    #[error("Invalid claim '{claim}': {message} {location}")]
    InvalidClaim {
        claim: String,
        message: String,
        location: ErrorLocation,
    },
}

pub type Result<T> = std::result::Result<T, AuthError>;
