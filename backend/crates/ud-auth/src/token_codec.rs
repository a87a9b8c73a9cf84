use crate::{AuthError, Claims, IdentityClaims, Result as AuthErrorResult, TokenRejection};

use std::panic::Location;
use std::time::Duration;

use error_location::ErrorLocation;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use log::debug;

/// Issues and verifies HS256 identity tokens.
///
/// Tokens are self-contained: nothing is stored server side, so a token
/// stays valid until `exp` even if the user record changes.
pub struct TokenCodec {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    ttl: Duration,
}

impl TokenCodec {
    /// Create codec with HS256 (symmetric secret)
    pub fn with_hs256(secret: &[u8], ttl: Duration) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        // Expiry is checked in `verify` with no leeway
        validation.validate_exp = false;
        validation.validate_nbf = false;
        validation.leeway = 0;

        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            validation,
            ttl,
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Issue a token for `identity` valid from now for the configured ttl
    #[track_caller]
    pub fn issue(&self, identity: &IdentityClaims) -> AuthErrorResult<String> {
        self.issue_at(identity, chrono::Utc::now().timestamp())
    }

    /// Issue a token with an explicit issue time (Unix seconds)
    #[track_caller]
    pub fn issue_at(&self, identity: &IdentityClaims, issued_at: i64) -> AuthErrorResult<String> {
        let ttl_secs = i64::try_from(self.ttl.as_secs()).unwrap_or(i64::MAX);
        let claims = Claims::new(identity, issued_at, issued_at.saturating_add(ttl_secs));

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key).map_err(|e| {
            AuthError::JwtEncode {
                source: e,
                location: ErrorLocation::from(Location::caller()),
            }
        })
    }

    /// Verify token against the current clock
    pub fn verify(&self, token: &str) -> Result<Claims, TokenRejection> {
        self.verify_at(token, chrono::Utc::now().timestamp())
    }

    /// Verify token as of `now` (Unix seconds)
    pub fn verify_at(&self, token: &str, now: i64) -> Result<Claims, TokenRejection> {
        let token_data = decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(
            |e| {
                debug!("JWT decode failed: {}", e);
                match e.kind() {
                    ErrorKind::InvalidSignature => TokenRejection::SignatureInvalid,
                    ErrorKind::ExpiredSignature => TokenRejection::Expired,
                    _ => TokenRejection::Malformed,
                }
            },
        )?;

        let claims = token_data.claims;

        claims.validate().map_err(|e| {
            debug!("JWT claim validation failed: {}", e);
            TokenRejection::Malformed
        })?;

        if now >= claims.exp {
            return Err(TokenRejection::Expired);
        }

        Ok(claims)
    }
}
