pub mod auth_decision;
pub mod auth_gate;
pub mod authenticated_identity;
pub mod claims;
pub mod credential_hasher;
pub mod error;
pub mod token_codec;
pub mod token_rejection;

pub use auth_decision::{AuthDecision, AuthRejection};
pub use auth_gate::{AuthGate, extract_bearer};
pub use authenticated_identity::AuthenticatedIdentity;
pub use claims::{Claims, IdentityClaims};
pub use credential_hasher::CredentialHasher;
pub use error::{AuthError, Result};
pub use token_codec::TokenCodec;
pub use token_rejection::TokenRejection;

#[cfg(test)]
mod tests;
