
use crate::{CredentialHasher, IdentityClaims, TokenCodec};

use std::time::Duration;

pub(crate) const TEST_SECRET: &[u8] = b"test-secret-key-at-least-32-bytes";

/// Cheap work factor so tests stay fast
pub(crate) fn fast_hasher() -> CredentialHasher {
    CredentialHasher::new(1024, 1, 1).unwrap()
}

pub(crate) fn test_codec() -> TokenCodec {
    TokenCodec::with_hs256(TEST_SECRET, Duration::from_secs(3600))
}

pub(crate) fn test_identity() -> IdentityClaims {
    IdentityClaims {
        id: 123,
        username: "alice".to_string(),
        email: Some("alice@example.com".to_string()),
    }
}
