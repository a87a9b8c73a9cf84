//! User entity - one row of the user directory.

use std::fmt;

use chrono::{DateTime, Utc};

/// A stored user account.
///
/// `credential_digest` is the one-way password digest. It is never
/// serialized and is redacted from `Debug` output, so a stray `{:?}` in a
/// log line cannot leak it.
#[derive(Clone, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    /// Unique across the directory (enforced by the store)
    pub username: String,
    pub credential_digest: String,
    pub email: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl fmt::Debug for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("username", &self.username)
            .field("credential_digest", &"<redacted>")
            .field("email", &self.email)
            .field("is_active", &self.is_active)
            .field("created_at", &self.created_at)
            .finish()
    }
}
