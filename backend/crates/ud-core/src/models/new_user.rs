use std::fmt;

use chrono::{DateTime, Utc};

/// Insert payload for a user that does not have an id yet.
#[derive(Clone)]
pub struct NewUser {
    pub username: String,
    pub credential_digest: String,
    pub email: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl NewUser {
    pub fn new(username: String, credential_digest: String, email: Option<String>) -> Self {
        Self {
            username,
            credential_digest,
            email,
            created_at: Utc::now(),
        }
    }
}

impl fmt::Debug for NewUser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NewUser")
            .field("username", &self.username)
            .field("credential_digest", &"<redacted>")
            .field("email", &self.email)
            .field("created_at", &self.created_at)
            .finish()
    }
}
