/// Partial update for an existing user. `None` leaves the column untouched.
///
/// `email` is doubly optional: `Some(None)` clears the address.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct UserChanges {
    pub username: Option<String>,
    pub credential_digest: Option<String>,
    pub email: Option<Option<String>>,
    pub is_active: Option<bool>,
}

impl UserChanges {
    pub fn is_empty(&self) -> bool {
        self.username.is_none()
            && self.credential_digest.is_none()
            && self.email.is_none()
            && self.is_active.is_none()
    }
}

impl std::fmt::Debug for UserChanges {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserChanges")
            .field("username", &self.username)
            .field(
                "credential_digest",
                &self.credential_digest.as_ref().map(|_| "<redacted>"),
            )
            .field("email", &self.email)
            .field("is_active", &self.is_active)
            .finish()
    }
}
