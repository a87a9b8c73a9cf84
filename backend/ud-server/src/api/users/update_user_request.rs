use std::fmt;

use serde::{Deserialize, Deserializer};

#[derive(Deserialize, Default)]
pub struct UpdateUserRequest {
    #[serde(default)]
    pub username: Option<String>,

    #[serde(default)]
    pub password: Option<String>,

    /// Absent: unchanged. `null`: cleared.
    #[serde(default, alias = "correo", deserialize_with = "present_or_null")]
    pub email: Option<Option<String>>,

    #[serde(default, alias = "esActivo")]
    pub is_active: Option<bool>,
}

impl UpdateUserRequest {
    pub fn is_empty(&self) -> bool {
        self.username.is_none()
            && self.password.is_none()
            && self.email.is_none()
            && self.is_active.is_none()
    }
}

/// Only called when the key is present, so `null` becomes `Some(None)`.
fn present_or_null<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Some)
}

impl fmt::Debug for UpdateUserRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UpdateUserRequest")
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .field("email", &self.email)
            .field("is_active", &self.is_active)
            .finish()
    }
}
