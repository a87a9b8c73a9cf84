use std::fmt;

use serde::Deserialize;

/// Fields are optional so a missing one is a validation error, not a
/// deserialization rejection.
#[derive(Deserialize, Default)]
pub struct RegisterRequest {
    #[serde(default)]
    pub username: Option<String>,

    #[serde(default)]
    pub password: Option<String>,

    #[serde(default, alias = "correo")]
    pub email: Option<String>,
}

impl fmt::Debug for RegisterRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegisterRequest")
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .field("email", &self.email)
            .finish()
    }
}
