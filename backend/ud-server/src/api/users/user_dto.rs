use ud_core::User;

use serde::Serialize;

/// User record as returned to clients; never carries the credential digest
#[derive(Debug, Serialize)]
pub struct UserDto {
    pub id: i64,
    pub username: String,
    pub email: Option<String>,
    pub is_active: bool,
    /// RFC 3339
    pub created_at: String,
}

impl From<User> for UserDto {
    fn from(u: User) -> Self {
        Self {
            id: u.id,
            username: u.username,
            email: u.email,
            is_active: u.is_active,
            created_at: u.created_at.to_rfc3339(),
        }
    }
}
