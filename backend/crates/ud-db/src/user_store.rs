use crate::Result as DbResult;

use ud_core::{NewUser, User, UserChanges};

use async_trait::async_trait;

/// Persistence boundary for user records.
///
/// Implementations must be safe to share across concurrent requests and
/// must report duplicate usernames as [`crate::DbError::UniqueViolation`].
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn insert(&self, new_user: &NewUser) -> DbResult<User>;

    async fn find_by_id(&self, id: i64) -> DbResult<Option<User>>;

    async fn find_by_username(&self, username: &str) -> DbResult<Option<User>>;

    async fn find_all(&self) -> DbResult<Vec<User>>;

    /// Apply a partial update, returning the number of rows affected.
    async fn update(&self, id: i64, changes: &UserChanges) -> DbResult<u64>;

    /// Delete by id, returning the number of rows affected.
    async fn delete(&self, id: i64) -> DbResult<u64>;

    /// Cheap round trip used by readiness checks.
    async fn ping(&self) -> DbResult<()>;
}
