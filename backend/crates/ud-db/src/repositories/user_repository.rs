//! User repository backed by SQLite.
//!
//! Every statement is parameterised. Duplicate usernames surface as
//! `DbError::UniqueViolation` through the `From<sqlx::Error>` conversion,
//! so callers match on the variant rather than on driver message text.

use crate::{DbError, Result as DbErrorResult, UserStore};

use ud_core::{NewUser, User, UserChanges};

use std::panic::Location;

use async_trait::async_trait;
use chrono::DateTime;
use error_location::ErrorLocation;
use sqlx::{FromRow, QueryBuilder, Sqlite, SqlitePool};

#[derive(FromRow)]
struct UserRow {
    id: i64,
    username: String,
    credential_digest: String,
    email: Option<String>,
    is_active: bool,
    created_at: i64,
}

impl TryFrom<UserRow> for User {
    type Error = DbError;

    #[track_caller]
    fn try_from(r: UserRow) -> DbErrorResult<Self> {
        Ok(User {
            id: r.id,
            username: r.username,
            credential_digest: r.credential_digest,
            email: r.email,
            is_active: r.is_active,
            created_at: DateTime::from_timestamp(r.created_at, 0).ok_or_else(|| {
                DbError::Initialization {
                    message: "Invalid timestamp in users.created_at".to_string(),
                    location: ErrorLocation::from(Location::caller()),
                }
            })?,
        })
    }
}

#[derive(Clone)]
pub struct UserRepository {
    pool: SqlitePool,
}

impl UserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[async_trait]
impl UserStore for UserRepository {
    async fn insert(&self, new_user: &NewUser) -> DbErrorResult<User> {
        let created_at = new_user.created_at.timestamp();

        let result = sqlx::query(
            r#"
                INSERT INTO users (username, credential_digest, email, is_active, created_at)
                VALUES (?, ?, ?, 1, ?)
            "#,
        )
        .bind(&new_user.username)
        .bind(&new_user.credential_digest)
        .bind(&new_user.email)
        .bind(created_at)
        .execute(&self.pool)
        .await?;

        Ok(User {
            id: result.last_insert_rowid(),
            username: new_user.username.clone(),
            credential_digest: new_user.credential_digest.clone(),
            email: new_user.email.clone(),
            is_active: true,
            created_at: DateTime::from_timestamp(created_at, 0).ok_or_else(|| {
                DbError::Initialization {
                    message: "Invalid timestamp for new user".to_string(),
                    location: ErrorLocation::from(Location::caller()),
                }
            })?,
        })
    }

    async fn find_by_id(&self, id: i64) -> DbErrorResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
                SELECT id, username, credential_digest, email, is_active, created_at
                FROM users
                WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(User::try_from).transpose()
    }

    async fn find_by_username(&self, username: &str) -> DbErrorResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
                SELECT id, username, credential_digest, email, is_active, created_at
                FROM users
                WHERE username = ?
            "#,
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;

        row.map(User::try_from).transpose()
    }

    async fn find_all(&self) -> DbErrorResult<Vec<User>> {
        let rows = sqlx::query_as::<_, UserRow>(
            r#"
                SELECT id, username, credential_digest, email, is_active, created_at
                FROM users
                ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter()
            .map(User::try_from)
            .collect::<DbErrorResult<Vec<_>>>()
    }

    async fn update(&self, id: i64, changes: &UserChanges) -> DbErrorResult<u64> {
        if changes.is_empty() {
            return Ok(0);
        }

        let mut builder: QueryBuilder<Sqlite> = QueryBuilder::new("UPDATE users SET ");
        {
            let mut fields = builder.separated(", ");
            if let Some(username) = &changes.username {
                fields.push("username = ");
                fields.push_bind_unseparated(username.clone());
            }
            if let Some(digest) = &changes.credential_digest {
                fields.push("credential_digest = ");
                fields.push_bind_unseparated(digest.clone());
            }
            if let Some(email) = &changes.email {
                fields.push("email = ");
                fields.push_bind_unseparated(email.clone());
            }
            if let Some(is_active) = changes.is_active {
                fields.push("is_active = ");
                fields.push_bind_unseparated(is_active);
            }
        }
        builder.push(" WHERE id = ");
        builder.push_bind(id);

        let result = builder.build().execute(&self.pool).await?;

        Ok(result.rows_affected())
    }

    async fn delete(&self, id: i64) -> DbErrorResult<u64> {
        let result = sqlx::query("DELETE FROM users WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    async fn ping(&self) -> DbErrorResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
