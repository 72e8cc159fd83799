//! User credential storage

use crate::db::{self, DbHandle};
use anyhow::Result;
use async_trait::async_trait;
use auth_gate_shared::Identity;

/// Credential record as stored
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct UserRecord {
    pub id: String,
    pub username: String,
    pub password_hash: Option<String>,
}

impl UserRecord {
    pub fn identity(&self) -> Identity {
        Identity {
            id: self.id.clone(),
            username: self.username.clone(),
        }
    }
}

/// Access to stored user credentials
///
/// Username uniqueness and write atomicity are the backing store's job.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Exact-match lookup by username
    async fn find_by_username(&self, username: &str) -> Result<Option<UserRecord>>;

    /// Overwrite the stored hash. Returns false when no row matched.
    async fn update_password_hash(&self, username: &str, password_hash: &str) -> Result<bool>;

    async fn health_check(&self) -> Result<()>;
}

/// PostgreSQL-backed user store
///
/// Expects a `users` table with `id`, a unique `name` and a nullable
/// `password_hash`. The id is read as text so any key type works.
#[derive(Clone)]
pub struct UserRepository {
    db: DbHandle,
}

impl UserRepository {
    pub fn new(db: DbHandle) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserStore for UserRepository {
    async fn find_by_username(&self, username: &str) -> Result<Option<UserRecord>> {
        let pool = self.db.pool().await;
        let user = sqlx::query_as::<_, UserRecord>(
            r#"
            SELECT id::text AS id, name AS username, password_hash
            FROM users
            WHERE name = $1
            LIMIT 1
            "#,
        )
        .bind(username)
        .fetch_optional(&pool)
        .await?;

        Ok(user)
    }

    async fn update_password_hash(&self, username: &str, password_hash: &str) -> Result<bool> {
        let pool = self.db.pool().await;
        let result = sqlx::query(
            r#"
            UPDATE users
            SET password_hash = $1
            WHERE name = $2
            "#,
        )
        .bind(password_hash)
        .bind(username)
        .execute(&pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn health_check(&self) -> Result<()> {
        let pool = self.db.pool().await;
        db::health_check(&pool).await
    }
}
