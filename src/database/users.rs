use std::collections::HashMap;

use async_trait::async_trait;
use sqlx::PgPool;
use tokio::sync::RwLock;
use tracing::info;

use super::manager::{self, DatabaseError};
use super::models::User;

/// Persistence for the `users` collection, keyed by email.
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DatabaseError>;

    /// Insert a new user. Fails with [`DatabaseError::Duplicate`] when the
    /// email is already taken.
    async fn insert(&self, user: User) -> Result<User, DatabaseError>;

    async fn health_check(&self) -> Result<(), DatabaseError>;

    /// Short backend name for health output and logs.
    fn backend(&self) -> &'static str;
}

/// Postgres-backed store using a pool owned by the application state.
pub struct PgUserStore {
    pool: PgPool,
}

impl PgUserStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create the `users` table if it does not exist yet.
    pub async fn ensure_schema(&self) -> Result<(), DatabaseError> {
        sqlx::query(
            "CREATE TABLE IF NOT EXISTS users (
                id UUID PRIMARY KEY,
                email TEXT NOT NULL UNIQUE,
                password TEXT NOT NULL,
                created_at TIMESTAMPTZ NOT NULL DEFAULT now()
            )",
        )
        .execute(&self.pool)
        .await?;

        info!("Ensured users table exists");
        Ok(())
    }
}

#[async_trait]
impl UserStore for PgUserStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DatabaseError> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, email, password, created_at
             FROM users
             WHERE email = $1",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    async fn insert(&self, user: User) -> Result<User, DatabaseError> {
        sqlx::query_as::<_, User>(
            "INSERT INTO users (id, email, password, created_at)
             VALUES ($1, $2, $3, $4)
             RETURNING id, email, password, created_at",
        )
        .bind(user.id)
        .bind(&user.email)
        .bind(&user.password)
        .bind(user.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                DatabaseError::Duplicate(user.email.clone())
            }
            _ => DatabaseError::Sqlx(e),
        })
    }

    async fn health_check(&self) -> Result<(), DatabaseError> {
        manager::health_check(&self.pool).await
    }

    fn backend(&self) -> &'static str {
        "postgres"
    }
}

/// Process-local store used when no database is configured and in tests.
/// Contents are lost on restart.
#[derive(Default)]
pub struct MemoryUserStore {
    users: RwLock<HashMap<String, User>>,
}

impl MemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.users.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.users.read().await.is_empty()
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DatabaseError> {
        Ok(self.users.read().await.get(email).cloned())
    }

    async fn insert(&self, user: User) -> Result<User, DatabaseError> {
        let mut users = self.users.write().await;
        if users.contains_key(&user.email) {
            return Err(DatabaseError::Duplicate(user.email));
        }
        users.insert(user.email.clone(), user.clone());
        Ok(user)
    }

    async fn health_check(&self) -> Result<(), DatabaseError> {
        Ok(())
    }

    fn backend(&self) -> &'static str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn memory_store_finds_inserted_users() {
        let store = MemoryUserStore::new();
        let user = store.insert(User::new("ola@example.com", "$argon2id$hash")).await.unwrap();

        let found = store.find_by_email("ola@example.com").await.unwrap().unwrap();
        assert_eq!(found.id, user.id);
        assert!(store.find_by_email("kasia@example.com").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn memory_store_rejects_duplicate_emails() {
        let store = MemoryUserStore::new();
        store.insert(User::new("ola@example.com", "first")).await.unwrap();

        let err = store.insert(User::new("ola@example.com", "second")).await.unwrap_err();
        assert!(matches!(err, DatabaseError::Duplicate(email) if email == "ola@example.com"));
        assert_eq!(store.len().await, 1);

        let kept = store.find_by_email("ola@example.com").await.unwrap().unwrap();
        assert_eq!(kept.password, "first");
    }
}
