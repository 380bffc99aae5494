use std::sync::Arc;

use tokio::task::{self, JoinError};
use tracing::{info, warn};
use uuid::Uuid;

use crate::auth::password::{self, PasswordError};
use crate::database::{DatabaseError, User, UserStore};

#[derive(Debug, thiserror::Error)]
pub enum UserError {
    #[error("User already exists")]
    AlreadyExists,
    /// Unknown email and wrong password are deliberately the same error.
    #[error("Invalid email or password")]
    InvalidCredentials,
    #[error("Password error: {0}")]
    Password(#[from] PasswordError),
    #[error("Database error: {0}")]
    Database(DatabaseError),
    #[error("Password task failed: {0}")]
    Task(#[from] JoinError),
}

impl From<DatabaseError> for UserError {
    fn from(err: DatabaseError) -> Self {
        match err {
            DatabaseError::Duplicate(_) => UserError::AlreadyExists,
            other => UserError::Database(other),
        }
    }
}

type VerifyFn = fn(&str, &str) -> Result<bool, PasswordError>;

/// Registration and credential checks on top of a [`UserStore`].
/// Argon2 work runs on the blocking pool.
#[derive(Clone)]
pub struct UserService {
    store: Arc<dyn UserStore>,
    verify: VerifyFn,
}

impl UserService {
    pub fn new(store: Arc<dyn UserStore>) -> Self {
        Self {
            store,
            verify: password::verify_password,
        }
    }

    #[cfg(test)]
    fn with_verifier(store: Arc<dyn UserStore>, verify: VerifyFn) -> Self {
        Self { store, verify }
    }

    pub fn store(&self) -> &dyn UserStore {
        self.store.as_ref()
    }

    /// Create an account. An email that is already registered fails before
    /// anything is hashed or written.
    pub async fn register(&self, email: &str, password: &str) -> Result<Uuid, UserError> {
        if self.store.find_by_email(email).await?.is_some() {
            warn!("Registration rejected, email already registered");
            return Err(UserError::AlreadyExists);
        }

        let candidate = password.to_string();
        let hash = task::spawn_blocking(move || password::hash_password(&candidate)).await??;
        let user = self.store.insert(User::new(email, hash)).await?;

        info!(user_id = %user.id, "Registered user");
        Ok(user.id)
    }

    /// Check credentials and return the matching user. Unknown emails are
    /// verified against a dummy hash so both failures take as long.
    pub async fn authenticate(&self, email: &str, password: &str) -> Result<User, UserError> {
        let user = self.store.find_by_email(email).await?;

        let verify = self.verify;
        let candidate = password.to_string();
        let stored = user.as_ref().map(|u| u.password.clone());
        let matches = task::spawn_blocking(move || match stored {
            Some(hash) => verify(&candidate, &hash),
            None => {
                let _ = verify(&candidate, password::dummy_hash());
                Ok(false)
            }
        })
        .await?;

        let Some(user) = user else {
            warn!("Login rejected, unknown email");
            return Err(UserError::InvalidCredentials);
        };

        if !matches? {
            warn!(user_id = %user.id, "Login rejected, wrong password");
            return Err(UserError::InvalidCredentials);
        }

        Ok(user)
    }
}

/// Canonical form of an email used as the store key.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Basic email validation for registration.
pub fn validate_email_format(email: &str) -> Result<(), String> {
    if email.is_empty() {
        return Err("Email cannot be empty".to_string());
    }

    if email.chars().any(char::is_whitespace) {
        return Err("Invalid email format".to_string());
    }

    match email.split_once('@') {
        Some((local, domain))
            if !local.is_empty()
                && !domain.is_empty()
                && !domain.contains('@')
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.') =>
        {
            Ok(())
        }
        _ => Err("Invalid email format".to_string()),
    }
}

pub fn validate_password(password: &str) -> Result<(), String> {
    if password.is_empty() {
        return Err("Password cannot be empty".to_string());
    }
    Ok(())
}
