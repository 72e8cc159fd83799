//! Password hashing
//!
//! New hashes are produced with bcrypt. Verification accepts bcrypt
//! (`$2a$`, `$2b$`, `$2y$`) as well as argon2 PHC strings so accounts
//! provisioned by other tooling keep working.
//!
//! # Performance Considerations
//!
//! Both algorithms are intentionally CPU-intensive. Async callers should use
//! the `*_async` variants, which run on the blocking thread pool.

use argon2::{
    password_hash::{PasswordHash, PasswordVerifier},
    Argon2,
};
use thiserror::Error;

/// Password hashing errors
#[derive(Error, Debug)]
pub enum PasswordError {
    /// The stored hash could not be parsed
    #[error("Malformed password hash: {0}")]
    MalformedHash(String),

    #[error("Failed to hash password: {0}")]
    Hash(String),

    #[error("Hashing task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

/// Password hashing service
#[derive(Debug, Clone, Copy)]
pub struct PasswordService {
    cost: u32,
}

impl Default for PasswordService {
    fn default() -> Self {
        Self::new(Self::DEFAULT_COST)
    }
}

impl PasswordService {
    /// Work factor used for newly written hashes
    pub const DEFAULT_COST: u32 = 10;

    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    /// Hash a password with a fresh random salt (blocking operation)
    pub fn hash(&self, password: &str) -> Result<String, PasswordError> {
        bcrypt::hash(password, self.cost).map_err(|e| PasswordError::Hash(e.to_string()))
    }

    /// Hash a password asynchronously (non-blocking)
    pub async fn hash_async(&self, password: String) -> Result<String, PasswordError> {
        let service = *self;
        tokio::task::spawn_blocking(move || service.hash(&password)).await?
    }

    /// Verify a password against a stored hash (blocking operation)
    ///
    /// Returns `Ok(false)` on mismatch and `Err(MalformedHash)` when the
    /// stored value is not a hash this service understands.
    pub fn verify(password: &str, hash: &str) -> Result<bool, PasswordError> {
        if hash.starts_with("$argon2") {
            let parsed = PasswordHash::new(hash)
                .map_err(|e| PasswordError::MalformedHash(e.to_string()))?;
            return Ok(Argon2::default()
                .verify_password(password.as_bytes(), &parsed)
                .is_ok());
        }

        bcrypt::verify(password, hash).map_err(|e| PasswordError::MalformedHash(e.to_string()))
    }

    /// Verify a password asynchronously (non-blocking)
    pub async fn verify_async(password: String, hash: String) -> Result<bool, PasswordError> {
        tokio::task::spawn_blocking(move || Self::verify(&password, &hash)).await?
    }
}
