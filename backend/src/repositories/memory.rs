//! In-memory user store for tests and local experiments

use super::user::{UserRecord, UserStore};
use anyhow::{bail, Result};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Default, Clone)]
pub struct InMemoryUserStore {
    users: Arc<RwLock<HashMap<String, UserRecord>>>,
    lookups: Arc<AtomicUsize>,
    unavailable: Arc<AtomicBool>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a user keyed by username
    pub async fn insert(&self, id: &str, username: &str, password_hash: Option<String>) {
        self.users.write().await.insert(
            username.to_string(),
            UserRecord {
                id: id.to_string(),
                username: username.to_string(),
                password_hash,
            },
        );
    }

    pub async fn remove(&self, username: &str) {
        self.users.write().await.remove(username);
    }

    /// Current stored hash for a username
    pub async fn password_hash(&self, username: &str) -> Option<String> {
        self.users
            .read()
            .await
            .get(username)
            .and_then(|u| u.password_hash.clone())
    }

    /// Number of `find_by_username` calls served so far
    pub fn lookups(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }

    /// Make every call fail as if the database were unreachable
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    fn check_available(&self) -> Result<()> {
        if self.unavailable.load(Ordering::SeqCst) {
            bail!("user store unavailable");
        }
        Ok(())
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn find_by_username(&self, username: &str) -> Result<Option<UserRecord>> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        self.check_available()?;
        Ok(self.users.read().await.get(username).cloned())
    }

    async fn update_password_hash(&self, username: &str, password_hash: &str) -> Result<bool> {
        self.check_available()?;
        let mut users = self.users.write().await;
        match users.get_mut(username) {
            Some(user) => {
                user.password_hash = Some(password_hash.to_string());
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn health_check(&self) -> Result<()> {
        self.check_available()
    }
}
