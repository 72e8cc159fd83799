//! Application state management
//!
//! Shared resources passed to every handler via Axum's state extraction.
//! Everything here is built once at startup and is cheap to clone.

use crate::auth::{AdminCode, PasswordService, TokenIssuer};
use crate::config::AppConfig;
use crate::repositories::UserStore;
use anyhow::{Context, Result};
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// User credential store
    pub store: Arc<dyn UserStore>,
    /// Token issuer with pre-computed keys
    pub tokens: TokenIssuer,
    pub passwords: PasswordService,
    pub admin_code: AdminCode,
}

impl AppState {
    /// Create a new application state
    ///
    /// Fails when the token signing secret is missing or the token lifetime
    /// is out of range, which must stop startup rather than surface on the
    /// first login.
    pub fn new(store: Arc<dyn UserStore>, config: &AppConfig) -> Result<Self> {
        let tokens = TokenIssuer::new(&config.jwt.secret, config.jwt.token_expiry_secs)
            .context("invalid token configuration (is JWT_SECRET set?)")?;
        let passwords = PasswordService::new(config.auth.bcrypt_cost);
        let admin_code = AdminCode::new(config.auth.admin_code.clone());

        Ok(Self {
            store,
            tokens,
            passwords,
            admin_code,
        })
    }

    #[inline]
    pub fn store(&self) -> &dyn UserStore {
        self.store.as_ref()
    }

    #[inline]
    pub fn tokens(&self) -> &TokenIssuer {
        &self.tokens
    }
}
