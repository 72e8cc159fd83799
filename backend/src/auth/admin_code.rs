//! Shared admin secret gating password resets
//!
//! Anyone holding this value can reset any account's password. A per-account
//! reset token delivered out of band is the secure replacement.

use secrecy::{ExposeSecret, Secret};
use std::sync::Arc;

#[derive(Clone)]
pub struct AdminCode {
    secret: Arc<Secret<String>>,
}

impl AdminCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            secret: Arc::new(Secret::new(code.into())),
        }
    }

    /// Resets are disabled when no code is configured
    pub fn is_configured(&self) -> bool {
        !self.secret.expose_secret().is_empty()
    }

    /// Exact match against the configured code, in constant time
    pub fn matches(&self, candidate: &str) -> bool {
        self.is_configured()
            && constant_time_eq(self.secret.expose_secret().as_bytes(), candidate.as_bytes())
    }
}

impl std::fmt::Debug for AdminCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminCode")
            .field("configured", &self.is_configured())
            .finish()
    }
}

fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}
