//! Credential verification
//!
//! Looks up the user and checks the supplied password against the stored
//! one-way hash. Unknown users and wrong passwords fail identically.

use crate::auth::{PasswordError, PasswordService};
use crate::error::ApiError;
use crate::repositories::UserStore;
use auth_gate_shared::{AuthError, Identity};
use tracing::{debug, error};

pub struct CredentialService;

impl CredentialService {
    /// Verify a username/password pair
    ///
    /// An empty password is rejected before the store is consulted.
    pub async fn verify(
        store: &dyn UserStore,
        username: &str,
        password: &str,
    ) -> Result<Identity, ApiError> {
        if password.is_empty() {
            return Err(AuthError::MissingPassword.into());
        }

        let user = store
            .find_by_username(username)
            .await
            .map_err(ApiError::Store)?;

        let Some(user) = user else {
            debug!(username, "Login for unknown user");
            return Err(AuthError::InvalidCredentials.into());
        };

        let hash = match user.password_hash.as_deref() {
            Some(hash) if !hash.is_empty() => hash.to_string(),
            _ => {
                error!(user_id = %user.id, "User has no stored password hash");
                return Err(AuthError::IntegrityError.into());
            }
        };

        let matched = match PasswordService::verify_async(password.to_string(), hash).await {
            Ok(matched) => matched,
            Err(PasswordError::MalformedHash(reason)) => {
                error!(user_id = %user.id, %reason, "Stored password hash is malformed");
                return Err(AuthError::IntegrityError.into());
            }
            Err(e) => return Err(ApiError::Internal(e.into())),
        };

        if !matched {
            debug!(username, "Password mismatch");
            return Err(AuthError::InvalidCredentials.into());
        }

        Ok(user.identity())
    }
}
