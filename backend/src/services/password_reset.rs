//! Admin-gated password reset
//!
//! `check_eligibility` and `reset_password` run the same two checks,
//! existence first and admin code second. Nothing is carried over from a
//! check to a later reset, so callers must not treat the pair as atomic.

use crate::auth::{AdminCode, PasswordService};
use crate::error::ApiError;
use crate::repositories::UserStore;
use auth_gate_shared::{validation::validate_new_password, ResetOutcome};
use tracing::{debug, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Eligibility {
    UnknownUser,
    WrongAdminCode,
    Eligible,
}

impl Eligibility {
    fn rejection(self) -> Option<ResetOutcome> {
        match self {
            Eligibility::UnknownUser => Some(ResetOutcome::unknown_user()),
            Eligibility::WrongAdminCode => Some(ResetOutcome::wrong_admin_code()),
            Eligibility::Eligible => None,
        }
    }
}

pub struct PasswordResetService;

impl PasswordResetService {
    async fn evaluate(
        store: &dyn UserStore,
        admin_code: &AdminCode,
        username: &str,
        code: &str,
    ) -> Result<Eligibility, ApiError> {
        let exists = store
            .find_by_username(username)
            .await
            .map_err(ApiError::Store)?
            .is_some();

        if !exists {
            return Ok(Eligibility::UnknownUser);
        }
        if !admin_code.matches(code) {
            warn!("Password reset attempted with wrong admin code");
            debug!(username, "Wrong admin code");
            return Ok(Eligibility::WrongAdminCode);
        }
        Ok(Eligibility::Eligible)
    }

    /// Report whether a reset for `username` would be allowed
    pub async fn check_eligibility(
        store: &dyn UserStore,
        admin_code: &AdminCode,
        username: &str,
        code: &str,
    ) -> Result<ResetOutcome, ApiError> {
        let eligibility = Self::evaluate(store, admin_code, username, code).await?;
        Ok(eligibility.rejection().unwrap_or_else(ResetOutcome::verified))
    }

    /// Overwrite the stored hash for `username` with a hash of `new_password`
    pub async fn reset_password(
        store: &dyn UserStore,
        admin_code: &AdminCode,
        passwords: &PasswordService,
        username: &str,
        code: &str,
        new_password: Option<&str>,
    ) -> Result<ResetOutcome, ApiError> {
        let eligibility = Self::evaluate(store, admin_code, username, code).await?;
        if let Some(rejection) = eligibility.rejection() {
            return Ok(rejection);
        }

        let new_password = validate_new_password(new_password).map_err(ApiError::BadRequest)?;
        let hash = passwords
            .hash_async(new_password.to_string())
            .await
            .map_err(|e| ApiError::Internal(e.into()))?;

        let updated = store
            .update_password_hash(username, &hash)
            .await
            .map_err(ApiError::Store)?;

        // The row can vanish between the lookup and the write
        if !updated {
            return Ok(ResetOutcome::unknown_user());
        }

        debug!(username, "Password reset");
        Ok(ResetOutcome::updated())
    }
}
