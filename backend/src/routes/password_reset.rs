//! Password reset routes
//!
//! Both endpoints answer 200 with `{success, message}` for every business
//! outcome; only store failures and a missing new password are errors.

use super::body_or_default;
use crate::error::ResetApiError;
use crate::services::PasswordResetService;
use crate::state::AppState;
use axum::{
    extract::{rejection::JsonRejection, State},
    routing::post,
    Json, Router,
};
use auth_gate_shared::types::{ResetCheckRequest, ResetOutcome, ResetPasswordRequest};

/// Create password reset routes
pub fn password_reset_routes() -> Router<AppState> {
    Router::new()
        .route("/check", post(check))
        .route("/reset", post(reset))
}

/// POST /forgot-password/check
async fn check(
    State(state): State<AppState>,
    payload: Result<Json<ResetCheckRequest>, JsonRejection>,
) -> Result<Json<ResetOutcome>, ResetApiError> {
    let req = body_or_default(payload);
    let outcome = PasswordResetService::check_eligibility(
        state.store(),
        &state.admin_code,
        req.username.as_deref().unwrap_or_default(),
        req.admin_code.as_deref().unwrap_or_default(),
    )
    .await?;
    Ok(Json(outcome))
}

/// POST /forgot-password/reset
async fn reset(
    State(state): State<AppState>,
    payload: Result<Json<ResetPasswordRequest>, JsonRejection>,
) -> Result<Json<ResetOutcome>, ResetApiError> {
    let req = body_or_default(payload);
    let outcome = PasswordResetService::reset_password(
        state.store(),
        &state.admin_code,
        &state.passwords,
        req.username.as_deref().unwrap_or_default(),
        req.admin_code.as_deref().unwrap_or_default(),
        req.new_password.as_deref(),
    )
    .await?;
    Ok(Json(outcome))
}
