//! Login route
//!
//! Verifies credentials and answers with a signed session token.

use super::body_or_default;
use crate::error::ApiResult;
use crate::services::CredentialService;
use crate::state::AppState;
use axum::{
    extract::{rejection::JsonRejection, State},
    routing::post,
    Json, Router,
};
use auth_gate_shared::types::{LoginRequest, TokenResponse};
use tracing::info;

/// Create auth routes
pub fn auth_routes() -> Router<AppState> {
    Router::new().route("/login", post(login))
}

/// Login with username and password
///
/// POST /login
async fn login(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> ApiResult<Json<TokenResponse>> {
    let req = body_or_default(payload);
    let username = req.username.unwrap_or_default();
    let password = req.password.unwrap_or_default();

    let identity = CredentialService::verify(state.store(), &username, &password).await?;
    let token = state.tokens().issue(&identity)?;

    info!(user_id = %identity.id, "User logged in");
    Ok(Json(TokenResponse { token }))
}
