//! Application error handling
//!
//! Converts internal errors to HTTP responses. Server-side failures are
//! logged in full and answered with a generic message.

use crate::auth::TokenError;
use auth_gate_shared::{AuthError, MessageResponse, ResetOutcome};
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use tracing::error;

/// API error type that can be converted to HTTP responses
#[derive(Error, Debug)]
pub enum ApiError {
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Store error")]
    Store(#[source] anyhow::Error),

    #[error("Token error")]
    Token(#[from] TokenError),

    #[error("Internal server error")]
    Internal(#[from] anyhow::Error),
}

impl ApiError {
    /// Status code and caller-visible message
    pub fn status_and_message(&self) -> (StatusCode, String) {
        match self {
            ApiError::Auth(err) if err.is_client_error() => {
                (StatusCode::BAD_REQUEST, err.to_string())
            }
            ApiError::Auth(err) => (StatusCode::INTERNAL_SERVER_ERROR, err.to_string()),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            ApiError::Store(_) | ApiError::Token(_) | ApiError::Internal(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".to_string(),
            ),
        }
    }

    fn log(&self) {
        match self {
            ApiError::Store(err) => error!("Store error: {:?}", err),
            ApiError::Token(err) => error!("Token error: {}", err),
            ApiError::Internal(err) => error!("Internal error: {:?}", err),
            _ => {}
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        self.log();
        let (status, message) = self.status_and_message();
        (status, Json(MessageResponse::new(message))).into_response()
    }
}

/// Error for the password reset endpoints, whose bodies always carry
/// `success` alongside `message`
#[derive(Error, Debug)]
#[error(transparent)]
pub struct ResetApiError(#[from] pub ApiError);

impl IntoResponse for ResetApiError {
    fn into_response(self) -> Response {
        self.0.log();
        let (status, message) = self.0.status_and_message();
        (status, Json(ResetOutcome::failure(message))).into_response()
    }
}

/// Result type alias for API handlers
pub type ApiResult<T> = Result<T, ApiError>;
