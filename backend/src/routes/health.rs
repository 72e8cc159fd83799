//! Health endpoints: `/health`, `/health/live` and `/health/ready`

use crate::state::AppState;
use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;
use tracing::warn;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    /// Store reachability, reported by the readiness probe only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub store: Option<&'static str>,
}

impl HealthResponse {
    fn new(status: &'static str) -> Self {
        Self {
            status,
            version: env!("CARGO_PKG_VERSION"),
            store: None,
        }
    }
}

pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse::new("healthy"))
}

pub async fn liveness_check() -> Json<HealthResponse> {
    Json(HealthResponse::new("alive"))
}

/// 503 while the credential store cannot be reached
pub async fn readiness_check(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    match state.store().health_check().await {
        Ok(()) => Ok(Json(HealthResponse {
            store: Some("reachable"),
            ..HealthResponse::new("ready")
        })),
        Err(e) => {
            warn!(error = %format!("{:#}", e), "Readiness check failed");
            Err((
                StatusCode::SERVICE_UNAVAILABLE,
                Json(HealthResponse {
                    store: Some("unreachable"),
                    ..HealthResponse::new("not_ready")
                }),
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::repositories::InMemoryUserStore;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_static_probes() {
        assert_eq!(health_check().await.status, "healthy");
        assert_eq!(liveness_check().await.status, "alive");
        assert!(!health_check().await.version.is_empty());
    }

    #[tokio::test]
    async fn test_readiness_follows_store() {
        let store = Arc::new(InMemoryUserStore::new());
        let mut config = AppConfig::default();
        config.jwt.secret = "health-test-secret".to_string();
        let state = AppState::new(store.clone(), &config).unwrap();

        let ready = readiness_check(State(state.clone())).await.unwrap();
        assert_eq!(ready.status, "ready");
        assert_eq!(ready.store, Some("reachable"));

        store.set_unavailable(true);
        let (status, body) = readiness_check(State(state)).await.unwrap_err();
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body.status, "not_ready");
        assert_eq!(body.store, Some("unreachable"));
    }
}
