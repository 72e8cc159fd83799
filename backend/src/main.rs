//! Auth Gate Backend
//!
//! Username/password login issuing signed session tokens, plus an
//! admin-gated password reset.
//!
//! ## Architecture
//!
//! - Routes: HTTP request handling and routing
//! - Services: credential verification and password reset
//! - Repositories: user credential storage
//! - Database: PostgreSQL with SQLx behind a supervised pool handle

use anyhow::{Context, Result};
use auth_gate_backend::{
    config, db::DbHandle, repositories::UserRepository, routes, state::AppState,
};
use std::sync::Arc;
use tokio::signal;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    init_tracing();

    let config = config::AppConfig::load()?;

    info!(
        version = env!("CARGO_PKG_VERSION"),
        env = if config::AppConfig::is_production() { "production" } else { "development" },
        "Starting Auth Gate Backend"
    );

    if config::AppConfig::is_production() {
        validate_production_config(&config)?;
    }
    if config.auth.admin_code.is_empty() {
        warn!("No admin code configured; password reset is disabled");
    }

    let db = DbHandle::new(config.database.clone())?;
    db.ensure_connected().await?;

    let store = Arc::new(UserRepository::new(db.clone()));
    let state = AppState::new(store, &config)?;

    let app = routes::create_router(state);

    let addr = config.listen_addr();
    info!(address = %addr, "Server listening");

    let listener = tokio::net::TcpListener::bind(&addr).await?;

    let probe_interval = config.database.health_check_interval();
    let supervisor = async move {
        if probe_interval.is_zero() {
            std::future::pending::<Result<()>>().await
        } else {
            db.supervise(probe_interval).await
        }
    };

    let server = async move {
        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
    };

    // A pool that cannot be rebuilt takes the process down
    tokio::select! {
        res = server => res?,
        res = supervisor => {
            res.context("database supervisor stopped")?;
        }
    }

    info!("Server shutdown complete");
    Ok(())
}

/// Initialize tracing/logging
fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if config::AppConfig::is_production() {
            "auth_gate_backend=info,tower_http=info".into()
        } else {
            "auth_gate_backend=debug,tower_http=debug,sqlx=warn".into()
        }
    });

    let subscriber = tracing_subscriber::registry().with(env_filter);

    if config::AppConfig::is_production() {
        // JSON logging for production (better for log aggregation)
        subscriber
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        subscriber
            .with(tracing_subscriber::fmt::layer().pretty())
            .init();
    }
}

/// Validate configuration for production deployment
fn validate_production_config(config: &config::AppConfig) -> Result<()> {
    let issues = config.production_issues();

    if config.database.url.contains("localhost") || config.database.url.contains("127.0.0.1") {
        warn!("Database URL contains localhost - ensure this is intentional for production");
    }

    if !issues.is_empty() {
        for issue in &issues {
            error!("Configuration error: {}", issue);
        }
        anyhow::bail!("Invalid production configuration");
    }

    Ok(())
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, starting graceful shutdown");
        }
        _ = terminate => {
            info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
