//! BunkCredit API server binary
//!
//! # Usage
//!
//! ```bash
//! # Run with default configuration
//! cargo run --bin bunkcredit-api
//!
//! # Run with environment variables
//! API_HOST=0.0.0.0 API_PORT=8080 DATABASE_URL=postgres://... cargo run --bin bunkcredit-api
//! ```
//!
//! # Environment Variables
//!
//! * `API_HOST` - Server host (default: 0.0.0.0)
//! * `API_PORT` - Server port (default: 8080)
//! * `API_JWT_SECRET` - JWT signing secret (required in production)
//! * `API_JWT_EXPIRATION_SECS` - JWT token expiration in seconds (default: 3600)
//! * `API_DATABASE_URL` - PostgreSQL connection string
//! * `API_LOG_LEVEL` - Log level: trace, debug, info, warn, error (default: info)

use std::net::SocketAddr;

use anyhow::Context;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use infra_db::{create_pool, run_migrations, DatabaseConfig};
use interface_api::{config::ApiConfig, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env is optional, useful for local development
    dotenvy::dotenv().ok();

    let config = load_config();
    init_tracing(&config.log_level);

    tracing::info!(
        host = %config.host,
        port = %config.port,
        "starting BunkCredit API server"
    );

    let pool = create_pool(DatabaseConfig::new(&config.database_url))
        .await
        .context("failed to create database pool")?;
    run_migrations(&pool)
        .await
        .context("failed to run migrations")?;

    let app = create_router(pool, config.clone());

    let addr: SocketAddr = config
        .server_addr()
        .parse()
        .context("invalid server address")?;
    tracing::info!(%addr, "server listening");

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("server shutdown complete");
    Ok(())
}

/// Loads configuration from environment variables, falling back to
/// per-variable defaults.
fn load_config() -> ApiConfig {
    ApiConfig::from_env().unwrap_or_else(|_| ApiConfig {
        host: std::env::var("API_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
        port: std::env::var("API_PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(8080),
        jwt_secret: std::env::var("API_JWT_SECRET")
            .unwrap_or_else(|_| "dev-secret-change-in-production".to_string()),
        jwt_expiration_secs: std::env::var("API_JWT_EXPIRATION_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(3600),
        database_url: std::env::var("DATABASE_URL")
            .or_else(|_| std::env::var("API_DATABASE_URL"))
            .unwrap_or_else(|_| "postgres://localhost/bunkcredit".to_string()),
        log_level: std::env::var("API_LOG_LEVEL")
            .or_else(|_| std::env::var("RUST_LOG"))
            .unwrap_or_else(|_| "info".to_string()),
    })
}

/// Initializes the tracing subscriber for structured logging
fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .init();
}

/// Waits for Ctrl+C or SIGTERM so in-flight requests can drain
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("received Ctrl+C, shutting down");
        }
        _ = terminate => {
            tracing::info!("received SIGTERM, shutting down");
        }
    }
}
