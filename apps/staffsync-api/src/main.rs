//! StaffSync Onboarding API
//!
//! Registers a company together with its first admin user and
//! authenticates that user on login. Built with Axum on SQLite.

mod config;
mod health;
mod logging;
mod openapi;

use axum::http::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, ORIGIN};
use axum::http::{HeaderValue, Method};
use axum::{routing::get, Router};
use config::Config;
use staffsync_api_onboarding::{onboarding_router, OnboardingState};
use staffsync_db::{run_migrations, DbPool};
use std::net::SocketAddr;
use std::time::Duration;
use tokio::signal;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tracing::info;

/// Maximum accepted request body size (1 MiB).
const MAX_BODY_SIZE: usize = 1_048_576;

#[tokio::main]
async fn main() {
    let config = match Config::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    logging::init_logging(&config.rust_log);

    info!(
        version = env!("CARGO_PKG_VERSION"),
        host = %config.host,
        port = config.port,
        "Starting StaffSync API"
    );

    // Create database connection pool
    let pool = match DbPool::connect(&config.database_url).await {
        Ok(pool) => pool,
        Err(e) => {
            eprintln!("Failed to connect to database: {e}");
            std::process::exit(1);
        }
    };

    // Schema initialization runs once at startup and is idempotent
    if let Err(e) = run_migrations(&pool).await {
        eprintln!("FATAL: Schema initialization failed: {e}");
        std::process::exit(1);
    }

    let state = OnboardingState::new(pool);
    let cors = build_cors_layer(&config.cors_origins);

    let app = Router::new()
        .route("/health", get(health::health_handler))
        .route("/api-docs/openapi.json", get(openapi::openapi_handler))
        .merge(onboarding_router(state))
        .layer(tower_http::limit::RequestBodyLimitLayer::new(MAX_BODY_SIZE))
        .layer(cors);

    let addr: SocketAddr = match config.bind_addr().parse() {
        Ok(a) => a,
        Err(e) => {
            tracing::error!("Invalid bind address '{}': {e}", config.bind_addr());
            std::process::exit(1);
        }
    };

    info!(%addr, "Server listening");

    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(l) => l,
        Err(e) => {
            tracing::error!("Failed to bind to address {addr}: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        tracing::error!("Server error: {e}");
        std::process::exit(1);
    }

    info!("Server shutdown complete");
}

/// Build CORS layer from configured origins.
///
/// When explicit origins are configured (non-wildcard), enables
/// `allow_credentials(true)` for cookie/auth header support.
fn build_cors_layer(origins: &[String]) -> CorsLayer {
    let is_wildcard = origins.len() == 1 && origins[0] == "*";

    let mut layer = CorsLayer::new().max_age(Duration::from_secs(3600));

    if is_wildcard {
        layer = layer
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
    } else {
        let allowed: Vec<HeaderValue> = origins.iter().filter_map(|o| o.parse().ok()).collect();
        layer = layer
            .allow_origin(AllowOrigin::list(allowed))
            .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
            .allow_headers([AUTHORIZATION, CONTENT_TYPE, ACCEPT, ORIGIN])
            .allow_credentials(true);
    }

    layer
}

/// Graceful shutdown signal handler.
async fn shutdown_signal() {
    let ctrl_c = async {
        match signal::ctrl_c().await {
            Ok(()) => {}
            Err(e) => {
                tracing::error!("Failed to install Ctrl+C handler: {e}");
                // Fall through - we still want to wait for terminate signal
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}
