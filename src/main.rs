//! Taskhub Server — multi-tenant project management backend.
//!
//! Main entry point that wires all crates together and starts the server.

use std::sync::Arc;

use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

use taskhub_api::{AppState, build_router};
use taskhub_cache::provider::CacheManager;
use taskhub_core::config::AppConfig;
use taskhub_core::error::AppError;
use taskhub_database::connection::DatabasePool;

#[tokio::main]
async fn main() {
    let env = std::env::var("TASKHUB_ENV").unwrap_or_else(|_| "development".to_string());

    let config = match AppConfig::load(&env) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {e}");
        std::process::exit(1);
    }
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
        _ => {
            fmt().pretty().with_env_filter(filter).with_target(true).init();
        }
    }
}

/// Main server run function
async fn run(config: AppConfig) -> Result<(), AppError> {
    info!("Starting Taskhub v{}", env!("CARGO_PKG_VERSION"));

    // ── Step 1: Database connection + migrations ─────────────────
    let database = DatabasePool::connect(&config.database).await?;
    taskhub_database::migration::run_migrations(database.pool()).await?;

    // ── Step 2: Cache ────────────────────────────────────────────
    info!(provider = %config.cache.provider, "Initializing cache");
    let cache = Arc::new(CacheManager::new(&config.cache).await?);

    // ── Step 3: Application state + router ───────────────────────
    let config = Arc::new(config);
    let state = AppState::assemble(config.clone(), database.into_pool(), cache);
    let router = build_router(state);

    // ── Step 4: Serve ────────────────────────────────────────────
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    info!("Listening on {addr}");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    info!("Server stopped");
    Ok(())
}

/// Wait for Ctrl-C.
async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
    info!("Shutdown signal received");
}
