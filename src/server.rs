//! HTTP server initialization and runtime setup.
//!
//! Builds the storage backend, wires the state, and runs the Axum server
//! until Ctrl+C.

use crate::config::{Config, StorageBackend};
use crate::domain::repositories::UserRepository;
use crate::infrastructure::persistence::database;
use crate::infrastructure::persistence::{MemoryUserRepository, SqliteUserRepository};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

/// Creates the repository selected by the configuration.
///
/// For SQLite this opens the pool and makes sure the `users` table exists.
///
/// # Errors
///
/// Returns an error if the database cannot be opened or bootstrapped.
pub async fn build_repository(config: &Config) -> Result<Arc<dyn UserRepository>> {
    match config.storage_backend {
        StorageBackend::Sqlite => {
            let pool = database::connect(
                &config.database_url,
                config.db_max_connections,
                Duration::from_secs(config.db_connect_timeout),
            )
            .await
            .context("Failed to open database")?;
            tracing::info!("Connected to database");

            database::ensure_schema(&pool)
                .await
                .context("Failed to create users table")?;

            Ok(Arc::new(SqliteUserRepository::new(Arc::new(pool))))
        }
        StorageBackend::Memory => {
            tracing::warn!("Using in-memory storage; data is lost on shutdown");
            Ok(Arc::new(MemoryUserRepository::new()))
        }
    }
}

/// Runs the HTTP server with the given configuration.
///
/// # Errors
///
/// Returns an error if:
/// - The storage backend cannot be initialized
/// - The listen address is invalid or bind fails
/// - A server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let repository = build_repository(&config).await?;
    let state = AppState::new(repository);

    let app = app_router(state);

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid listen address '{}'", config.listen_addr))?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to install Ctrl+C handler");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
