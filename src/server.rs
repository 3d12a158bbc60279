//! HTTP server initialization and runtime setup.
//!
//! Handles catalog loading, state wiring and the Axum server lifecycle.

use crate::config::Config;
use crate::infrastructure::load_catalog;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - Catalog (file from `CATALOG_PATH` or the reference tables)
/// - Application services
/// - Axum HTTP server with graceful shutdown on Ctrl+C
///
/// # Errors
///
/// Returns an error if:
/// - The catalog file cannot be loaded
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let catalog =
        load_catalog(config.catalog_path.as_deref()).context("Failed to load catalog")?;
    tracing::info!(
        shapes = catalog.shapes.len(),
        criteria = catalog.criteria.len(),
        platforms = catalog.platforms.len(),
        "Catalog ready"
    );

    let state = AppState::new(catalog);
    let app = app_router(state, &config.static_dir);

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid listen address: {}", config.listen_addr))?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
