//! HTTP server initialization and runtime setup.
//!
//! Handles database setup, service wiring, and Axum server lifecycle.

use crate::application::services::{AuthService, LinkService};
use crate::config::Config;
use crate::infrastructure::persistence::{RedbLinkRepository, open_database};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - Embedded redb database (file created on first start)
/// - Link and auth services
/// - Axum HTTP server with graceful shutdown
///
/// # Errors
///
/// Returns an error if:
/// - The database cannot be opened
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let db = Arc::new(open_database(&config.database_path)?);
    tracing::info!("Opened database at {}", config.database_path.display());

    let link_repository = Arc::new(RedbLinkRepository::new(db));
    let link_service = Arc::new(LinkService::new(link_repository));
    let auth_service = Arc::new(AuthService::new(config.secret.clone()));

    let state = AppState::new(link_service, auth_service, config.base_url.clone());

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Completes when the process receives Ctrl-C.
async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install Ctrl-C handler");

    tracing::info!("Shutdown signal received, draining connections");
}
