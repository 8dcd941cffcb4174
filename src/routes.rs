//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /`       - Landing page with usage instructions
//! - `POST /`       - Create a short link (form, secret required)
//! - `GET  /health` - Health check: store readability
//! - `GET  /{slug}` - Short link redirect (public)
//!
//! Static routes take precedence over the `{slug}` capture, so `/health`
//! is never treated as a slug.
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api::handlers::{create_handler, health_handler, index_handler, redirect_handler};
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let router = Router::new()
        .route("/", get(index_handler).post(create_handler))
        .route("/health", get(health_handler))
        .route("/{slug}", get(redirect_handler))
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
