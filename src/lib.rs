//! # Hamster
//!
//! A tiny self-hosted URL shortener built with Axum and redb.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Core business entities and repository traits
//! - **Application Layer** ([`application`]) - Business logic and service orchestration
//! - **Infrastructure Layer** ([`infrastructure`]) - Embedded database access
//! - **API Layer** ([`api`]) - HTTP handlers, DTOs, and middleware
//!
//! ## Features
//!
//! - Six-character slugs from an alphabet without look-alike characters
//! - Atomic slug allocation, safe under concurrent creates
//! - Shared-secret protected creation with constant-time comparison
//! - Permanent redirects served from an embedded store, no external database
//!
//! ## Quick Start
//!
//! ```bash
//! # Set required environment variables
//! export SECRET="change-me"
//!
//! # Start the service
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{AuthService, LinkService};
    pub use crate::domain::entities::ShortLink;
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
