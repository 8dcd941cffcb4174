//! Infrastructure layer for external integrations.
//!
//! This layer implements interfaces defined by the domain layer, providing
//! the concrete persistence backend.
//!
//! # Modules
//!
//! - [`persistence`] - redb repository implementations

pub mod persistence;
