//! HTTP middleware for request processing.
//!
//! Provides observability middleware for the router.

pub mod tracing;
