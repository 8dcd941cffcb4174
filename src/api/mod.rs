//! HTTP layer for request/response handling.
//!
//! This layer translates HTTP requests into domain operations and formats
//! responses according to the public contract.
//!
//! # Modules
//!
//! - [`dto`] - Data Transfer Objects for request/response serialization
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Request processing middleware

pub mod dto;
pub mod handlers;
pub mod middleware;
