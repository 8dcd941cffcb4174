//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for deserializing the creation form and serializing
//! the health check response.

pub mod create;
pub mod health;
