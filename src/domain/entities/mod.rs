//! Core domain entities representing the business data model.
//!
//! The data model is deliberately small: a short link is a slug paired with
//! its redirect target, and nothing else. There are no timestamps, counters,
//! or per-tenant fields.
//!
//! # Entity Types
//!
//! - [`ShortLink`] - A slug-to-target URL mapping

pub mod link;

pub use link::ShortLink;
