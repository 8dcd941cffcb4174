//! Utility functions for slug generation and URL validation.
//!
//! This module provides helper functions used across the application:
//!
//! - [`slug`] - Random slug generation and validation
//! - [`url_validator`] - Redirect target validation

pub mod slug;
pub mod url_validator;
