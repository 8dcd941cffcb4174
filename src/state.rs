//! Shared application state passed to every handler.

use std::sync::Arc;

use crate::application::services::{AuthService, LinkService};
use crate::infrastructure::persistence::RedbLinkRepository;

/// State shared across all request handlers.
///
/// Cloning is cheap: services sit behind [`Arc`] and only the base URL is
/// copied by value.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService<RedbLinkRepository>>,
    pub auth_service: Arc<AuthService>,
    /// Public base URL short links are composed against.
    pub base_url: String,
}

impl AppState {
    /// Creates the shared state from constructed services.
    pub fn new(
        link_service: Arc<LinkService<RedbLinkRepository>>,
        auth_service: Arc<AuthService>,
        base_url: String,
    ) -> Self {
        Self {
            link_service,
            auth_service,
            base_url,
        }
    }
}
