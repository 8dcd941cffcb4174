//! Handler for the landing page.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::State;

use crate::state::AppState;

/// Landing page template with usage instructions.
#[derive(Template, WebTemplate)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    /// Base URL shown in the curl example, without a trailing slash.
    pub base_url: String,
}

/// Renders the landing page.
///
/// # Endpoint
///
/// `GET /`
pub async fn index_handler(State(state): State<AppState>) -> IndexTemplate {
    IndexTemplate {
        base_url: state.base_url.trim_end_matches('/').to_string(),
    }
}
