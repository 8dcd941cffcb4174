//! Handler for the link creation form.

use axum::{Form, extract::State, http::StatusCode};
use tracing::info;

use crate::api::dto::create::CreateLinkForm;
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short link from the posted form.
///
/// # Endpoint
///
/// `POST /`
///
/// # Request Flow
///
/// 1. Verify the shared secret (constant-time comparison)
/// 2. Validate and canonicalize the target URL
/// 3. Allocate a free slug and persist the link in one transaction
///
/// # Response Codes
///
/// - **201 Created**: Body is the short URL followed by a newline
/// - **403 Forbidden**: Secret mismatch; nothing was generated or stored
/// - **400 Bad Request**: Target is not an absolute HTTP/HTTPS URL
/// - **500 Internal Server Error**: Store write failed or no free slug
///   was found
pub async fn create_handler(
    State(state): State<AppState>,
    Form(form): Form<CreateLinkForm>,
) -> Result<(StatusCode, String), AppError> {
    state.auth_service.verify(&form.secret)?;

    let link = state.link_service.create_link(&form.url).await?;

    let short_url = state.link_service.short_url(&state.base_url, &link.slug);

    info!("Created {} -> {}", link.slug, link.target);

    Ok((StatusCode::CREATED, format!("{short_url}\n")))
}
