//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{StatusCode, header},
    response::IntoResponse,
};

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a slug to its stored target URL.
///
/// # Endpoint
///
/// `GET /{slug}`
///
/// # Response Codes
///
/// - **301 Moved Permanently**: Link found, `Location` carries the target
/// - **404 Not Found**: No link stored under this slug
///
/// Links never change once created, so the redirect is permanent and
/// clients may cache it indefinitely. The response tuple is built by hand
/// because [`axum::response::Redirect::permanent`] answers 308.
///
/// # Errors
///
/// Returns 404 Not Found if the slug does not resolve. Store failures on
/// this path are logged by the service and surface as 404 as well.
pub async fn redirect_handler(
    Path(slug): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let target = state.link_service.resolve_slug(&slug).await?;

    Ok((StatusCode::MOVED_PERMANENTLY, [(header::LOCATION, target)]))
}
