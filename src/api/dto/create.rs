//! DTOs for the link creation endpoint.

use serde::Deserialize;

/// Form payload for creating a short link.
///
/// Missing fields deserialize to empty strings so they flow through the
/// same secret and URL checks as present-but-wrong values.
#[derive(Debug, Deserialize)]
pub struct CreateLinkForm {
    /// Target URL to shorten (must be an absolute HTTP/HTTPS URL).
    #[serde(default)]
    pub url: String,

    /// Shared creation secret.
    #[serde(default)]
    pub secret: String,
}
