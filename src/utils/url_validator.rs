//! Target URL validation.
//!
//! Guards the write path: only absolute `http`/`https` URLs may become
//! redirect targets, which keeps `javascript:`, `data:`, `file:` and other
//! dangerous schemes out of the store entirely.

use url::Url;

/// Errors that can occur while validating a target URL.
#[derive(Debug, thiserror::Error)]
pub enum TargetUrlError {
    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("Only HTTP and HTTPS URLs are allowed")]
    UnsupportedScheme,
}

/// Validates a candidate redirect target and returns its canonical form.
///
/// # Rules
///
/// 1. The input must parse as an absolute URL
/// 2. The scheme must be `http` or `https`; the parser lower-cases schemes,
///    so `HTTP://` and `http://` are treated identically
/// 3. The stored form is the parser's serialization (lowercase host, default
///    ports dropped, path defaulted to `/`); query and fragment survive
///    untouched
///
/// # Errors
///
/// Returns [`TargetUrlError::InvalidFormat`] for unparsable or relative
/// input and [`TargetUrlError::UnsupportedScheme`] for any other scheme.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(
///     validate_target("HTTP://Example.COM/Path").unwrap(),
///     "http://example.com/Path"
/// );
/// assert!(validate_target("ftp://example.com").is_err());
/// ```
pub fn validate_target(input: &str) -> Result<String, TargetUrlError> {
    let url = Url::parse(input).map_err(|e| TargetUrlError::InvalidFormat(e.to_string()))?;

    match url.scheme() {
        "http" | "https" => {}
        _ => return Err(TargetUrlError::UnsupportedScheme),
    }

    Ok(url.to_string())
}
