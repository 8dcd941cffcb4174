//! Shared-secret verification for link creation.

use subtle::ConstantTimeEq;

use crate::error::AppError;
use serde_json::json;

/// Service verifying the shared creation secret.
///
/// The comparison runs in constant time over the byte slices, so response
/// timing reveals nothing about how much of a guessed secret matched.
pub struct AuthService {
    secret: String,
}

impl AuthService {
    /// Creates a new authentication service.
    ///
    /// # Arguments
    ///
    /// - `secret` - the configured shared secret; creation requests must
    ///   present it verbatim
    pub fn new(secret: String) -> Self {
        Self { secret }
    }

    /// Verifies a presented secret against the configured one.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] on any mismatch, including empty
    /// input. A failed verification has no side effects: no slug is
    /// generated and the store is never touched.
    pub fn verify(&self, presented: &str) -> Result<(), AppError> {
        let matches: bool = presented.as_bytes().ct_eq(self.secret.as_bytes()).into();

        if !matches {
            return Err(AppError::unauthorized(
                "Unauthorized",
                json!({ "reason": "Secret mismatch" }),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> AuthService {
        AuthService::new("correct-horse-battery-staple".to_string())
    }

    #[test]
    fn test_verify_accepts_configured_secret() {
        assert!(service().verify("correct-horse-battery-staple").is_ok());
    }

    #[test]
    fn test_verify_rejects_wrong_secret() {
        let result = service().verify("wrong-secret");

        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), AppError::Unauthorized { .. }));
    }

    #[test]
    fn test_verify_rejects_empty_secret() {
        let result = service().verify("");

        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), AppError::Unauthorized { .. }));
    }

    #[test]
    fn test_verify_rejects_prefix_of_secret() {
        let result = service().verify("correct-horse");

        assert!(result.is_err());
    }

    #[test]
    fn test_verify_rejects_secret_with_suffix() {
        let result = service().verify("correct-horse-battery-staple-x");

        assert!(result.is_err());
    }
}
