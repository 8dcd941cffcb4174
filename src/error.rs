//! Application error type and its HTTP mapping.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};
use std::fmt;

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

#[derive(Serialize)]
struct ErrorInfo {
    code: &'static str,
    message: String,
    details: Value,
}

/// Application-level error classes.
///
/// Each variant maps to one HTTP status:
///
/// - [`Unauthorized`](Self::Unauthorized) → 403 (secret mismatch)
/// - [`Validation`](Self::Validation) → 400 (rejected input)
/// - [`NotFound`](Self::NotFound) → 404 (unknown slug)
/// - [`Internal`](Self::Internal) → 500 (storage failure)
#[derive(Debug)]
pub enum AppError {
    Unauthorized { message: String, details: Value },
    Validation { message: String, details: Value },
    NotFound { message: String, details: Value },
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn unauthorized(message: impl Into<String>, details: Value) -> Self {
        Self::Unauthorized {
            message: message.into(),
            details,
        }
    }
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }
    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }
    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            Self::Unauthorized { message, .. }
            | Self::Validation { message, .. }
            | Self::NotFound { message, .. }
            | Self::Internal { message, .. } => message,
        };
        write!(f, "{}", message)
    }
}

impl std::error::Error for AppError {}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message, details) = match self {
            AppError::Unauthorized { message, details } => {
                (StatusCode::FORBIDDEN, "unauthorized", message, details)
            }
            AppError::Validation { message, details } => (
                StatusCode::BAD_REQUEST,
                "validation_error",
                message,
                details,
            ),
            AppError::NotFound { message, details } => {
                (StatusCode::NOT_FOUND, "not_found", message, details)
            }
            AppError::Internal { message, details } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal_error",
                message,
                details,
            ),
        };

        let body = ErrorBody {
            error: ErrorInfo {
                code,
                message,
                details,
            },
        };

        (status, Json(body)).into_response()
    }
}

/// Maps a storage-layer error to an opaque internal error.
///
/// The underlying error is logged here, once, at the point of failure; the
/// HTTP body carries only the generic message so store internals never reach
/// callers.
pub fn map_storage_error<E: std::error::Error>(e: E) -> AppError {
    tracing::error!("Storage error: {}", e);
    AppError::internal("Storage error", json!({}))
}
