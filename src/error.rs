//! Service error types with HTTP status code mapping.
//!
//! [`NavError`] is the central error type for the service. Each variant
//! maps to a specific HTTP status code and structured JSON error response.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::editor::EditorError;
use crate::domain::pagination::PaginationError;
use crate::domain::templates::TemplateError;

/// Structured JSON error response body.
///
/// All error responses follow this shape:
/// ```json
/// {
///   "error": {
///     "code": 1001,
///     "message": "invalid argument: total pages must be at least 1, got 0"
///   }
/// }
/// ```
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Structured error payload.
    pub error: ErrorBody,
}

/// Inner error body with numeric code and human-readable message.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    /// Numeric error code.
    pub code: u32,
    /// Human-readable error message.
    pub message: String,
    /// Optional additional details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// Service-wide error enum with HTTP status code mapping.
///
/// # Error Code Ranges
///
/// | Range     | Category   | HTTP Status               |
/// |-----------|------------|---------------------------|
/// | 1000–1999 | Validation | 400 Bad Request           |
/// | 2000–2999 | Not Found  | 404 Not Found             |
/// | 3000–3999 | Server     | 500 Internal Server Error |
#[derive(Debug, thiserror::Error)]
pub enum NavError {
    /// Pagination input was rejected.
    #[error(transparent)]
    Pagination(#[from] PaginationError),

    /// Request validation failed.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// Template lookup failed: no matching file, or a path outside the theme.
    #[error(transparent)]
    Template(#[from] TemplateError),

    /// Editor settings could not be produced.
    #[error(transparent)]
    Editor(#[from] EditorError),
}

impl NavError {
    /// Returns the numeric error code for this variant.
    #[must_use]
    pub const fn error_code(&self) -> u32 {
        match self {
            Self::Pagination(_) => 1001,
            Self::InvalidRequest(_) => 1002,
            Self::Template(TemplateError::OutsideTheme(_)) => 1003,
            Self::Template(TemplateError::NotFound(_)) => 2001,
            Self::Editor(_) => 3001,
        }
    }

    /// Returns the HTTP status code for this variant.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::Pagination(_)
            | Self::InvalidRequest(_)
            | Self::Template(TemplateError::OutsideTheme(_)) => StatusCode::BAD_REQUEST,
            Self::Template(TemplateError::NotFound(_)) => StatusCode::NOT_FOUND,
            Self::Editor(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for NavError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(code = self.error_code(), error = %self, "request failed");
        } else {
            tracing::debug!(code = self.error_code(), error = %self, "request rejected");
        }
        let body = ErrorResponse {
            error: ErrorBody {
                code: self.error_code(),
                message: self.to_string(),
                details: None,
            },
        };
        let mut response = axum::Json(body).into_response();
        *response.status_mut() = status;
        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pagination_errors_are_bad_requests() {
        let err = NavError::from(PaginationError::InvalidArgument { total_pages: 0 });
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.error_code(), 1001);
        assert!(err.to_string().contains("at least 1"));
    }

    #[test]
    fn missing_template_is_not_found() {
        let err = NavError::from(TemplateError::NotFound("layout/header.php".to_string()));
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(err.error_code(), 2001);
    }

    #[test]
    fn escaping_template_path_is_bad_request() {
        let err = NavError::from(TemplateError::OutsideTheme("/etc/header.php".to_string()));
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.error_code(), 1003);
    }

    #[test]
    fn response_carries_status() {
        let response = NavError::InvalidRequest("bad".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
