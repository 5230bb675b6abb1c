//! Error types for web handlers.
//!
//! [`AppError`] is the single point where failures become HTTP responses.
//! Every error the surface produces, including caught panics, is rendered
//! as the same JSON envelope:
//!
//! ```json
//! {
//!   "statusCode": 400,
//!   "code": "TITLE_EMPTY",
//!   "message": "Title cannot be empty or only whitespace",
//!   "details": "Invalid argument provided",
//!   "timestamp": "2025-01-01T00:00:00Z"
//! }
//! ```

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use todo_core::ValidationError;

/// Message sent for every 500; the real cause only goes to the log.
pub const INTERNAL_ERROR_MESSAGE: &str = "An unexpected error occurred";

/// Details sent for every 500.
pub const INTERNAL_ERROR_DETAILS: &str = "Please try again later";

/// Application error type for web handlers.
///
/// Implements Axum's `IntoResponse` trait to convert errors into the JSON
/// envelope. Server errors log their hidden source before responding.
///
/// # Examples
///
/// ```ignore
/// async fn handler(Path(id): Path<String>) -> Result<Json<TodoItem>, AppError> {
///     let item = find(id).await.ok_or_else(|| AppError::not_found("Todo", &id))?;
///     Ok(Json(item))
/// }
/// ```
#[derive(Debug)]
pub struct AppError {
    /// HTTP status code
    status: StatusCode,
    /// Error code (for client error handling)
    code: String,
    /// Error message (user-facing)
    message: String,
    /// Extra context (user-facing)
    details: String,
    /// Internal error (for logging, not exposed to client)
    source: Option<anyhow::Error>,
}

impl AppError {
    /// Create a new application error.
    #[must_use]
    pub fn new(
        status: StatusCode,
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            status,
            code: code.into(),
            message: message.into(),
            details: details.into(),
            source: None,
        }
    }

    /// Attach the underlying cause. It is logged, never sent.
    #[must_use]
    pub fn with_source(mut self, source: anyhow::Error) -> Self {
        self.source = Some(source);
        self
    }

    /// Create a 400 Bad Request error for a failed input rule.
    #[must_use]
    pub fn bad_request(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(
            StatusCode::BAD_REQUEST,
            code,
            message,
            "Invalid argument provided",
        )
    }

    /// Create a 400 for a title that failed the item rules.
    #[must_use]
    pub fn validation(error: &ValidationError) -> Self {
        Self::bad_request(error.code(), error.to_string())
    }

    /// Create a 404 Not Found error.
    #[must_use]
    pub fn not_found(resource: impl fmt::Display, id: impl fmt::Display) -> Self {
        Self::new(
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            "Resource not found",
            format!("{resource} with id {id} not found"),
        )
    }

    /// Create a 500 Internal Server Error.
    ///
    /// `context` is logged; the response carries only the generic message.
    #[must_use]
    pub fn internal(context: impl Into<String>) -> Self {
        Self::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            "INTERNAL_SERVER_ERROR",
            INTERNAL_ERROR_MESSAGE,
            INTERNAL_ERROR_DETAILS,
        )
        .with_source(anyhow::anyhow!(context.into()))
    }

    /// HTTP status this error maps to.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        self.status
    }

    /// Machine-readable error code.
    #[must_use]
    pub fn code(&self) -> &str {
        &self.code
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn std::error::Error + 'static))
    }
}

/// Error response body (JSON).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    /// Numeric HTTP status.
    pub status_code: u16,
    /// Error code (for client error handling).
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Additional human-readable context.
    pub details: String,
    /// When the error was produced.
    pub timestamp: DateTime<Utc>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            if let Some(source) = &self.source {
                tracing::error!(
                    status = %self.status,
                    code = %self.code,
                    error = %source,
                    "Internal server error"
                );
            } else {
                tracing::error!(
                    status = %self.status,
                    code = %self.code,
                    "Internal server error"
                );
            }
        }

        let body = ErrorResponse {
            status_code: self.status.as_u16(),
            code: self.code,
            message: self.message,
            details: self.details,
            timestamp: Utc::now(),
        };

        (self.status, Json(body)).into_response()
    }
}

/// Titles rejected by the store become 400s.
impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        Self::validation(&err)
    }
}

/// Malformed or non-JSON bodies become 400s carrying the parser's message.
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        Self::bad_request("INVALID_REQUEST_BODY", rejection.body_text())
    }
}

/// Convert `anyhow::Error` to `AppError`.
impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        Self::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            "INTERNAL_SERVER_ERROR",
            INTERNAL_ERROR_MESSAGE,
            INTERNAL_ERROR_DETAILS,
        )
        .with_source(err)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn envelope(err: AppError) -> (StatusCode, ErrorResponse) {
        let response = err.into_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[test]
    fn test_error_display() {
        let err = AppError::bad_request("TITLE_REQUIRED", "Title is required");
        assert_eq!(err.to_string(), "[TITLE_REQUIRED] Title is required");
    }

    #[test]
    fn test_validation_maps_to_bad_request() {
        let err = AppError::from(ValidationError::EmptyTitle);
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.code(), "TITLE_EMPTY");
    }

    #[tokio::test]
    async fn test_not_found_envelope() {
        let (status, body) = envelope(AppError::not_found("Todo", "123")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body.status_code, 404);
        assert_eq!(body.details, "Todo with id 123 not found");
    }

    #[tokio::test]
    async fn test_internal_error_hides_source() {
        let err = AppError::from(anyhow::anyhow!("connection string leaked: secret"));
        let (status, body) = envelope(err).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.status_code, 500);
        assert_eq!(body.message, INTERNAL_ERROR_MESSAGE);
        assert_eq!(body.details, INTERNAL_ERROR_DETAILS);
        assert!(!body.message.contains("secret"));
        assert!(!body.details.contains("secret"));
    }
}
