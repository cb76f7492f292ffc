//! Custom extractors for request processing

pub mod validated_json;

pub use validated_json::ValidatedJson;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use std::fmt;

/// Custom error type for extractors
#[derive(Debug)]
pub struct ExtractorError {
    /// Error message
    pub message: String,
    /// HTTP status code
    pub status: StatusCode,
    /// Error code for API responses
    pub code: String,
    /// Additional context, such as per-field validation messages
    pub details: Option<serde_json::Value>,
}

impl ExtractorError {
    /// Create a new extractor error
    pub fn new(message: impl Into<String>, status: StatusCode, code: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status,
            code: code.into(),
            details: None,
        }
    }

    /// Create a bad request error
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(message, StatusCode::BAD_REQUEST, "BAD_REQUEST")
    }

    /// Create an unprocessable entity error with per-field details
    pub fn validation(message: impl Into<String>, details: serde_json::Value) -> Self {
        let mut error = Self::new(
            message,
            StatusCode::UNPROCESSABLE_ENTITY,
            "VALIDATION_ERROR",
        );
        error.details = Some(details);
        error
    }
}

impl fmt::Display for ExtractorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

impl std::error::Error for ExtractorError {}

/// Error response body for extractor failures
#[derive(Debug, Serialize)]
pub struct ExtractorErrorResponse {
    /// Error message
    pub error: String,
    /// Error code
    pub code: String,
    /// Additional context
    pub details: Option<serde_json::Value>,
}

impl IntoResponse for ExtractorError {
    fn into_response(self) -> Response {
        let response = ExtractorErrorResponse {
            error: self.message,
            code: self.code,
            details: self.details,
        };

        (self.status, Json(response)).into_response()
    }
}

#[cfg(test)]
#[allow(clippy::missing_panics_doc)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_bad_request_error() {
        let error = ExtractorError::bad_request("Invalid JSON");
        assert_eq!(error.status, StatusCode::BAD_REQUEST);
        assert_eq!(error.code, "BAD_REQUEST");
        assert!(error.details.is_none());
    }

    #[test]
    fn test_validation_error_carries_details() {
        let details = serde_json::json!({"title": "Title is required"});
        let error = ExtractorError::validation("Validation failed", details.clone());

        assert_eq!(error.status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(error.code, "VALIDATION_ERROR");
        assert_eq!(error.details, Some(details));
    }

    #[test]
    fn test_display_format() {
        let error = ExtractorError::bad_request("broken payload");
        assert_eq!(format!("{error}"), "BAD_REQUEST: broken payload");
    }
}
