//! Error types and API response structures

use super::codes::ErrorCode;
use http::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use thiserror::Error;

/// Application error with structured error code and details
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct AppError {
    /// The error code identifying the type of error
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details (field-level errors, context, etc.)
    pub details: Option<HashMap<String, Value>>,
}

impl AppError {
    /// Create a new error with the default message for the error code
    pub fn new(code: ErrorCode) -> Self {
        Self {
            message: code.message().to_string(),
            code,
            details: None,
        }
    }

    /// Create a new error with a custom message
    pub fn with_message(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: None,
        }
    }

    /// Add a detail entry to this error
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.details
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value.into());
        self
    }

    pub fn http_status(&self) -> StatusCode {
        self.code.http_status()
    }

    // ==================== Convenience constructors ====================

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::ValidationFailed, msg)
    }

    /// Validation error tied to a single form field
    pub fn field(field: &str, msg: impl Into<String>) -> Self {
        Self::validation(msg).with_detail("field", field)
    }

    pub fn not_found(resource: impl Into<String>) -> Self {
        let r = resource.into();
        Self::with_message(ErrorCode::NotFound, format!("{} not found", r))
            .with_detail("resource", r)
    }

    pub fn not_authenticated() -> Self {
        Self::new(ErrorCode::NotAuthenticated)
    }

    /// Form field this error is tied to, if any
    pub fn field_name(&self) -> Option<&str> {
        self.details.as_ref()?.get("field")?.as_str()
    }
}

/// Error envelope returned by the JSON error paths
///
/// - `code`: Error code
/// - `message`: Human-readable message
/// - `details`: Additional error details (field, resource, ...)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse {
    pub code: u16,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<HashMap<String, Value>>,
}

impl ApiResponse {
    /// Create an error response from an AppError
    pub fn error(err: &AppError) -> Self {
        Self {
            code: err.code.code(),
            message: err.message.clone(),
            details: err.details.clone(),
        }
    }
}

/// Type alias for Result with AppError
pub type AppResult<T> = Result<T, AppError>;

// ===== Axum Integration =====

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        use axum::Json;

        let status = self.http_status();
        let body = ApiResponse::error(&self);

        if matches!(self.code.category(), super::category::ErrorCategory::System) {
            tracing::error!(
                code = %self.code,
                message = %self.message,
                "System error occurred"
            );
        }

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::response::IntoResponse;

    #[test]
    fn test_app_error_new_uses_default_message() {
        let err = AppError::new(ErrorCode::NotAuthenticated);
        assert_eq!(err.code, ErrorCode::NotAuthenticated);
        assert_eq!(err.message, "Login required");
        assert!(err.details.is_none());
    }

    #[test]
    fn test_field_error_carries_field_detail() {
        let err = AppError::field("name", "Name is required");
        assert_eq!(err.code, ErrorCode::ValidationFailed);
        assert_eq!(err.to_string(), "Name is required");
        let details = err.details.unwrap();
        assert_eq!(details.get("field").unwrap(), "name");
    }

    #[test]
    fn test_field_name() {
        assert_eq!(AppError::field("price", "bad").field_name(), Some("price"));
        assert_eq!(AppError::not_found("Route /x").field_name(), None);
    }

    #[test]
    fn test_api_response_error_envelope() {
        let err = AppError::not_found("Route /nope");
        let response = ApiResponse::error(&err);
        assert_eq!(response.code, 3);
        assert_eq!(response.message, "Route /nope not found");

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["code"], 3);
        assert_eq!(json["details"]["resource"], "Route /nope");
    }

    #[test]
    fn test_into_response_status() {
        let response = AppError::not_authenticated().into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        let response =
            AppError::with_message(ErrorCode::UpstreamError, "bad gateway").into_response();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    }
}
