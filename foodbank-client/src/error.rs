//! Client error types

use reqwest::StatusCode;
use shared::error::ErrorCode;
use thiserror::Error;

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed (connection refused, TLS, DNS, ...)
    #[error("HTTP error: {0}")]
    Http(reqwest::Error),

    /// Request did not complete within the configured timeout
    #[error("Request timed out: {0}")]
    Timeout(String),

    /// Invalid response format
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Authentication required
    #[error("Authentication required")]
    Unauthorized,

    /// Permission denied
    #[error("Permission denied: {0}")]
    Forbidden(String),

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Request rejected by the API
    #[error("Validation error: {0}")]
    Validation(String),

    /// Any other non-success status
    #[error("Unexpected status {status}: {body}")]
    Status { status: StatusCode, body: String },

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ClientError::Timeout(err.to_string())
        } else {
            ClientError::Http(err)
        }
    }
}

impl ClientError {
    /// Map onto the unified error code space
    pub fn code(&self) -> ErrorCode {
        match self {
            ClientError::Http(_) => ErrorCode::NetworkError,
            ClientError::Timeout(_) => ErrorCode::TimeoutError,
            ClientError::Unauthorized => ErrorCode::NotAuthenticated,
            ClientError::Forbidden(_) => ErrorCode::PermissionDenied,
            ClientError::NotFound(_) => ErrorCode::FoodItemNotFound,
            ClientError::Validation(_) => ErrorCode::FoodItemRejected,
            ClientError::Status { .. } => ErrorCode::UpstreamError,
            ClientError::InvalidResponse(_) | ClientError::Serialization(_) => {
                ErrorCode::UpstreamError
            }
        }
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
