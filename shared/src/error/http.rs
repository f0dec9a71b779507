//! HTTP status code mapping for error codes

use super::codes::ErrorCode;
use http::StatusCode;

impl ErrorCode {
    /// Get the appropriate HTTP status code for this error code
    pub fn http_status(&self) -> StatusCode {
        match self {
            Self::NotFound | Self::FoodItemNotFound => StatusCode::NOT_FOUND,

            Self::NotAuthenticated => StatusCode::UNAUTHORIZED,

            Self::PermissionDenied => StatusCode::FORBIDDEN,

            // Transient, the browser may retry
            Self::NetworkError | Self::TimeoutError => StatusCode::SERVICE_UNAVAILABLE,

            Self::UpstreamError => StatusCode::BAD_GATEWAY,

            // Validation and rejected input
            _ => StatusCode::BAD_REQUEST,
        }
    }
}
