//! Unified error codes for the food bank front-end
//!
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 1xxx: Authentication errors
//! - 6xxx: Food item errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// Represented as u16 values on the wire so browser scripts can switch on
/// them without string parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Invalid request
    InvalidRequest = 5,
    /// Invalid format
    InvalidFormat = 6,

    // ==================== 1xxx: Auth ====================
    /// No login session on the request
    NotAuthenticated = 1001,
    /// Authenticated but not allowed
    PermissionDenied = 1003,

    // ==================== 6xxx: Food item ====================
    /// Food item not found on the inventory API
    FoodItemNotFound = 6001,
    /// Inventory API rejected the submitted item
    FoodItemRejected = 6003,

    // ==================== 9xxx: System ====================
    NetworkError = 9003,
    TimeoutError = 9004,
    /// Inventory API answered with an unexpected status or body
    UpstreamError = 9006,
}

impl ErrorCode {
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::NotFound => "Resource not found",
            ErrorCode::InvalidRequest => "Invalid request",
            ErrorCode::InvalidFormat => "Invalid format",

            // Auth
            ErrorCode::NotAuthenticated => "Login required",
            ErrorCode::PermissionDenied => "Permission denied",

            // Food item
            ErrorCode::FoodItemNotFound => "Food item not found",
            ErrorCode::FoodItemRejected => "Food item was rejected by the inventory service",

            // System
            ErrorCode::NetworkError => "Inventory service is unreachable",
            ErrorCode::TimeoutError => "Operation timed out",
            ErrorCode::UpstreamError => "Inventory service returned an unexpected response",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error when converting from an invalid u16 to ErrorCode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            2 => Ok(ErrorCode::ValidationFailed),
            3 => Ok(ErrorCode::NotFound),
            5 => Ok(ErrorCode::InvalidRequest),
            6 => Ok(ErrorCode::InvalidFormat),

            1001 => Ok(ErrorCode::NotAuthenticated),
            1003 => Ok(ErrorCode::PermissionDenied),

            6001 => Ok(ErrorCode::FoodItemNotFound),
            6003 => Ok(ErrorCode::FoodItemRejected),

            9003 => Ok(ErrorCode::NetworkError),
            9004 => Ok(ErrorCode::TimeoutError),
            9006 => Ok(ErrorCode::UpstreamError),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "E{:04}", self.code())
    }
}
