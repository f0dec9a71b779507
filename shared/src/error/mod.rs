//! Unified error system
//!
//! - [`ErrorCode`]: Standardized error codes
//! - [`ErrorCategory`]: Classification of errors by code range
//! - [`AppError`]: Rich error type with codes, messages, and details
//! - [`ApiResponse`]: JSON error envelope
//!
//! # Error Code Ranges
//!
//! - 0xxx: General errors
//! - 1xxx: Authentication errors
//! - 6xxx: Food item errors
//! - 9xxx: System errors
//!
//! # Example
//!
//! ```
//! use shared::error::{AppError, ErrorCode, ApiResponse};
//!
//! let err = AppError::field("price", "price must not be negative");
//! assert_eq!(err.code, ErrorCode::ValidationFailed);
//! assert_eq!(err.field_name(), Some("price"));
//!
//! let response = ApiResponse::error(&err);
//! assert_eq!(response.code, 2);
//! ```

mod category;
mod codes;
mod http;
mod types;

pub use category::ErrorCategory;
pub use codes::{ErrorCode, InvalidErrorCode};
pub use types::{ApiResponse, AppError, AppResult};
