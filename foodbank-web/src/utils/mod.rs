//! Utilities
//!
//! - [`logger`] - tracing subscriber setup
//! - error types re-exported from `shared::error`

pub mod logger;

pub use shared::error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
