//! Input validation helpers
//!
//! Centralized text length limits and checks for posted forms.

use rust_decimal::Decimal;

use crate::error::AppError;

// ── Text length limits ──────────────────────────────────────────────

/// Item names
pub const MAX_NAME_LEN: usize = 200;

/// Everything else: descriptions, ingredient lists, suppliers, barcodes
pub const MAX_TEXT_LEN: usize = 500;

// ── Validation helpers ──────────────────────────────────────────────

/// Validate that a required string is non-blank and within the length limit.
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::field(field, format!("{field} must not be empty")));
    }
    let len = value.chars().count();
    if len > max_len {
        return Err(AppError::field(
            field,
            format!("{field} is too long ({len} chars, max {max_len})"),
        ));
    }
    Ok(())
}

/// Validate that a required value was supplied.
pub fn validate_present<T>(value: Option<&T>, field: &str) -> Result<(), AppError> {
    match value {
        Some(_) => Ok(()),
        None => Err(AppError::field(field, format!("{field} is required"))),
    }
}

/// Validate that a price is present and not negative.
pub fn validate_price(value: Option<Decimal>, field: &str) -> Result<(), AppError> {
    validate_present(value.as_ref(), field)?;
    match value {
        Some(price) if price.is_sign_negative() && !price.is_zero() => Err(AppError::field(
            field,
            format!("{field} must not be negative"),
        )),
        _ => Ok(()),
    }
}
