//! Shared types for the food bank front-end
//!
//! Types used by both the REST client and the web server: the item record,
//! the browser form model, filter criteria with the filter routine, and the
//! unified error/response structures.

pub mod error;
pub mod filter;
pub mod models;
pub mod serde_helpers;
pub mod validation;

// Re-exports
pub use axum::Json;
pub use http;
pub use serde::{Deserialize, Serialize};

pub use filter::{FilterCriteria, filter, filter_optional};
pub use models::{FoodItem, FoodItemForm, FoodItemFormInput};
