//! View models rendered by the food bank pages
//!
//! Every view carries an optional `error` so a failed backend call still
//! renders a page instead of an error envelope. `code` classifies the
//! failure (food item missing, permission denied, unreachable, ...).

use serde::Serialize;
use shared::error::{AppError, ErrorCode};
use shared::{FilterCriteria, FoodItem, FoodItemForm};

/// Index page: filtered listing
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodItemListView {
    pub items: Vec<FoodItem>,
    /// Criteria echoed back so the filter form can be re-filled
    pub criteria: FilterCriteria,
    /// Items before filtering
    pub total: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<ErrorCode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Raw listing body, for debugging the API contract
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RawJsonView {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<ErrorCode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Details and delete-confirmation pages
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodItemDetailView {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item: Option<FoodItem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<ErrorCode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl FoodItemDetailView {
    pub fn found(item: FoodItem) -> Self {
        Self {
            item: Some(item),
            code: None,
            error: None,
        }
    }

    pub fn missing(code: ErrorCode, error: String) -> Self {
        Self {
            item: None,
            code: Some(code),
            error: Some(error),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FormMode {
    Create,
    Edit,
}

/// One failed form field
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl From<&AppError> for FieldError {
    fn from(err: &AppError) -> Self {
        Self {
            field: err.field_name().unwrap_or_default().to_string(),
            message: err.message.clone(),
        }
    }
}

/// Create and edit pages
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodItemFormView {
    pub mode: FormMode,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i32>,
    pub form: FoodItemForm,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<FieldError>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<ErrorCode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl FoodItemFormView {
    pub fn create(form: FoodItemForm) -> Self {
        Self {
            mode: FormMode::Create,
            id: None,
            form,
            errors: Vec::new(),
            code: None,
            error: None,
        }
    }

    pub fn edit(id: i32, form: FoodItemForm) -> Self {
        Self {
            mode: FormMode::Edit,
            id: Some(id),
            form,
            errors: Vec::new(),
            code: None,
            error: None,
        }
    }

    pub fn with_errors(mut self, errors: &[AppError]) -> Self {
        self.errors = errors.iter().map(FieldError::from).collect();
        self
    }

    /// Backend failure shown above the form
    pub fn with_error(mut self, code: ErrorCode, error: String) -> Self {
        self.code = Some(code);
        self.error = Some(error);
        self
    }
}
