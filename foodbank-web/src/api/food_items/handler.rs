//! Food bank page handlers
//!
//! Backend failures are rendered, not raised: the view carries an `error`
//! message, or the redirect carries it in the query string.

use axum::{
    Form, Json,
    extract::{Path, Query, State, rejection::FormRejection, rejection::QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use shared::{FilterCriteria, FoodItemForm, FoodItemFormInput, filter_optional};

use super::views::{FoodItemDetailView, FoodItemFormView, FoodItemListView, RawJsonView};
use crate::core::ServerState;
use crate::utils::{AppError, AppResult, ErrorCode};

/// Where successful writes land
pub const INDEX_PATH: &str = "/foodbank";

/// Malformed query string or form body
fn rejected(code: ErrorCode, body: String) -> AppError {
    AppError::with_message(code, body)
}

/// GET /foodbank - list, filtered by query criteria
pub async fn index(
    State(state): State<ServerState>,
    criteria: Result<Query<FilterCriteria>, QueryRejection>,
) -> AppResult<Json<FoodItemListView>> {
    let Query(criteria) =
        criteria.map_err(|e| rejected(ErrorCode::InvalidRequest, e.body_text()))?;

    let (items, code, error) = match state.gateway().list().await {
        Ok(items) => (Some(items), None, None),
        Err(e) => {
            tracing::error!(error = %e, "Failed to load food items");
            (None, Some(e.code()), Some(format!("Error loading food items: {}", e)))
        }
    };
    let total = items.as_ref().map_or(0, Vec::len);
    let items = filter_optional(items, &criteria);

    Ok(Json(FoodItemListView {
        items,
        criteria,
        total,
        code,
        error,
    }))
}

/// GET /foodbank/raw - listing body as received (debug only)
pub async fn raw(State(state): State<ServerState>) -> AppResult<Json<RawJsonView>> {
    if !state.config().debug_raw_json {
        return Err(AppError::not_found("Route /foodbank/raw"));
    }
    let view = match state.gateway().list_raw().await {
        Ok(raw) => RawJsonView {
            raw: Some(raw),
            code: None,
            error: None,
        },
        Err(e) => {
            tracing::error!(error = %e, "Failed to load raw food items");
            RawJsonView {
                raw: None,
                code: Some(e.code()),
                error: Some(format!("Error loading food items: {}", e)),
            }
        }
    };
    Ok(Json(view))
}

/// Load one item for a page, or render the 404 view
///
/// Any failure is a 404 page; the view's `code` tells a missing item from
/// a denied or unreachable backend.
async fn load_item(state: &ServerState, id: i32) -> Result<shared::FoodItem, Response> {
    state.gateway().get(id).await.map_err(|e| {
        tracing::warn!(id, code = %e.code(), error = %e, "Failed to load food item");
        let view = FoodItemDetailView::missing(
            e.code(),
            format!("Error loading the food item: {}", e),
        );
        (StatusCode::NOT_FOUND, Json(view)).into_response()
    })
}

/// GET /foodbank/{id} - details
pub async fn details(State(state): State<ServerState>, Path(id): Path<i32>) -> Response {
    match load_item(&state, id).await {
        Ok(item) => Json(FoodItemDetailView::found(item)).into_response(),
        Err(not_found) => not_found,
    }
}

/// GET /foodbank/create - blank form
pub async fn create_form() -> Json<FoodItemFormView> {
    Json(FoodItemFormView::create(FoodItemForm::blank()))
}

/// POST /foodbank/create - validate, stamp and send to the inventory API
pub async fn create(
    State(state): State<ServerState>,
    input: Result<Form<FoodItemFormInput>, FormRejection>,
) -> AppResult<Response> {
    let Form(input) = input.map_err(|e| rejected(ErrorCode::InvalidFormat, e.body_text()))?;

    let (form, errors) = input.bind();
    if !errors.is_empty() {
        tracing::debug!(count = errors.len(), "Create form rejected");
        return Ok(Json(FoodItemFormView::create(form).with_errors(&errors)).into_response());
    }

    let payload = form.clone().into_create_payload(chrono::Local::now().naive_local());
    match state.gateway().create(&payload).await {
        Ok(()) => Ok(Redirect::to(INDEX_PATH).into_response()),
        Err(e) => {
            tracing::error!(error = %e, "Failed to create food item");
            let view = FoodItemFormView::create(form)
                .with_error(e.code(), format!("Error creating the food item: {}", e));
            Ok(Json(view).into_response())
        }
    }
}

/// GET /foodbank/{id}/edit - form pre-filled from the current item
pub async fn edit_form(State(state): State<ServerState>, Path(id): Path<i32>) -> Response {
    match load_item(&state, id).await {
        Ok(item) => Json(FoodItemFormView::edit(id, FoodItemForm::from(&item))).into_response(),
        Err(not_found) => not_found,
    }
}

/// POST /foodbank/{id}/edit - validate and send to the inventory API
pub async fn edit(
    State(state): State<ServerState>,
    Path(id): Path<i32>,
    input: Result<Form<FoodItemFormInput>, FormRejection>,
) -> AppResult<Response> {
    let Form(input) = input.map_err(|e| rejected(ErrorCode::InvalidFormat, e.body_text()))?;

    let (form, errors) = input.bind();
    if !errors.is_empty() {
        tracing::debug!(id, count = errors.len(), "Edit form rejected");
        return Ok(Json(FoodItemFormView::edit(id, form).with_errors(&errors)).into_response());
    }

    let payload = form.clone().into_update_payload(id);
    match state.gateway().update(id, &payload).await {
        Ok(()) => Ok(Redirect::to(INDEX_PATH).into_response()),
        Err(e) => {
            tracing::error!(id, error = %e, "Failed to update food item");
            let view = FoodItemFormView::edit(id, form)
                .with_error(e.code(), format!("Error updating the food item: {}", e));
            Ok(Json(view).into_response())
        }
    }
}

/// Message left by a failed delete
#[derive(Debug, Deserialize)]
pub struct DeleteNotice {
    pub error: Option<String>,
}

/// GET /foodbank/{id}/delete - confirmation page
pub async fn delete_confirm(
    State(state): State<ServerState>,
    Path(id): Path<i32>,
    Query(notice): Query<DeleteNotice>,
) -> Response {
    match load_item(&state, id).await {
        Ok(item) => {
            let view = FoodItemDetailView {
                item: Some(item),
                code: None,
                error: notice.error.filter(|e| !e.is_empty()),
            };
            Json(view).into_response()
        }
        Err(not_found) => not_found,
    }
}

/// POST /foodbank/{id}/delete - delete, then back to the index
pub async fn delete(State(state): State<ServerState>, Path(id): Path<i32>) -> Redirect {
    match state.gateway().delete(id).await {
        Ok(()) => Redirect::to(INDEX_PATH),
        Err(e) => {
            tracing::error!(id, error = %e, "Failed to delete food item");
            let message = format!("Error deleting the food item: {}", e);
            Redirect::to(&format!(
                "{}/{}/delete?error={}",
                INDEX_PATH,
                id,
                urlencoding::encode(&message)
            ))
        }
    }
}
