//! API routes
//!
//! - [`health`] - liveness probe
//! - [`food_items`] - food bank pages

pub mod food_items;
pub mod health;

use axum::{Router, http::Uri, middleware};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};

use crate::core::ServerState;
use crate::middleware::logging_middleware;
use crate::utils::AppError;

/// Unknown routes answer with the error envelope
async fn not_found(uri: Uri) -> AppError {
    AppError::not_found(format!("Route {}", uri.path()))
}

/// Build the full application router
pub fn build_app(state: ServerState) -> Router {
    Router::<ServerState>::new()
        .merge(health::router())
        .merge(food_items::router(state.clone()))
        .fallback(not_found)
        .with_state(state)
        .layer(middleware::from_fn(logging_middleware))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
}
