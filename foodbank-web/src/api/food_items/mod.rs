//! Food bank pages
//!
//! | Path | Method | Page |
//! |------|--------|------|
//! | /foodbank | GET | filtered listing |
//! | /foodbank/raw | GET | raw listing body (debug flag) |
//! | /foodbank/{id} | GET | details |
//! | /foodbank/create | GET, POST | create form |
//! | /foodbank/{id}/edit | GET, POST | edit form |
//! | /foodbank/{id}/delete | GET, POST | delete confirmation |
//!
//! All routes sit behind [`require_login`](crate::auth::require_login).

mod handler;
pub mod views;

use axum::{Router, middleware, routing::get};

use crate::auth::require_login;
use crate::core::ServerState;

pub use handler::INDEX_PATH;

pub fn router(state: ServerState) -> Router<ServerState> {
    Router::new()
        .route("/foodbank", get(handler::index))
        .route("/foodbank/raw", get(handler::raw))
        .route(
            "/foodbank/create",
            get(handler::create_form).post(handler::create),
        )
        .route("/foodbank/{id}", get(handler::details))
        .route(
            "/foodbank/{id}/edit",
            get(handler::edit_form).post(handler::edit),
        )
        .route(
            "/foodbank/{id}/delete",
            get(handler::delete_confirm).post(handler::delete),
        )
        .route_layer(middleware::from_fn_with_state(state, require_login))
}
