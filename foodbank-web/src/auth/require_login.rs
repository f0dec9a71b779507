//! Login gate middleware

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use http::HeaderMap;
use http::header::{ACCEPT, AUTHORIZATION, COOKIE};

use crate::core::ServerState;
use crate::security_log;
use crate::utils::AppError;

/// Whether the request carries a non-empty cookie named `name`
pub fn has_session_cookie(headers: &HeaderMap, name: &str) -> bool {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|v| v.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .any(|(k, v)| k.trim() == name && !v.trim().is_empty())
}

/// Whether the request carries `Authorization: Bearer <token>`
pub fn has_bearer_token(headers: &HeaderMap) -> bool {
    headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .is_some_and(|token| !token.trim().is_empty())
}

fn wants_json(headers: &HeaderMap) -> bool {
    headers
        .get(ACCEPT)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.contains("application/json"))
}

/// Login gate - requires a session cookie or a bearer token
///
/// | Request | Outcome |
/// |---------|---------|
/// | session cookie or bearer token | passed through |
/// | `Accept: application/json` | 401 `NotAuthenticated` envelope |
/// | anything else | 303 to the login path with `returnUrl` |
pub async fn require_login(
    State(state): State<ServerState>,
    req: Request,
    next: Next,
) -> Response {
    let config = state.config();
    let headers = req.headers();

    if has_session_cookie(headers, &config.session_cookie) || has_bearer_token(headers) {
        return next.run(req).await;
    }

    let original = req
        .uri()
        .path_and_query()
        .map(|p| p.as_str())
        .unwrap_or("/");

    security_log!("WARN", "login_required", uri = original.to_string());

    if wants_json(headers) {
        return AppError::not_authenticated().into_response();
    }

    let location = format!(
        "{}?returnUrl={}",
        config.login_path,
        urlencoding::encode(original)
    );
    Redirect::to(&location).into_response()
}
