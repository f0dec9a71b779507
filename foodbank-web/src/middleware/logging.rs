//! Request logging middleware
//!
//! Each request runs inside a `request` span holding its id, method and
//! route, so handler logs carry them too. Completion is one line with the
//! status and latency.

use axum::{
    extract::{MatchedPath, Request},
    middleware::Next,
    response::Response,
};
use std::time::Instant;
use tracing::{Instrument, info, info_span, warn};

/// Header carrying the request id, set upstream by `SetRequestIdLayer`
pub const REQUEST_ID_HEADER: &str = "x-request-id";

fn request_id(req: &Request) -> String {
    req.headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
        .unwrap_or_else(|| uuid::Uuid::new_v4().to_string())
}

/// Route template when matched (`/foodbank/{id}`), raw path otherwise
fn route(req: &Request) -> String {
    req.extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_string())
        .unwrap_or_else(|| req.uri().path().to_string())
}

/// Request logging middleware; failed requests (4xx, 5xx) log at `warn`
pub async fn logging_middleware(req: Request, next: Next) -> Response {
    let span = info_span!(
        "request",
        request_id = %request_id(&req),
        method = %req.method(),
        route = %route(&req),
    );

    async move {
        let start = Instant::now();
        let response = next.run(req).await;
        let status = response.status().as_u16();
        let latency_ms = start.elapsed().as_millis() as u64;

        if response.status().is_client_error() || response.status().is_server_error() {
            warn!(status, latency_ms, "Request failed");
        } else {
            info!(status, latency_ms, "Request served");
        }
        response
    }
    .instrument(span)
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;

    #[test]
    fn test_request_id_prefers_header() {
        let req = http::Request::builder()
            .uri("/foodbank/3?x=1")
            .header(REQUEST_ID_HEADER, "abc-123")
            .body(Body::empty())
            .unwrap();
        assert_eq!(request_id(&req), "abc-123");
        assert_eq!(route(&req), "/foodbank/3");

        let bare = http::Request::builder().body(Body::empty()).unwrap();
        assert!(uuid::Uuid::parse_str(&request_id(&bare)).is_ok());
    }
}
