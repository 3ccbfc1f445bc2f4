//! Request logging middleware

use std::time::Instant;

use axum::{
    body::Body,
    extract::MatchedPath,
    http::{HeaderValue, Request},
    middleware::Next,
    response::Response,
};
use tracing::{info, warn};

/// Header carrying the request id, echoed back on the response
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Log every request and its outcome, tagging both with a request id.
///
/// Spans come from `TraceLayer`; this middleware only emits events. Bodies
/// and headers are never logged since registration and login bodies carry
/// keys and passwords.
pub async fn logging_middleware(request: Request<Body>, next: Next) -> Response {
    let start = Instant::now();
    let method = request.method().clone();
    let path = extract_path(&request);
    let request_id = extract_request_id(&request);

    info!(
        method = %method,
        path = %path,
        request_id = %request_id,
        "Incoming request"
    );

    let mut response = next.run(request).await;

    let duration_ms = start.elapsed().as_millis();
    let status = response.status();

    if status.is_server_error() {
        warn!(
            method = %method,
            path = %path,
            status = status.as_u16(),
            duration_ms = %duration_ms,
            request_id = %request_id,
            "Request failed"
        );
    } else {
        info!(
            method = %method,
            path = %path,
            status = status.as_u16(),
            duration_ms = %duration_ms,
            request_id = %request_id,
            "Request completed"
        );
    }

    if let Ok(value) = HeaderValue::from_str(&request_id) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }

    response
}

/// Route template when matched, so ids in the path do not fan out log keys
fn extract_path(request: &Request<Body>) -> String {
    request
        .extensions()
        .get::<MatchedPath>()
        .map(|mp| mp.as_str().to_string())
        .unwrap_or_else(|| request.uri().path().to_string())
}

/// Client-supplied request id, or a fresh one
fn extract_request_id(request: &Request<Body>) -> String {
    request
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .filter(|s| !s.is_empty())
        .map(|s| s.to_string())
        .unwrap_or_else(|| uuid::Uuid::new_v4().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request_with_header(value: Option<&str>) -> Request<Body> {
        let mut builder = Request::builder().uri("/users/7");

        if let Some(value) = value {
            builder = builder.header(REQUEST_ID_HEADER, value);
        }

        builder.body(Body::empty()).unwrap()
    }

    #[test]
    fn test_request_id_is_taken_from_header() {
        let request = request_with_header(Some("abc-123"));
        assert_eq!(extract_request_id(&request), "abc-123");
    }

    #[test]
    fn test_request_id_is_generated_when_absent() {
        let generated = extract_request_id(&request_with_header(None));
        assert!(uuid::Uuid::parse_str(&generated).is_ok());

        let blank = extract_request_id(&request_with_header(Some("")));
        assert!(uuid::Uuid::parse_str(&blank).is_ok());
    }

    #[test]
    fn test_path_falls_back_to_uri() {
        let request = request_with_header(None);
        assert_eq!(extract_path(&request), "/users/7");
    }
}
