//! Request ID lookup.
//!
//! Every request gets an `x-request-id` (kept if the client sent one) that
//! is echoed on the response and recorded on the request span. Generation
//! is tower-http's `MakeRequestUuid`.

use axum::http::Request;

pub const X_REQUEST_ID: &str = "x-request-id";

/// Request ID of `request`, or `"unknown"` if none was assigned.
pub fn request_id<B>(request: &Request<B>) -> &str {
    request
        .headers()
        .get(X_REQUEST_ID)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("unknown")
}
