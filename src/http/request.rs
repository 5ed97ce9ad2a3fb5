//! Request identification.
//!
//! # Responsibilities
//! - Generate a unique request ID (UUID v4) for requests without one
//! - Echo the ID back on the response
//!
//! # Design Decisions
//! - A client-supplied `x-request-id` is kept as-is
//! - Request ID added as early as possible for tracing

use axum::http::{HeaderValue, Request};
use tower_http::request_id::{MakeRequestId, RequestId};
use uuid::Uuid;

/// Header carrying the request ID.
pub const X_REQUEST_ID: &str = "x-request-id";

/// Produces random v4 UUID request IDs.
#[derive(Debug, Clone, Copy, Default)]
pub struct MakeRequestUuidV4;

impl MakeRequestId for MakeRequestUuidV4 {
    fn make_request_id<B>(&mut self, _request: &Request<B>) -> Option<RequestId> {
        HeaderValue::from_str(&Uuid::new_v4().to_string())
            .ok()
            .map(RequestId::new)
    }
}
