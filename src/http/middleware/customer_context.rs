//! Customer context middleware.
//! Scopes requests to the customer named in the `X-Customer-ID` header.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::http::response::ApiError;
use crate::http::server::AppState;
use crate::observability::metrics;

pub const X_CUSTOMER_ID: &str = "x-customer-id";

/// Context attached to customer-scoped requests.
#[derive(Clone, Debug)]
pub struct CustomerContext {
    pub customer_id: String,
}

pub async fn customer_context_middleware(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Response {
    // 1. Extract X-Customer-ID header
    let customer_id = match req
        .headers()
        .get(X_CUSTOMER_ID)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|v| !v.is_empty())
    {
        Some(id) => id.to_string(),
        None => {
            return ApiError::BadRequest("Missing X-Customer-ID header".into()).into_response();
        }
    };

    // 2. Verify the customer is registered
    let known = state.registry.is_valid_customer(&customer_id);
    metrics::record_lookup("customer_header", known);
    if !known {
        tracing::warn!(customer_id = %customer_id, "Unknown customer in X-Customer-ID header");
        return ApiError::customer_not_found(&customer_id).into_response();
    }

    // 3. Attach context
    req.extensions_mut().insert(CustomerContext { customer_id });
    next.run(req).await
}
