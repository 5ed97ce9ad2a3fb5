//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with all handlers
//! - Wire up middleware (tracing, timeout, request ID, latency metrics)
//! - Bind server to listener and shut down gracefully

use std::sync::Arc;
use std::time::{Duration, Instant};

use axum::{
    body::Body,
    extract::{MatchedPath, Request},
    http,
    middleware::{self, Next},
    response::Response,
    routing::get,
    Router,
};
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::ListenerConfig;
use crate::http::handlers;
use crate::http::middleware::customer_context_middleware;
use crate::http::request::{MakeRequestUuidV4, X_REQUEST_ID};
use crate::lifecycle::shutdown_signal;
use crate::observability::metrics;
use crate::registry::ConfigRegistry;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<ConfigRegistry>,
}

/// HTTP server exposing the registry read API.
pub struct RegistryServer {
    router: Router,
}

impl RegistryServer {
    /// Create a new server over an already-built registry.
    pub fn new(registry: Arc<ConfigRegistry>, config: &ListenerConfig) -> Self {
        let state = AppState { registry };
        let router = Self::build_router(
            state,
            Duration::from_secs(config.request_timeout_secs),
        );
        Self { router }
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    pub fn build_router(state: AppState, request_timeout: Duration) -> Router {
        let scoped = Router::new()
            .route("/api/v1/customer/config", get(handlers::scoped_config))
            .route("/api/v1/customer/branding", get(handlers::scoped_branding))
            .route_layer(middleware::from_fn_with_state(
                state.clone(),
                customer_context_middleware,
            ));

        Router::new()
            .route("/health", get(handlers::health))
            .route("/api/v1/platform/info", get(handlers::platform_info))
            .route("/api/v1/platform/customers", get(handlers::list_customers))
            .route("/api/v1/resolve", get(handlers::resolve))
            .route("/api/v1/customers/{id}", get(handlers::get_customer))
            .route("/api/v1/customers/{id}/branding", get(handlers::get_branding))
            .route("/api/v1/customers/{id}/compliance", get(handlers::get_compliance))
            .route("/api/v1/customers/{id}/environment", get(handlers::get_environment))
            .route("/api/v1/customers/{id}/pricing", get(handlers::get_pricing))
            .route("/api/v1/customers/{id}/locations", get(handlers::get_locations))
            .route("/api/v1/customers/{id}/validation", get(handlers::get_validation))
            .route(
                "/api/v1/customers/{id}/tenants/{subdomain}",
                get(handlers::get_tenant),
            )
            .route(
                "/api/v1/customers/{id}/integrations/{name}",
                get(handlers::get_integration),
            )
            .merge(scoped)
            .with_state(state)
            .layer(middleware::from_fn(track_latency))
            .layer(
                ServiceBuilder::new()
                    .layer(SetRequestIdLayer::x_request_id(MakeRequestUuidV4))
                    .layer(TraceLayer::new_for_http().make_span_with(
                        |request: &http::Request<Body>| {
                            let request_id = request
                                .headers()
                                .get(X_REQUEST_ID)
                                .and_then(|v| v.to_str().ok())
                                .unwrap_or("unknown");
                            tracing::info_span!(
                                "request",
                                method = %request.method(),
                                uri = %request.uri(),
                                request_id = %request_id,
                            )
                        },
                    ))
                    .layer(PropagateRequestIdLayer::x_request_id())
                    .layer(TimeoutLayer::new(request_timeout)),
            )
    }

    /// Consume the server, returning its router (for in-process testing).
    pub fn into_router(self) -> Router {
        self.router
    }

    /// Run the server, accepting connections on the given listener.
    pub async fn run(self, listener: TcpListener) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

async fn track_latency(request: Request, next: Next) -> Response {
    let start = Instant::now();
    let route = request
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_string())
        .unwrap_or_else(|| "unmatched".to_string());

    let response = next.run(request).await;
    metrics::record_request(route, response.status().as_u16(), start);
    response
}
