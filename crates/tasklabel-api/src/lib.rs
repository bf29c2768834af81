//! tasklabel-api - HTTP API server for tasklabel
//!
//! Routes:
//!
//! | Method | Path | Handler |
//! |--------|------|---------|
//! | GET | `/dropdown_options` | [`handlers::categories::dropdown_options`] |
//! | POST | `/add_category` | [`handlers::categories::add_category`] |
//! | POST | `/save_classification` | [`handlers::classifications::save_classification`] |
//! | GET | `/check_classification/:task` | [`handlers::classifications::check_classification`] |
//! | GET | `/classification_summary` | [`handlers::summary::classification_summary`] |
//! | GET | `/health` | [`health_check`] |
//!
//! Anything else is served from the static directory.

pub mod config;
pub mod error;
pub mod handlers;

use std::path::Path;

use axum::{
    body::Body,
    http::Request,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use tower_http::{
    cors::CorsLayer,
    limit::RequestBodyLimitLayer,
    request_id::{MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer},
    services::ServeDir,
    trace::TraceLayer,
};
use tracing::Span;
use uuid::Uuid;

pub use config::{LogConfig, LogFormat, ServerConfig};
pub use error::ApiError;
use tasklabel_core::logging;
use tasklabel_store::Stores;

use handlers::{
    categories::{add_category, dropdown_options},
    classifications::{check_classification, save_classification},
    summary::classification_summary,
};

// =============================================================================
// REQUEST ID (UUIDv7)
// =============================================================================

/// Generates time-ordered UUIDv7 request correlation IDs.
#[derive(Clone, Default)]
pub struct MakeRequestUuidV7;

impl MakeRequestId for MakeRequestUuidV7 {
    fn make_request_id<B>(&mut self, _request: &Request<B>) -> Option<RequestId> {
        let id = Uuid::now_v7().to_string().parse().ok()?;
        Some(RequestId::new(id))
    }
}

const REQUEST_ID_HEADER: &str = "x-request-id";

/// The `x-request-id` header value, if present and valid UTF-8.
pub fn request_id<B>(request: &Request<B>) -> Option<&str> {
    request
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|value| value.to_str().ok())
}

/// Per-request span. `SetRequestIdLayer` runs first, so the header is
/// already present here.
fn make_request_span(request: &Request<Body>) -> Span {
    let span = tracing::info_span!(
        "request",
        method = %request.method(),
        uri = %request.uri(),
        request_id = tracing::field::Empty,
    );
    if let Some(id) = request_id(request) {
        span.record(logging::REQUEST_ID, id);
    }
    span
}

// =============================================================================
// STATE & ROUTER
// =============================================================================

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub stores: Stores,
}

impl AppState {
    pub fn new(stores: Stores) -> Self {
        Self { stores }
    }
}

/// Build the application router.
///
/// CORS is permissive: any origin, method and header.
pub fn router(state: AppState, static_dir: impl AsRef<Path>, max_body_bytes: usize) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/dropdown_options", get(dropdown_options))
        .route("/add_category", post(add_category))
        .route("/save_classification", post(save_classification))
        .route("/check_classification/:task", get(check_classification))
        .route("/classification_summary", get(classification_summary))
        .fallback_service(ServeDir::new(static_dir.as_ref()))
        // Middleware
        .layer(TraceLayer::new_for_http().make_span_with(make_request_span))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuidV7))
        .layer(CorsLayer::permissive())
        .layer(RequestBodyLimitLayer::new(max_body_bytes))
        .with_state(state)
}

// =============================================================================
// HEALTH CHECK
// =============================================================================

pub async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
