//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /`                  - Service liveness
//! - `GET  /{code}`            - Short link redirect
//! - `GET  /api/health`        - API liveness
//! - `POST /api/shorten`       - Create a short link
//! - `GET  /api/stats/{code}`  - Click statistics
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::{fallback_handler, redirect_handler, root_health_handler};
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
///
/// Trailing slashes are trimmed before routing, so `/api/stats/abc123/`
/// reaches the same handler as `/api/stats/abc123`.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state))
}

/// Routes and per-request middleware, without path normalization.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root_health_handler))
        .route("/{code}", get(redirect_handler))
        .nest("/api", api::routes::api_routes())
        .fallback(fallback_handler)
        .with_state(state)
        .layer(tracing::layer())
}
