//! API route configuration.

use crate::api::handlers::{api_health_handler, shorten_handler, stats_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Routes mounted under `/api`.
///
/// # Endpoints
///
/// - `GET  /health`        - API liveness
/// - `POST /shorten`       - Create a short link
/// - `GET  /stats/{code}`  - Click statistics for a short link
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(api_health_handler))
        .route("/shorten", post(shorten_handler))
        .route("/stats/{code}", get(stats_handler))
}
