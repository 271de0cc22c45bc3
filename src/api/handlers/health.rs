//! Handlers for health check endpoints.

use axum::Json;

use crate::api::dto::health::{ApiHealthResponse, ServiceStatus};
use crate::error::AppError;

/// Service liveness.
///
/// `GET /`
pub async fn root_health_handler() -> Json<ServiceStatus> {
    Json(ServiceStatus {
        status: "healthy",
        service: "URL Shortener API",
    })
}

/// API liveness with crate version.
///
/// `GET /api/health`
///
/// ```json
/// {
///   "status": "ok",
///   "message": "URL Shortener API is running",
///   "version": "0.1.0"
/// }
/// ```
pub async fn api_health_handler() -> Json<ApiHealthResponse> {
    Json(ApiHealthResponse {
        status: "ok",
        message: "URL Shortener API is running",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// JSON 404 for unmatched routes.
pub async fn fallback_handler() -> AppError {
    AppError::not_found("Resource not found")
}
