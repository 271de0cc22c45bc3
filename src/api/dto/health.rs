//! DTOs for health check endpoints.

use serde::Serialize;

/// Liveness payload served at `/`.
#[derive(Debug, Serialize)]
pub struct ServiceStatus {
    pub status: &'static str,
    pub service: &'static str,
}

/// Liveness payload served at `/api/health`.
#[derive(Debug, Serialize)]
pub struct ApiHealthResponse {
    pub status: &'static str,
    pub message: &'static str,
    pub version: &'static str,
}
