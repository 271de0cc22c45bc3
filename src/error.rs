//! Error types for the store, the service facade and the HTTP layer.
//!
//! - [`StoreError`] - outcomes of store operations that callers must handle
//! - [`LinkError`] - the error taxonomy returned by the service facade
//! - [`AppError`] - HTTP-facing error rendered as a JSON body

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// Errors returned by [`crate::domain::repositories::MappingRepository`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("short code already in use: {0}")]
    CodeTaken(String),
}

/// Errors returned by the service facade.
///
/// Expected conditions (missing, empty, invalid input and unknown codes) are
/// ordinary values; only [`LinkError::Internal`] signals an unexpected failure.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LinkError {
    #[error("Missing 'url' in request body")]
    MissingInput,

    #[error("URL cannot be empty")]
    EmptyInput,

    #[error("Invalid URL provided")]
    InvalidUrl { url: String },

    #[error("Short code not found")]
    NotFound { code: String },

    #[error("Internal error: {0}")]
    Internal(String),
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
    code: &'static str,
}

/// HTTP error returned from handlers.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{message}")]
    Validation {
        code: &'static str,
        message: String,
    },
    #[error("{message}")]
    NotFound { message: String },
    #[error("{message}")]
    Internal { message: String },
}

impl AppError {
    pub fn bad_request(code: &'static str, message: impl Into<String>) -> Self {
        Self::Validation {
            code,
            message: message.into(),
        }
    }
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// HTTP status this error maps to.
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<LinkError> for AppError {
    fn from(err: LinkError) -> Self {
        let message = err.to_string();
        match err {
            LinkError::MissingInput => AppError::bad_request("missing_input", message),
            LinkError::EmptyInput => AppError::bad_request("empty_input", message),
            LinkError::InvalidUrl { url } => {
                tracing::debug!(%url, "Rejected invalid URL");
                AppError::bad_request("invalid_url", message)
            }
            LinkError::NotFound { .. } => AppError::not_found(message),
            LinkError::Internal(reason) => {
                tracing::error!(%reason, "Internal error while processing request");
                AppError::internal("Internal server error")
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let (code, message) = match self {
            AppError::Validation { code, message } => (code, message),
            AppError::NotFound { message } => ("not_found", message),
            AppError::Internal { message } => ("internal_error", message),
        };

        (
            status,
            Json(ErrorBody {
                error: message,
                code,
            }),
        )
            .into_response()
    }
}
