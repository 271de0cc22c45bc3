//! Handler for link shortening endpoint.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::{HeaderMap, StatusCode, Uri},
};

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::{AppError, LinkError};
use crate::state::AppState;
use crate::utils::request_origin::{request_origin, short_url};

/// Creates a short link for a long URL.
///
/// # Endpoint
///
/// `POST /api/shorten`
///
/// # Request Body
///
/// ```json
/// { "url": "https://www.example.com/very/long/url" }
/// ```
///
/// URLs without a scheme get `https://` prepended.
///
/// # Response
///
/// `201 Created`
///
/// ```json
/// {
///   "short_code": "aB3xK9",
///   "short_url": "http://localhost:3000/aB3xK9"
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if the body or its `url` field is missing, if the
/// URL is blank, or if it fails validation.
pub async fn shorten_handler(
    State(state): State<AppState>,
    uri: Uri,
    headers: HeaderMap,
    payload: Result<Json<ShortenRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ShortenResponse>), AppError> {
    let Json(request) = payload.map_err(|rejection| {
        tracing::debug!(reason = %rejection.body_text(), "Rejected shorten request body");
        LinkError::MissingInput
    })?;

    let raw_url = request.url.ok_or(LinkError::MissingInput)?;

    let mapping = state.link_service.shorten(&raw_url)?;

    let origin = match state.base_url {
        Some(ref base_url) => base_url.clone(),
        None => request_origin(&headers, &uri),
    };

    Ok((
        StatusCode::CREATED,
        Json(ShortenResponse {
            short_url: short_url(&origin, &mapping.short_code),
            short_code: mapping.short_code,
        }),
    ))
}
