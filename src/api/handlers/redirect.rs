//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};

use crate::error::AppError;
use crate::state::AppState;
use crate::utils::url_validator::redirect_location;

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// The visit is counted atomically with the lookup, so concurrent redirects
/// never lose a click.
///
/// # Response
///
/// `302 Found` with the original URL in `Location`. Control characters that
/// slipped through validation are dropped from the header value.
///
/// # Errors
///
/// Returns 404 Not Found if the short code doesn't exist.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    let mapping = state.link_service.follow(&code)?;

    let location = HeaderValue::try_from(redirect_location(&mapping.original_url)).map_err(|e| {
        tracing::error!(%code, "Stored URL is not a valid Location header: {}", e);
        AppError::internal("Internal server error")
    })?;

    Ok((StatusCode::FOUND, [(header::LOCATION, location)]).into_response())
}
