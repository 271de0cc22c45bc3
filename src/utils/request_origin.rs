//! Public origin resolution from HTTP request metadata.

use axum::http::{HeaderMap, Uri, header};

/// Header set by reverse proxies to report the client-facing scheme.
const FORWARDED_PROTO: &str = "x-forwarded-proto";

/// Host used when the request carries no usable host information.
const FALLBACK_HOST: &str = "localhost";

/// Builds the request's own origin, e.g. `http://sho.rt:8080`.
///
/// # Resolution
///
/// - **Scheme**: first value of `X-Forwarded-Proto` if it is `http` or `https`,
///   otherwise `http`
/// - **Host**: the `Host` header (port included), then the request URI
///   authority, then `localhost`
///
/// Never fails; malformed headers are ignored.
///
/// # Examples
///
/// ```ignore
/// let mut headers = HeaderMap::new();
/// headers.insert(header::HOST, "sho.rt:8080".parse().unwrap());
///
/// let origin = request_origin(&headers, &Uri::from_static("/api/shorten"));
/// assert_eq!(origin, "http://sho.rt:8080");
/// ```
pub fn request_origin(headers: &HeaderMap, uri: &Uri) -> String {
    let scheme = headers
        .get(FORWARDED_PROTO)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(|v| v.trim().to_ascii_lowercase())
        .filter(|v| v == "http" || v == "https")
        .unwrap_or_else(|| "http".to_string());

    let host = headers
        .get(header::HOST)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
        .or_else(|| uri.authority().map(|a| a.as_str().to_string()))
        .unwrap_or_else(|| FALLBACK_HOST.to_string());

    format!("{scheme}://{host}")
}

/// Joins an origin and a short code into a short URL.
pub fn short_url(origin: &str, code: &str) -> String {
    format!("{}/{}", origin.trim_end_matches('/'), code)
}
