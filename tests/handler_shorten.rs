mod common;

use axum::{
    Router,
    http::{HeaderName, HeaderValue, StatusCode, header},
    routing::post,
};
use axum_test::TestServer;
use serde_json::json;
use shortly::api::handlers::shorten_handler;
use shortly::state::AppState;

fn shorten_server(state: AppState) -> TestServer {
    let app = Router::new()
        .route("/api/shorten", post(shorten_handler))
        .with_state(state);
    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_shorten_success() {
    let server = shorten_server(common::create_test_state());

    let response = server
        .post("/api/shorten")
        .json(&json!({ "url": "https://www.example.com/very/long/url" }))
        .await;

    response.assert_status(StatusCode::CREATED);

    let json = response.json::<serde_json::Value>();
    let code = json["short_code"].as_str().unwrap();
    assert_eq!(code.len(), 6);
    assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));

    let short_url = json["short_url"].as_str().unwrap();
    assert!(short_url.starts_with("http://"));
    assert!(short_url.ends_with(&format!("/{code}")));
}

#[tokio::test]
async fn test_shorten_uses_configured_base_url() {
    let server = shorten_server(common::create_test_state_with_base_url(
        "https://sho.rt",
    ));

    let response = server
        .post("/api/shorten")
        .json(&json!({ "url": "https://example.com" }))
        .await;

    response.assert_status(StatusCode::CREATED);

    let json = response.json::<serde_json::Value>();
    let code = json["short_code"].as_str().unwrap();
    assert_eq!(json["short_url"], format!("https://sho.rt/{code}"));
}

#[tokio::test]
async fn test_shorten_uses_forwarded_origin() {
    let server = shorten_server(common::create_test_state());

    let response = server
        .post("/api/shorten")
        .add_header(header::HOST, HeaderValue::from_static("links.example.org"))
        .add_header(
            HeaderName::from_static("x-forwarded-proto"),
            HeaderValue::from_static("https"),
        )
        .json(&json!({ "url": "https://example.com" }))
        .await;

    response.assert_status(StatusCode::CREATED);

    let json = response.json::<serde_json::Value>();
    let code = json["short_code"].as_str().unwrap();
    assert_eq!(
        json["short_url"],
        format!("https://links.example.org/{code}")
    );
}

#[tokio::test]
async fn test_shorten_missing_url_field() {
    let server = shorten_server(common::create_test_state());

    let response = server.post("/api/shorten").json(&json!({})).await;

    response.assert_status_bad_request();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"], "Missing 'url' in request body");
    assert_eq!(json["code"], "missing_input");
}

#[tokio::test]
async fn test_shorten_missing_body() {
    let server = shorten_server(common::create_test_state());

    let response = server.post("/api/shorten").await;

    response.assert_status_bad_request();
    assert_eq!(
        response.json::<serde_json::Value>()["error"],
        "Missing 'url' in request body"
    );
}

#[tokio::test]
async fn test_shorten_malformed_json() {
    let server = shorten_server(common::create_test_state());

    let response = server
        .post("/api/shorten")
        .text("{not json")
        .content_type("application/json")
        .await;

    response.assert_status_bad_request();
    assert_eq!(
        response.json::<serde_json::Value>()["code"],
        "missing_input"
    );
}

#[tokio::test]
async fn test_shorten_non_string_url() {
    let server = shorten_server(common::create_test_state());

    let response = server
        .post("/api/shorten")
        .json(&json!({ "url": 42 }))
        .await;

    response.assert_status_bad_request();
    assert_eq!(
        response.json::<serde_json::Value>()["code"],
        "missing_input"
    );
}

#[tokio::test]
async fn test_shorten_empty_url() {
    let server = shorten_server(common::create_test_state());

    for blank in ["", "   "] {
        let response = server
            .post("/api/shorten")
            .json(&json!({ "url": blank }))
            .await;

        response.assert_status_bad_request();

        let json = response.json::<serde_json::Value>();
        assert_eq!(json["error"], "URL cannot be empty");
        assert_eq!(json["code"], "empty_input");
    }
}

#[tokio::test]
async fn test_shorten_invalid_url() {
    let server = shorten_server(common::create_test_state());

    for invalid in ["not-a-url", "ftp://example.com", "https://.example.com"] {
        let response = server
            .post("/api/shorten")
            .json(&json!({ "url": invalid }))
            .await;

        response.assert_status_bad_request();

        let json = response.json::<serde_json::Value>();
        assert_eq!(json["error"], "Invalid URL provided", "input: {invalid}");
        assert_eq!(json["code"], "invalid_url");
    }
}

#[tokio::test]
async fn test_shorten_normalizes_missing_scheme() {
    let state = common::create_test_state();
    let server = common::create_test_server(state.clone());

    let code = common::shorten_code(&server, "example.com").await;

    let mapping = state.link_service.resolve(&code).unwrap();
    assert_eq!(mapping.original_url, "https://example.com");
    assert_eq!(mapping.clicks, 0);
}

#[tokio::test]
async fn test_shorten_same_url_twice_gives_distinct_codes() {
    let state = common::create_test_state();
    let server = common::create_test_server(state.clone());

    let first = common::shorten_code(&server, "https://example.com").await;
    let second = common::shorten_code(&server, "https://example.com").await;

    assert_ne!(first, second);
    assert_eq!(state.stats_service.total_links(), 2);
}
