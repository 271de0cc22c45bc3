#![allow(dead_code)]

use axum_test::TestServer;
use serde_json::{Value, json};
use shortly::application::services::CodeSettings;
use shortly::routes::router;
use shortly::state::AppState;

pub fn create_test_state() -> AppState {
    AppState::in_memory(CodeSettings::default(), None)
}

pub fn create_test_state_with_base_url(base_url: &str) -> AppState {
    AppState::in_memory(CodeSettings::default(), Some(base_url.to_string()))
}

pub fn create_test_server(state: AppState) -> TestServer {
    TestServer::new(router(state)).unwrap()
}

/// Shortens `url` through the API and returns the response body.
pub async fn shorten(server: &TestServer, url: &str) -> Value {
    let response = server.post("/api/shorten").json(&json!({ "url": url })).await;
    response.assert_status(axum::http::StatusCode::CREATED);
    response.json::<Value>()
}

/// Shortens `url` through the API and returns the short code.
pub async fn shorten_code(server: &TestServer, url: &str) -> String {
    shorten(server, url).await["short_code"]
        .as_str()
        .unwrap()
        .to_string()
}
