mod common;

use axum::{
    body::Body,
    http::{Request, StatusCode, header},
};
use shortly::routes::app_router;
use tower::ServiceExt;

#[tokio::test]
async fn test_trailing_slash_reaches_same_handler() {
    let app = app_router(common::create_test_state());

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/health/")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_redirect_with_trailing_slash() {
    let state = common::create_test_state();
    let code = state
        .link_service
        .shorten("https://example.com/docs")
        .unwrap()
        .short_code;

    let response = app_router(state.clone())
        .oneshot(
            Request::builder()
                .uri(format!("/{code}/"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(
        response.headers()[header::LOCATION],
        "https://example.com/docs"
    );
    assert_eq!(state.link_service.resolve(&code).unwrap().clicks, 1);
}

#[tokio::test]
async fn test_unknown_path_is_json_404() {
    let response = app_router(common::create_test_state())
        .oneshot(
            Request::builder()
                .uri("/too/many/segments")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        response.headers()[header::CONTENT_TYPE],
        "application/json"
    );
}
