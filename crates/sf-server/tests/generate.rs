//! End-to-end route tests: in-process axum app against a mocked upstream.

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use sf_config::AppConfig;
use sf_server::{build_app, state::AppState};
use tower::ServiceExt;

fn app_with(api_key: Option<&str>, api_base: &str) -> Router {
    let config = AppConfig {
        api_key: api_key.map(str::to_string),
        api_base: api_base.to_string(),
        ..AppConfig::default()
    };
    build_app(AppState::new(config).unwrap(), true)
}

async fn post_generate(app: Router, body: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/generate")
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

fn completion_body(content: &str) -> String {
    json!({"choices": [{"message": {"content": content}}]}).to_string()
}

#[tokio::test]
async fn missing_api_key_returns_500_without_upstream_call() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/chat/completions")
        .expect(0)
        .create_async()
        .await;

    let app = app_with(None, &server.url());
    let (status, body) = post_generate(app, r#"{"MCU": "Arduino Nano"}"#).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(
        body["error"]["message"]
            .as_str()
            .unwrap()
            .contains("GROQ_API_KEY"),
        "error must name the missing configuration: {body}"
    );
    mock.assert_async().await;
}

#[tokio::test]
async fn malformed_request_json_returns_400() {
    let mut server = mockito::Server::new_async().await;
    let app = app_with(Some("gsk_test"), &server.url());

    let (status, body) = post_generate(app, "{not json").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["type"], "invalid_request_error");
    assert!(body["error"]["details"].is_string());
}

#[tokio::test]
async fn upstream_error_status_returns_503() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/chat/completions")
        .with_status(500)
        .with_body("boom")
        .create_async()
        .await;

    let app = app_with(Some("gsk_test"), &server.url());
    let (status, body) = post_generate(app, "{}").await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["error"]["type"], "api_error");
    assert_eq!(
        body["error"]["message"],
        "Failed to communicate with the AI service"
    );
}

#[tokio::test]
async fn unreachable_upstream_returns_503() {
    // Nothing listens on port 1.
    let app = app_with(Some("gsk_test"), "http://127.0.0.1:1");
    let (status, body) = post_generate(app, "{}").await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["error"]["type"], "api_error");
}

#[tokio::test]
async fn unparseable_model_output_returns_400_not_503() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/chat/completions")
        .with_status(200)
        .with_body(completion_body("{not json"))
        .create_async()
        .await;

    let app = app_with(Some("gsk_test"), &server.url());
    let (status, body) = post_generate(app, "{}").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["type"], "validation_error");
}

#[tokio::test]
async fn empty_choices_returns_400_validation_error() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/chat/completions")
        .with_status(200)
        .with_body(r#"{"choices": []}"#)
        .create_async()
        .await;

    let app = app_with(Some("gsk_test"), &server.url());
    let (status, body) = post_generate(app, "{}").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["type"], "validation_error");
}

#[tokio::test]
async fn successful_generation_relays_artifacts() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/chat/completions")
        .match_header("authorization", "Bearer gsk_test")
        .with_status(200)
        .with_body(completion_body(
            r##"{"code.ino": "void setup() {}", "README.md": "# Smart Garden"}"##,
        ))
        .create_async()
        .await;

    let app = app_with(Some("gsk_test"), &server.url());
    let (status, body) = post_generate(
        app,
        r#"{"Project name": "smart garden monitor", "MCU": "Arduino Nano", "Sensors": []}"#,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["code.ino"], "void setup() {}");
    assert_eq!(body["README.md"], "# Smart Garden");
    mock.assert_async().await;
}

#[tokio::test]
async fn health_and_index_respond() {
    let server = mockito::Server::new_async().await;
    let app = app_with(None, &server.url());

    let health = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(health.status(), StatusCode::OK);

    let index = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(index.status(), StatusCode::OK);
    let bytes = to_bytes(index.into_body(), usize::MAX).await.unwrap();
    assert!(String::from_utf8_lossy(&bytes).contains("sketchforge"));
}
