//! Health endpoint and route-fallback coverage.

mod common;

use bfhl_service::services::providers::mock::MockTextProvider;
use common::TestApp;
use serde_json::Value;
use std::sync::Arc;

async fn spawn() -> TestApp {
    TestApp::spawn(Arc::new(MockTextProvider::with_response("hello world"))).await
}

#[tokio::test]
async fn health_check_returns_success_envelope() {
    let app = spawn().await;

    let response = app
        .client
        .get(format!("{}/health", app.address))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["is_success"], Value::Bool(true));
    assert!(body["official_email"].as_str().is_some_and(|s| !s.is_empty()));
    // Health carries no data payload.
    assert!(body.get("data").is_none());
}

#[tokio::test]
async fn unknown_path_returns_404_envelope() {
    let app = spawn().await;

    let response = app
        .client
        .get(format!("{}/nope", app.address))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 404);
    let body: Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["is_success"], Value::Bool(false));
    assert_eq!(body["data"], Value::String("Endpoint not found".to_string()));
}

#[tokio::test]
async fn wrong_method_returns_404_envelope() {
    let app = spawn().await;

    // GET on the POST-only endpoint
    let response = app
        .client
        .get(format!("{}/bfhl", app.address))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 404);

    // POST on the GET-only endpoint
    let response = app
        .client
        .post(format!("{}/health", app.address))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 404);

    let body: Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["data"], Value::String("Endpoint not found".to_string()));
}
