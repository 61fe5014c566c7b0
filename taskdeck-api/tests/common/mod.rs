/// Common test utilities for integration tests
///
/// Each `TestContext` owns a fresh store and router, so tests never see each
/// other's data.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::Value;
use taskdeck_api::app::{build_router, AppState};
use taskdeck_api::config::Config;
use tower::ServiceExt as _;

/// Test context containing the router and its state
pub struct TestContext {
    pub app: axum::Router,
    pub state: AppState,
}

impl TestContext {
    /// Creates a new test context with an empty store
    pub fn new() -> Self {
        let state = AppState::new(Config::default());
        let app = build_router(state.clone());

        TestContext { app, state }
    }

    /// Sends a request and returns the status with the parsed JSON body
    ///
    /// Non-JSON bodies come back as `Value::Null`.
    pub async fn request(&self, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);

        let request = match body {
            Some(json) => builder
                .header("content-type", "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        self.send(request).await
    }

    /// Sends a prebuilt request
    pub async fn send(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.app.clone().oneshot(request).await.unwrap();
        let status = response.status();

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

        (status, json)
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.request("GET", uri, None).await
    }

    pub async fn post(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.request("POST", uri, Some(body)).await
    }

    pub async fn patch(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.request("PATCH", uri, Some(body)).await
    }

    pub async fn delete(&self, uri: &str) -> (StatusCode, Value) {
        self.request("DELETE", uri, None).await
    }

    /// Creates a user through the API and returns its ID
    pub async fn create_user(&self, name: &str) -> String {
        let (status, body) = self
            .post("/users", serde_json::json!({ "name": name }))
            .await;
        assert_eq!(status, StatusCode::CREATED, "create_user failed: {}", body);

        body["id"].as_str().unwrap().to_string()
    }

    /// Creates a task through the API and returns its ID
    pub async fn create_task(&self, user_id: &str, title: &str) -> String {
        let (status, body) = self
            .post(
                &format!("/users/{}/tasks", user_id),
                serde_json::json!({ "title": title }),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED, "create_task failed: {}", body);

        body["id"].as_str().unwrap().to_string()
    }
}

/// Collects the `id` field of every element of a JSON array
pub fn ids(list: &Value) -> Vec<String> {
    list.as_array()
        .unwrap()
        .iter()
        .map(|item| item["id"].as_str().unwrap().to_string())
        .collect()
}
