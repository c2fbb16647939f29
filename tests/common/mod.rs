// SPDX-License-Identifier: MIT

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use fitness_tracker::config::Config;
use fitness_tracker::db::{MemoryStore, TrainingRepository, UserRepository};
use fitness_tracker::mapper::TrainingMapper;
use fitness_tracker::routes::create_router;
use fitness_tracker::services::{TrainingService, UserService};
use fitness_tracker::AppState;
use std::sync::Arc;
use tower::ServiceExt;

/// Create a test app over a fresh in-memory store.
/// Returns the router and the shared state.
#[allow(dead_code)]
pub fn create_test_app() -> (Router, Arc<AppState>) {
    let config = Config::default();

    let store = Arc::new(MemoryStore::new());
    let users: Arc<dyn UserRepository> = store.clone();
    let trainings: Arc<dyn TrainingRepository> = store;

    let user_service = UserService::new(users.clone(), trainings.clone());
    let training_service = TrainingService::new(trainings, TrainingMapper::new(users));

    let state = Arc::new(AppState {
        config,
        user_service,
        training_service,
    });

    (create_router(state.clone()), state)
}

/// Send one request to the app. A JSON body sets the content type.
#[allow(dead_code)]
pub async fn request(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<serde_json::Value>,
) -> Response {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(serde_json::to_vec(&json).unwrap())
        }
        None => Body::empty(),
    };

    app.clone()
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap()
}

/// Read a response body as JSON.
#[allow(dead_code)]
pub async fn json_body(response: Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

/// Send a request and assert the expected status, returning the JSON body.
#[allow(dead_code)]
pub async fn request_json(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<serde_json::Value>,
    expected: StatusCode,
) -> serde_json::Value {
    let response = request(app, method, uri, body).await;
    assert_eq!(response.status(), expected, "unexpected status for {uri}");
    json_body(response).await
}
