/// Common test utilities and fixtures
use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use roster_core::UserStore;
use roster_server::{create_router, state::AppState};
use std::sync::Arc;
use tower::util::ServiceExt;

/// Router over a store seeded with Alice (1) and Bob (2)
pub fn create_test_app() -> (Router, Arc<UserStore>) {
    create_test_app_with(UserStore::seeded())
}

pub fn create_test_app_with(store: UserStore) -> (Router, Arc<UserStore>) {
    let store = Arc::new(store);
    let app = create_router(AppState::new(Arc::clone(&store)));
    (app, store)
}

/// Send a request and decode the JSON body
pub async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    body: Option<serde_json::Value>,
) -> (StatusCode, serde_json::Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(serde_json::to_vec(&body).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    send_request(app, request).await
}

pub async fn send_request(app: &Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = if body_bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&body_bytes).unwrap()
    };
    (status, json)
}
