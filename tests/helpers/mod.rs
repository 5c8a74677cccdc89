use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode, header},
};
use http_body_util::BodyExt;
use smartrecipe::AppState;
use smartrecipe_recipe::{RandomDetector, RecipeStore, ScoringStrategy};
use smartrecipe_user::PreferencesStore;
use tower::ServiceExt;

/// App over the bundled dataset with a seeded detector.
pub fn test_app() -> (Router, AppState) {
    app_with_store(RecipeStore::bundled().expect("bundled dataset loads"))
}

pub fn app_with_store(store: RecipeStore) -> (Router, AppState) {
    let state = AppState {
        store: Arc::new(store),
        preferences: PreferencesStore::new(),
        detector: Arc::new(RandomDetector::seeded(11)),
        scoring: ScoringStrategy::Percentage,
    };

    (smartrecipe::create_app(state.clone()), state)
}

pub async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<serde_json::Value>,
) -> (StatusCode, serde_json::Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null)
    };

    (status, value)
}

pub async fn get(app: &Router, uri: &str) -> (StatusCode, serde_json::Value) {
    send(app, Method::GET, uri, None).await
}

pub async fn post(
    app: &Router,
    uri: &str,
    body: serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    send(app, Method::POST, uri, Some(body)).await
}
