#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, Response, StatusCode};
use axum::Router;
use flashcards_api::config::ServerConfig;
use flashcards_api::router::build_app_router;
use flashcards_api::state::AppState;
use flashcards_db::memory::MemoryStore;
use flashcards_db::store::Stores;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
    }
}

/// Application state wired onto the given in-memory store.
pub fn test_state(store: Arc<MemoryStore>) -> AppState {
    AppState::new(Stores::memory(store))
}

/// Build the full application router over an in-memory store.
///
/// Uses the same builder as `main.rs`, so tests exercise the production
/// middleware stack. Keep the `Arc<MemoryStore>` to share data between
/// several apps or to inject faults.
pub fn build_test_app(store: Arc<MemoryStore>) -> Router {
    build_app_router(test_state(store), &test_config())
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

/// Send a request as `user` (no `userId` header when `None`).
pub async fn send(
    app: Router,
    method: Method,
    uri: &str,
    user: Option<&str>,
    body: Option<Value>,
) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(user) = user {
        builder = builder.header("userId", user);
    }
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str, user: &str) -> Response<Body> {
    send(app, Method::GET, uri, Some(user), None).await
}

pub async fn post_json(app: Router, uri: &str, user: &str, body: Value) -> Response<Body> {
    send(app, Method::POST, uri, Some(user), Some(body)).await
}

pub async fn put_json(app: Router, uri: &str, user: &str, body: Value) -> Response<Body> {
    send(app, Method::PUT, uri, Some(user), Some(body)).await
}

pub async fn patch_json(app: Router, uri: &str, user: &str, body: Value) -> Response<Body> {
    send(app, Method::PATCH, uri, Some(user), Some(body)).await
}

pub async fn delete(app: Router, uri: &str, user: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, Some(user), None).await
}

/// Read a response body as JSON.
pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Assert the status and return the JSON body.
pub async fn expect_json(response: Response<Body>, status: StatusCode) -> Value {
    assert_eq!(response.status(), status);
    body_json(response).await
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

pub fn deck_body(name: &str, is_private: bool) -> Value {
    serde_json::json!({
        "name": name,
        "description": format!("{name} description"),
        "image_url": format!("{}.png", name.to_lowercase().replace(' ', "-")),
        "is_private": is_private,
        "study_suggestions": ["daily"],
    })
}

pub fn playlist_body(name: &str, is_private: bool) -> Value {
    serde_json::json!({
        "name": name,
        "description": format!("{name} description"),
        "image_url": "playlist.png",
        "is_private": is_private,
    })
}

/// Create a deck as `user` and return its id.
pub async fn create_deck(store: &Arc<MemoryStore>, user: &str, name: &str, is_private: bool) -> String {
    let response = post_json(
        build_test_app(store.clone()),
        "/api/v1/decks",
        user,
        deck_body(name, is_private),
    )
    .await;
    let json = expect_json(response, StatusCode::CREATED).await;
    json["id"].as_str().unwrap().to_string()
}

/// Create a card in `deck_id` as `user` and return the card JSON.
pub async fn create_card(store: &Arc<MemoryStore>, user: &str, deck_id: &str, front: &str) -> Value {
    let response = post_json(
        build_test_app(store.clone()),
        &format!("/api/v1/decks/{deck_id}/cards"),
        user,
        serde_json::json!({"front": front, "back": format!("{front} answer")}),
    )
    .await;
    expect_json(response, StatusCode::CREATED).await
}

/// Create a playlist as `user` and return its id.
pub async fn create_playlist(
    store: &Arc<MemoryStore>,
    user: &str,
    name: &str,
    is_private: bool,
) -> String {
    let response = post_json(
        build_test_app(store.clone()),
        "/api/v1/playlists",
        user,
        playlist_body(name, is_private),
    )
    .await;
    let json = expect_json(response, StatusCode::CREATED).await;
    json["id"].as_str().unwrap().to_string()
}
