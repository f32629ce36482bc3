//! HTTP-level integration tests for playlist endpoints and search.

mod common;

use std::sync::Arc;

use axum::http::StatusCode;
use common::{
    body_json, create_deck, create_playlist, delete, expect_json, get, patch_json, post_json,
    put_json,
};
use flashcards_db::memory::MemoryStore;
use serde_json::json;

fn store() -> Arc<MemoryStore> {
    Arc::new(MemoryStore::new())
}

async fn add_deck(store: &Arc<MemoryStore>, user: &str, playlist_id: &str, deck_id: &str) -> axum::http::Response<axum::body::Body> {
    post_json(
        common::build_test_app(store.clone()),
        &format!("/api/v1/playlists/{playlist_id}/decks"),
        user,
        json!({"deck_id": deck_id}),
    )
    .await
}

// ---------------------------------------------------------------------------
// Playlist CRUD
// ---------------------------------------------------------------------------

#[tokio::test]
async fn create_playlist_starts_empty() {
    let store = store();
    let id = create_playlist(&store, "u1", "Study", false).await;

    let response = get(
        common::build_test_app(store),
        &format!("/api/v1/playlists/{id}"),
        "u1",
    )
    .await;
    let json = expect_json(response, StatusCode::OK).await;
    assert_eq!(json["name"], "Study");
    assert_eq!(json["decks"], json!([]));
}

#[tokio::test]
async fn private_playlist_is_hidden_from_others() {
    let store = store();
    let id = create_playlist(&store, "u1", "Mine", true).await;

    let response = get(
        common::build_test_app(store),
        &format!("/api/v1/playlists/{id}"),
        "u2",
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn list_playlists_reports_total() {
    let store = store();
    create_playlist(&store, "u1", "A", true).await;
    create_playlist(&store, "u1", "B", true).await;
    create_playlist(&store, "u2", "C", false).await;

    let response = get(common::build_test_app(store.clone()), "/api/v1/playlists", "u1").await;
    assert_eq!(response.headers()["x-total"], "2");

    let response = get(common::build_test_app(store), "/api/v1/playlists/all", "u1").await;
    assert_eq!(response.headers()["x-total"], "3");
}

#[tokio::test]
async fn put_and_delete_playlist() {
    let store = store();
    let id = create_playlist(&store, "u1", "Study", false).await;
    let uri = format!("/api/v1/playlists/{id}");

    let response = put_json(
        common::build_test_app(store.clone()),
        &uri,
        "u1",
        json!({"name": "Exam", "description": "Finals", "image_url": "exam.png"}),
    )
    .await;
    let json = expect_json(response, StatusCode::OK).await;
    assert_eq!(json["name"], "Exam");

    let response = delete(common::build_test_app(store.clone()), &uri, "u1").await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    let response = get(common::build_test_app(store), &uri, "u1").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Deck references
// ---------------------------------------------------------------------------

#[tokio::test]
async fn add_deck_appends_preview_once() {
    let store = store();
    let playlist_id = create_playlist(&store, "u1", "Study", false).await;
    let deck_id = create_deck(&store, "u1", "Go Basics", false).await;

    let json = expect_json(add_deck(&store, "u1", &playlist_id, &deck_id).await, StatusCode::OK).await;
    assert_eq!(json["decks"].as_array().unwrap().len(), 1);
    assert_eq!(json["decks"][0]["id"], deck_id);
    assert_eq!(json["decks"][0]["name"], "Go Basics");

    let json = expect_json(add_deck(&store, "u1", &playlist_id, &deck_id).await, StatusCode::OK).await;
    assert_eq!(json["decks"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn add_invisible_deck_returns_404() {
    let store = store();
    let playlist_id = create_playlist(&store, "u1", "Study", false).await;
    let deck_id = create_deck(&store, "u2", "Private", true).await;

    let response = add_deck(&store, "u1", &playlist_id, &deck_id).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn public_deck_of_another_user_can_be_added() {
    let store = store();
    let playlist_id = create_playlist(&store, "u1", "Study", false).await;
    let deck_id = create_deck(&store, "u2", "Shared", false).await;

    let json = expect_json(add_deck(&store, "u1", &playlist_id, &deck_id).await, StatusCode::OK).await;
    assert_eq!(json["decks"][0]["user_id"], "u2");
}

#[tokio::test]
async fn remove_deck_reference() {
    let store = store();
    let playlist_id = create_playlist(&store, "u1", "Study", false).await;
    let first = create_deck(&store, "u1", "First", false).await;
    let second = create_deck(&store, "u1", "Second", false).await;
    add_deck(&store, "u1", &playlist_id, &first).await;
    add_deck(&store, "u1", &playlist_id, &second).await;

    let uri = format!("/api/v1/playlists/{playlist_id}/decks/{first}");
    let response = delete(common::build_test_app(store.clone()), &uri, "u1").await;
    let json = expect_json(response, StatusCode::OK).await;
    assert_eq!(json["decks"].as_array().unwrap().len(), 1);
    assert_eq!(json["decks"][0]["id"], second);

    let response = delete(common::build_test_app(store), &uri, "u1").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn patch_body_cannot_overwrite_decks() {
    let store = store();
    let playlist_id = create_playlist(&store, "u1", "Study", false).await;
    let deck_id = create_deck(&store, "u1", "Go", false).await;
    add_deck(&store, "u1", &playlist_id, &deck_id).await;

    let response = patch_json(
        common::build_test_app(store),
        &format!("/api/v1/playlists/{playlist_id}"),
        "u1",
        json!({"name": "Renamed", "decks": []}),
    )
    .await;
    let json = expect_json(response, StatusCode::OK).await;
    assert_eq!(json["name"], "Renamed");
    assert_eq!(json["decks"].as_array().unwrap().len(), 1);
}

// ---------------------------------------------------------------------------
// Search
// ---------------------------------------------------------------------------

#[tokio::test]
async fn search_returns_playlists_then_decks() {
    let store = store();
    create_deck(&store, "u1", "Go Basics", false).await;
    create_deck(&store, "u2", "Go Hidden", true).await;
    create_playlist(&store, "u2", "Go Weekly", false).await;
    create_playlist(&store, "u1", "Rust Weekly", false).await;

    let response = get(common::build_test_app(store), "/api/v1/search?filter=go", "u1").await;
    let json = expect_json(response, StatusCode::OK).await;
    let hits = json.as_array().unwrap();

    assert_eq!(hits.len(), 2);
    assert_eq!(hits[0]["kind"], "playlist");
    assert_eq!(hits[0]["name"], "Go Weekly");
    assert_eq!(hits[1]["kind"], "deck");
    assert_eq!(hits[1]["name"], "Go Basics");
}

#[tokio::test]
async fn search_splits_page_between_kinds() {
    let store = store();
    for i in 0..3 {
        create_deck(&store, "u1", &format!("Deck {i}"), false).await;
        create_playlist(&store, "u1", &format!("List {i}"), false).await;
    }

    let response = get(common::build_test_app(store), "/api/v1/search?limit=4", "u1").await;
    let json = body_json(response).await;
    let kinds: Vec<&str> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|h| h["kind"].as_str().unwrap())
        .collect();
    assert_eq!(kinds, vec!["playlist", "playlist", "deck", "deck"]);
}
