//! Handlers for review sessions.
//!
//! Starting a review returns `{ cards, session }`. Answers are recorded by
//! posting the answered card to `/right` or `/wrong`.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use flashcards_core::types::EntityId;
use flashcards_db::models::card::Card;

use crate::error::AppResult;
use crate::extract::{AppJson, AppPath};
use crate::middleware::caller::Caller;
use crate::state::AppState;

/// POST /api/v1/decks/{id}/review
pub async fn start_deck_review(
    caller: Caller,
    State(state): State<AppState>,
    AppPath(deck_id): AppPath<EntityId>,
) -> AppResult<impl IntoResponse> {
    let start = state
        .reviews
        .start_deck_review(&caller.user_id, deck_id)
        .await?;
    Ok((StatusCode::CREATED, Json(start)))
}

/// POST /api/v1/playlists/{id}/review
pub async fn start_playlist_review(
    caller: Caller,
    State(state): State<AppState>,
    AppPath(playlist_id): AppPath<EntityId>,
) -> AppResult<impl IntoResponse> {
    let start = state
        .reviews
        .start_playlist_review(&caller.user_id, playlist_id)
        .await?;
    Ok((StatusCode::CREATED, Json(start)))
}

/// GET /api/v1/reviews/{id}
pub async fn get_review(
    caller: Caller,
    State(state): State<AppState>,
    AppPath(id): AppPath<EntityId>,
) -> AppResult<impl IntoResponse> {
    let review = state.reviews.get_session_by_id(&caller.user_id, id).await?;
    Ok(Json(review))
}

/// POST /api/v1/reviews/{id}/right
pub async fn record_right(
    caller: Caller,
    State(state): State<AppState>,
    AppPath(id): AppPath<EntityId>,
    AppJson(card): AppJson<Card>,
) -> AppResult<impl IntoResponse> {
    let review = state
        .reviews
        .record_card_result(&caller.user_id, id, card, true)
        .await?;
    Ok(Json(review))
}

/// POST /api/v1/reviews/{id}/wrong
pub async fn record_wrong(
    caller: Caller,
    State(state): State<AppState>,
    AppPath(id): AppPath<EntityId>,
    AppJson(card): AppJson<Card>,
) -> AppResult<impl IntoResponse> {
    let review = state
        .reviews
        .record_card_result(&caller.user_id, id, card, false)
        .await?;
    Ok(Json(review))
}
