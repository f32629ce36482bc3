//! Handlers for cards, both deck-scoped and by card id.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use flashcards_core::types::EntityId;
use flashcards_db::models::card::{CardPatch, CreateCard};

use crate::error::AppResult;
use crate::extract::{AppJson, AppPath};
use crate::middleware::caller::Caller;
use crate::state::AppState;

/// GET /api/v1/decks/{id}/cards
pub async fn list_deck_cards(
    caller: Caller,
    State(state): State<AppState>,
    AppPath(deck_id): AppPath<EntityId>,
) -> AppResult<impl IntoResponse> {
    let cards = state.cards.find_by_deck(&caller.user_id, deck_id).await?;
    Ok(Json(cards))
}

/// POST /api/v1/decks/{id}/cards
pub async fn create_card(
    caller: Caller,
    State(state): State<AppState>,
    AppPath(deck_id): AppPath<EntityId>,
    AppJson(input): AppJson<CreateCard>,
) -> AppResult<impl IntoResponse> {
    let card = state.cards.create(&caller.user_id, deck_id, input).await?;
    Ok((StatusCode::CREATED, Json(card)))
}

/// GET /api/v1/cards/{id}
pub async fn get_card(
    caller: Caller,
    State(state): State<AppState>,
    AppPath(id): AppPath<EntityId>,
) -> AppResult<impl IntoResponse> {
    let card = state.cards.find_by_id(&caller.user_id, id).await?;
    Ok(Json(card))
}

/// PUT /api/v1/cards/{id}
pub async fn replace_card(
    caller: Caller,
    State(state): State<AppState>,
    AppPath(id): AppPath<EntityId>,
    AppJson(patch): AppJson<CardPatch>,
) -> AppResult<impl IntoResponse> {
    let card = state.cards.update(&caller.user_id, id, false, patch).await?;
    Ok(Json(card))
}

/// PATCH /api/v1/cards/{id}
pub async fn patch_card(
    caller: Caller,
    State(state): State<AppState>,
    AppPath(id): AppPath<EntityId>,
    AppJson(patch): AppJson<CardPatch>,
) -> AppResult<impl IntoResponse> {
    let card = state.cards.update(&caller.user_id, id, true, patch).await?;
    Ok(Json(card))
}

/// DELETE /api/v1/cards/{id}
pub async fn delete_card(
    caller: Caller,
    State(state): State<AppState>,
    AppPath(id): AppPath<EntityId>,
) -> AppResult<StatusCode> {
    state.cards.delete(&caller.user_id, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
