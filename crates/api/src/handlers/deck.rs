//! Handlers for deck CRUD and the recently-reviewed list.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use flashcards_core::types::EntityId;
use flashcards_db::models::deck::{CreateDeck, DeckPatch};
use flashcards_db::store::{ListQuery, Scope};

use crate::error::AppResult;
use crate::extract::{AppJson, AppPath, AppQuery};
use crate::handlers::X_TOTAL;
use crate::middleware::caller::Caller;
use crate::query::ListParams;
use crate::state::AppState;

/// POST /api/v1/decks
pub async fn create_deck(
    caller: Caller,
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateDeck>,
) -> AppResult<impl IntoResponse> {
    let deck = state.decks.create(&caller.user_id, input).await?;
    Ok((StatusCode::CREATED, Json(deck)))
}

/// GET /api/v1/decks
///
/// The caller's own decks.
pub async fn list_my_decks(
    caller: Caller,
    State(state): State<AppState>,
    AppQuery(params): AppQuery<ListParams>,
) -> AppResult<impl IntoResponse> {
    list(caller, state, params, Scope::Owned).await
}

/// GET /api/v1/decks/all
///
/// The caller's own decks plus every public deck.
pub async fn list_all_decks(
    caller: Caller,
    State(state): State<AppState>,
    AppQuery(params): AppQuery<ListParams>,
) -> AppResult<impl IntoResponse> {
    list(caller, state, params, Scope::Visible).await
}

async fn list(
    caller: Caller,
    state: AppState,
    params: ListParams,
    scope: Scope,
) -> AppResult<impl IntoResponse> {
    let query = ListQuery {
        scope,
        name: params.name_filter(),
        pagination: params.pagination(),
    };
    let page = state.decks.find_by_owner(&caller.user_id, &query).await?;
    Ok(([(X_TOTAL, page.total.to_string())], Json(page.items)))
}

/// GET /api/v1/decks/recent
pub async fn list_recent_decks(
    caller: Caller,
    State(state): State<AppState>,
    AppQuery(params): AppQuery<ListParams>,
) -> AppResult<impl IntoResponse> {
    let decks = state
        .decks
        .find_recent(&caller.user_id, params.pagination())
        .await?;
    Ok(Json(decks))
}

/// GET /api/v1/decks/{id}
pub async fn get_deck(
    caller: Caller,
    State(state): State<AppState>,
    AppPath(id): AppPath<EntityId>,
) -> AppResult<impl IntoResponse> {
    let deck = state.decks.find_by_id(&caller.user_id, id).await?;
    Ok(Json(deck))
}

/// PUT /api/v1/decks/{id}
pub async fn replace_deck(
    caller: Caller,
    State(state): State<AppState>,
    AppPath(id): AppPath<EntityId>,
    AppJson(patch): AppJson<DeckPatch>,
) -> AppResult<impl IntoResponse> {
    let deck = state.decks.update(&caller.user_id, id, false, patch).await?;
    Ok(Json(deck))
}

/// PATCH /api/v1/decks/{id}
pub async fn patch_deck(
    caller: Caller,
    State(state): State<AppState>,
    AppPath(id): AppPath<EntityId>,
    AppJson(patch): AppJson<DeckPatch>,
) -> AppResult<impl IntoResponse> {
    let deck = state.decks.update(&caller.user_id, id, true, patch).await?;
    Ok(Json(deck))
}

/// DELETE /api/v1/decks/{id}
pub async fn delete_deck(
    caller: Caller,
    State(state): State<AppState>,
    AppPath(id): AppPath<EntityId>,
) -> AppResult<StatusCode> {
    state.decks.delete(&caller.user_id, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
