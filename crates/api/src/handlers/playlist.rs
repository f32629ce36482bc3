//! Handlers for playlist CRUD and deck references.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use flashcards_core::types::EntityId;
use flashcards_db::models::playlist::{CreatePlaylist, PlaylistPatch};
use flashcards_db::store::{ListQuery, Scope};
use serde::Deserialize;

use crate::error::AppResult;
use crate::extract::{AppJson, AppPath, AppQuery};
use crate::handlers::X_TOTAL;
use crate::middleware::caller::Caller;
use crate::query::ListParams;
use crate::state::AppState;

/// Request body for `POST /playlists/{id}/decks`.
#[derive(Debug, Deserialize)]
pub struct AddDeckRequest {
    pub deck_id: EntityId,
}

/// POST /api/v1/playlists
pub async fn create_playlist(
    caller: Caller,
    State(state): State<AppState>,
    AppJson(input): AppJson<CreatePlaylist>,
) -> AppResult<impl IntoResponse> {
    let playlist = state.playlists.create(&caller.user_id, input).await?;
    Ok((StatusCode::CREATED, Json(playlist)))
}

/// GET /api/v1/playlists
pub async fn list_my_playlists(
    caller: Caller,
    State(state): State<AppState>,
    AppQuery(params): AppQuery<ListParams>,
) -> AppResult<impl IntoResponse> {
    list(caller, state, params, Scope::Owned).await
}

/// GET /api/v1/playlists/all
pub async fn list_all_playlists(
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
    let page = state
        .playlists
        .find_by_owner(&caller.user_id, &query)
        .await?;
    Ok(([(X_TOTAL, page.total.to_string())], Json(page.items)))
}

/// GET /api/v1/playlists/{id}
pub async fn get_playlist(
    caller: Caller,
    State(state): State<AppState>,
    AppPath(id): AppPath<EntityId>,
) -> AppResult<impl IntoResponse> {
    let playlist = state.playlists.find_by_id(&caller.user_id, id).await?;
    Ok(Json(playlist))
}

/// PUT /api/v1/playlists/{id}
pub async fn replace_playlist(
    caller: Caller,
    State(state): State<AppState>,
    AppPath(id): AppPath<EntityId>,
    AppJson(patch): AppJson<PlaylistPatch>,
) -> AppResult<impl IntoResponse> {
    let playlist = state
        .playlists
        .update(&caller.user_id, id, false, patch)
        .await?;
    Ok(Json(playlist))
}

/// PATCH /api/v1/playlists/{id}
pub async fn patch_playlist(
    caller: Caller,
    State(state): State<AppState>,
    AppPath(id): AppPath<EntityId>,
    AppJson(patch): AppJson<PlaylistPatch>,
) -> AppResult<impl IntoResponse> {
    let playlist = state
        .playlists
        .update(&caller.user_id, id, true, patch)
        .await?;
    Ok(Json(playlist))
}

/// DELETE /api/v1/playlists/{id}
pub async fn delete_playlist(
    caller: Caller,
    State(state): State<AppState>,
    AppPath(id): AppPath<EntityId>,
) -> AppResult<StatusCode> {
    state.playlists.delete(&caller.user_id, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/playlists/{id}/decks
pub async fn add_deck(
    caller: Caller,
    State(state): State<AppState>,
    AppPath(id): AppPath<EntityId>,
    AppJson(input): AppJson<AddDeckRequest>,
) -> AppResult<impl IntoResponse> {
    let playlist = state
        .playlists
        .add_deck_reference(&caller.user_id, id, input.deck_id)
        .await?;
    Ok(Json(playlist))
}

/// DELETE /api/v1/playlists/{id}/decks/{deck_id}
pub async fn remove_deck(
    caller: Caller,
    State(state): State<AppState>,
    AppPath((id, deck_id)): AppPath<(EntityId, EntityId)>,
) -> AppResult<impl IntoResponse> {
    let playlist = state
        .playlists
        .remove_deck_reference(&caller.user_id, id, deck_id)
        .await?;
    Ok(Json(playlist))
}
