//! Route definitions for playlists, mounted at `/playlists`.

use axum::routing::{delete, get, post};
use axum::Router;

use crate::handlers::{playlist, review};
use crate::state::AppState;

/// ```text
/// GET    /                       -> list_my_playlists
/// POST   /                       -> create_playlist
/// GET    /all                    -> list_all_playlists
/// GET    /{id}                   -> get_playlist
/// PUT    /{id}                   -> replace_playlist
/// PATCH  /{id}                   -> patch_playlist
/// DELETE /{id}                   -> delete_playlist
/// POST   /{id}/decks             -> add_deck
/// DELETE /{id}/decks/{deck_id}   -> remove_deck
/// POST   /{id}/review            -> start_playlist_review
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(playlist::list_my_playlists).post(playlist::create_playlist),
        )
        .route("/all", get(playlist::list_all_playlists))
        .route(
            "/{id}",
            get(playlist::get_playlist)
                .put(playlist::replace_playlist)
                .patch(playlist::patch_playlist)
                .delete(playlist::delete_playlist),
        )
        .route("/{id}/decks", post(playlist::add_deck))
        .route("/{id}/decks/{deck_id}", delete(playlist::remove_deck))
        .route("/{id}/review", post(review::start_playlist_review))
}
