pub mod card;
pub mod deck;
pub mod health;
pub mod playlist;
pub mod review;
pub mod search;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /decks                                   list mine, create
/// /decks/all                               list mine + public
/// /decks/recent                            recently reviewed decks
/// /decks/{id}                              get, replace, patch, delete
/// /decks/{id}/cards                        list cards, create card
/// /decks/{id}/review                       start deck review (POST)
///
/// /cards/{id}                              get, replace, patch, delete
///
/// /playlists                               list mine, create
/// /playlists/all                           list mine + public
/// /playlists/{id}                          get, replace, patch, delete
/// /playlists/{id}/decks                    add deck reference (POST)
/// /playlists/{id}/decks/{deck_id}          remove deck reference (DELETE)
/// /playlists/{id}/review                   start playlist review (POST)
///
/// /reviews/{id}                            get session
/// /reviews/{id}/right                      record correct answer (POST)
/// /reviews/{id}/wrong                      record wrong answer (POST)
///
/// /search                                  search decks and playlists
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/decks", deck::router())
        .nest("/cards", card::router())
        .nest("/playlists", playlist::router())
        .nest("/reviews", review::router())
        .merge(search::router())
}
