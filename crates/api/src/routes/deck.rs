//! Route definitions for decks, mounted at `/decks`.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{card, deck, review};
use crate::state::AppState;

/// ```text
/// GET    /               -> list_my_decks
/// POST   /               -> create_deck
/// GET    /all            -> list_all_decks
/// GET    /recent         -> list_recent_decks
/// GET    /{id}           -> get_deck
/// PUT    /{id}           -> replace_deck
/// PATCH  /{id}           -> patch_deck
/// DELETE /{id}           -> delete_deck
/// GET    /{id}/cards     -> list_deck_cards
/// POST   /{id}/cards     -> create_card
/// POST   /{id}/review    -> start_deck_review
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(deck::list_my_decks).post(deck::create_deck))
        .route("/all", get(deck::list_all_decks))
        .route("/recent", get(deck::list_recent_decks))
        .route(
            "/{id}",
            get(deck::get_deck)
                .put(deck::replace_deck)
                .patch(deck::patch_deck)
                .delete(deck::delete_deck),
        )
        .route(
            "/{id}/cards",
            get(card::list_deck_cards).post(card::create_card),
        )
        .route("/{id}/review", post(review::start_deck_review))
}
