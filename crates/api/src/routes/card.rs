//! Route definitions for cards, mounted at `/cards`.
//!
//! Card creation and listing live under `/decks/{id}/cards`.

use axum::routing::get;
use axum::Router;

use crate::handlers::card;
use crate::state::AppState;

/// ```text
/// GET    /{id}     -> get_card
/// PUT    /{id}     -> replace_card
/// PATCH  /{id}     -> patch_card
/// DELETE /{id}     -> delete_card
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/{id}",
        get(card::get_card)
            .put(card::replace_card)
            .patch(card::patch_card)
            .delete(card::delete_card),
    )
}
