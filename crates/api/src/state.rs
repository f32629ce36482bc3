use std::sync::Arc;

use flashcards_db::store::Stores;

use crate::services::card::CardService;
use crate::services::deck::DeckService;
use crate::services::playlist::PlaylistService;
use crate::services::review::ReviewService;
use crate::services::search::SearchService;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable; every service sits behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub decks: Arc<DeckService>,
    pub cards: Arc<CardService>,
    pub playlists: Arc<PlaylistService>,
    pub reviews: Arc<ReviewService>,
    pub search: Arc<SearchService>,
}

impl AppState {
    /// Wire every service onto the given stores.
    pub fn new(stores: Stores) -> Self {
        let decks = Arc::new(DeckService::new(
            stores.decks.clone(),
            stores.reviews.clone(),
        ));
        let cards = Arc::new(CardService::new(
            stores.cards.clone(),
            stores.decks.clone(),
        ));
        let playlists = Arc::new(PlaylistService::new(
            stores.playlists.clone(),
            Arc::clone(&decks),
        ));
        let reviews = Arc::new(ReviewService::new(
            stores.reviews.clone(),
            Arc::clone(&decks),
            Arc::clone(&playlists),
            Arc::clone(&cards),
        ));
        let search = Arc::new(SearchService::new(
            Arc::clone(&decks),
            Arc::clone(&playlists),
        ));

        Self {
            decks,
            cards,
            playlists,
            reviews,
            search,
        }
    }
}
