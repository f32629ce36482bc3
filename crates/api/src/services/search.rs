use std::sync::Arc;

use flashcards_core::pagination::Pagination;
use flashcards_db::models::deck::DeckSummary;
use flashcards_db::models::playlist::PlaylistSummary;
use flashcards_db::store::{ListQuery, Scope};
use serde::Serialize;

use crate::services::deck::DeckService;
use crate::services::playlist::PlaylistService;
use crate::services::ServiceResult;

/// One search result, tagged with its record kind.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum SearchHit {
    Playlist(PlaylistSummary),
    Deck(DeckSummary),
}

/// Name search across decks and playlists visible to the caller.
pub struct SearchService {
    decks: Arc<DeckService>,
    playlists: Arc<PlaylistService>,
}

impl SearchService {
    pub fn new(decks: Arc<DeckService>, playlists: Arc<PlaylistService>) -> Self {
        Self { decks, playlists }
    }

    /// Playlists first, then decks. Each kind gets half the page size.
    pub async fn search(
        &self,
        caller: &str,
        filter: Option<String>,
        pagination: Pagination,
    ) -> ServiceResult<Vec<SearchHit>> {
        let query = ListQuery {
            scope: Scope::Visible,
            name: filter,
            pagination: pagination.halved(),
        };

        let playlists = self.playlists.find_by_owner(caller, &query).await?;
        let decks = self.decks.find_by_owner(caller, &query).await?;

        let hits: Vec<SearchHit> = playlists
            .items
            .iter()
            .map(|p| SearchHit::Playlist(p.summary()))
            .chain(decks.items.iter().map(|d| SearchHit::Deck(d.summary())))
            .collect();

        tracing::debug!(user_id = caller, hits = hits.len(), "Search completed");
        Ok(hits)
    }
}
