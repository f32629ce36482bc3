use std::collections::HashSet;
use std::sync::Arc;

use flashcards_core::error::CoreError;
use flashcards_core::pagination::Pagination;
use flashcards_core::review::OriginType;
use flashcards_core::types::EntityId;
use flashcards_core::validation::validate_entity;
use flashcards_db::models::deck::{CreateDeck, Deck, DeckPatch};
use flashcards_db::store::{DeckStore, ListQuery, ReviewStore};

use crate::services::{store_failure, Page, ServiceResult};

/// Upper bound on review sessions scanned when building the recent list.
const RECENT_SCAN_LIMIT: i64 = 500;

pub struct DeckService {
    decks: Arc<dyn DeckStore>,
    reviews: Arc<dyn ReviewStore>,
}

impl DeckService {
    pub fn new(decks: Arc<dyn DeckStore>, reviews: Arc<dyn ReviewStore>) -> Self {
        Self { decks, reviews }
    }

    pub async fn create(&self, caller: &str, input: CreateDeck) -> ServiceResult<Deck> {
        let deck = input.into_deck(caller);
        validate_entity(&deck)?;
        self.decks
            .insert(&deck)
            .await
            .map_err(store_failure("insert deck"))?;

        tracing::debug!(deck_id = %deck.id, user_id = caller, "Deck created");
        Ok(deck)
    }

    /// A deck the caller owns, or a public one.
    pub async fn find_by_id(&self, caller: &str, id: EntityId) -> ServiceResult<Deck> {
        self.decks
            .find_visible(caller, id)
            .await
            .map_err(store_failure("find deck"))?
            .ok_or_else(|| CoreError::not_found("Deck", id))
    }

    pub async fn find_by_owner(&self, caller: &str, query: &ListQuery) -> ServiceResult<Page<Deck>> {
        let items = self
            .decks
            .list(caller, query)
            .await
            .map_err(store_failure("list decks"))?;
        let total = self
            .decks
            .count(caller, query)
            .await
            .map_err(store_failure("count decks"))?;
        Ok(Page { items, total })
    }

    pub async fn update(
        &self,
        caller: &str,
        id: EntityId,
        is_partial: bool,
        patch: DeckPatch,
    ) -> ServiceResult<Deck> {
        let mut deck = self.find_by_id(caller, id).await?;
        patch.apply(&mut deck, is_partial);
        validate_entity(&deck)?;

        let saved = self
            .decks
            .replace(caller, &deck)
            .await
            .map_err(store_failure("replace deck"))?
            .ok_or_else(|| CoreError::not_found("Deck", id))?;

        tracing::debug!(deck_id = %id, user_id = caller, is_partial, "Deck updated");
        Ok(saved)
    }

    pub async fn delete(&self, caller: &str, id: EntityId) -> ServiceResult<()> {
        self.decks
            .delete(caller, id)
            .await
            .map_err(store_failure("delete deck"))?
            .ok_or_else(|| CoreError::not_found("Deck", id))?;

        tracing::debug!(deck_id = %id, user_id = caller, "Deck deleted");
        Ok(())
    }

    /// Decks from the caller's most recent deck reviews, newest first.
    ///
    /// Each deck appears once. Decks that were deleted or made private since
    /// are skipped before paging, so only the last page can come back short.
    pub async fn find_recent(&self, caller: &str, pagination: Pagination) -> ServiceResult<Vec<Deck>> {
        let reviews = self
            .reviews
            .recent(caller, OriginType::Deck, RECENT_SCAN_LIMIT)
            .await
            .map_err(store_failure("list recent reviews"))?;

        let skip = usize::try_from(pagination.skip()).unwrap_or(usize::MAX);
        let limit = usize::try_from(pagination.limit).unwrap_or(0);
        let wanted = skip.saturating_add(limit);

        let mut seen = HashSet::new();
        let mut visible = Vec::new();
        for id in reviews.into_iter().map(|r| r.origin_id) {
            if visible.len() >= wanted {
                break;
            }
            if !seen.insert(id) {
                continue;
            }
            match self.decks.find_visible(caller, id).await {
                Ok(Some(deck)) => visible.push(deck),
                Ok(None) => {
                    tracing::debug!(deck_id = %id, "Recently reviewed deck no longer visible");
                }
                Err(err) => return Err(store_failure("find recent deck")(err)),
            }
        }
        Ok(visible.into_iter().skip(skip).collect())
    }

    /// Count one more review of `id`. Failures are logged, not raised.
    pub(crate) async fn record_play(&self, id: EntityId) {
        if let Err(err) = self.decks.increment_play_count(id).await {
            tracing::warn!(deck_id = %id, error = %err, "Failed to increment deck play count");
        }
    }
}
