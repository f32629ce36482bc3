//! In-process store implementation used by service and HTTP tests.
//!
//! Records are kept in insertion order, which doubles as creation order.
//! Individual operation groups can be made to fail with [`Fault`] so tests
//! can exercise store-failure paths.

use std::collections::HashSet;
use std::sync::Mutex;

use async_trait::async_trait;
use flashcards_core::review::OriginType;
use flashcards_core::types::EntityId;
use tokio::sync::RwLock;

use crate::models::card::Card;
use crate::models::deck::Deck;
use crate::models::playlist::Playlist;
use crate::models::review::Review;
use crate::store::{
    CardStore, DeckStore, ListQuery, PlaylistStore, ReviewStore, StoreError, StoreResult,
};

/// An operation group that can be switched to always fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Fault {
    DeckReads,
    DeckWrites,
    PlayCount,
    CardReads,
    CardWrites,
    PlaylistReads,
    PlaylistWrites,
    ReviewReads,
    ReviewWrites,
}

#[derive(Default)]
pub struct MemoryStore {
    decks: RwLock<Vec<Deck>>,
    cards: RwLock<Vec<Card>>,
    playlists: RwLock<Vec<Playlist>>,
    reviews: RwLock<Vec<Review>>,
    faults: Mutex<HashSet<Fault>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every operation in `fault`'s group fail until cleared.
    pub fn inject(&self, fault: Fault) {
        self.faults
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .insert(fault);
    }

    pub fn clear(&self, fault: Fault) {
        self.faults
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .remove(&fault);
    }

    fn check(&self, fault: Fault) -> StoreResult<()> {
        let faults = self
            .faults
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        if faults.contains(&fault) {
            Err(StoreError::Unavailable(format!("{fault:?} disabled")))
        } else {
            Ok(())
        }
    }
}

/// Apply a listing's scope, name filter and page to an ordered collection.
fn page<'a, T: Clone + 'a>(
    items: impl Iterator<Item = &'a T>,
    query: &ListQuery,
    keep: impl Fn(&T) -> bool,
) -> Vec<T> {
    let skip = usize::try_from(query.pagination.skip()).unwrap_or(usize::MAX);
    let limit = usize::try_from(query.pagination.limit).unwrap_or(0);
    items
        .filter(|item| keep(item))
        .skip(skip)
        .take(limit)
        .cloned()
        .collect()
}

/* --------------------------------------------------------------------------
Decks
-------------------------------------------------------------------------- */

#[async_trait]
impl DeckStore for MemoryStore {
    async fn insert(&self, deck: &Deck) -> StoreResult<()> {
        self.check(Fault::DeckWrites)?;
        self.decks.write().await.push(deck.clone());
        Ok(())
    }

    async fn find_visible(&self, caller: &str, id: EntityId) -> StoreResult<Option<Deck>> {
        self.check(Fault::DeckReads)?;
        let decks = self.decks.read().await;
        Ok(decks
            .iter()
            .find(|d| d.id == id && (d.user_id == caller || !d.is_private))
            .cloned())
    }

    async fn list(&self, caller: &str, query: &ListQuery) -> StoreResult<Vec<Deck>> {
        self.check(Fault::DeckReads)?;
        let decks = self.decks.read().await;
        Ok(page(decks.iter(), query, |d| {
            query.matches(caller, &d.user_id, d.is_private, &d.name)
        }))
    }

    async fn count(&self, caller: &str, query: &ListQuery) -> StoreResult<i64> {
        self.check(Fault::DeckReads)?;
        let decks = self.decks.read().await;
        let n = decks
            .iter()
            .filter(|d| query.matches(caller, &d.user_id, d.is_private, &d.name))
            .count();
        Ok(n as i64)
    }

    async fn replace(&self, owner: &str, deck: &Deck) -> StoreResult<Option<Deck>> {
        self.check(Fault::DeckWrites)?;
        let mut decks = self.decks.write().await;
        let Some(stored) = decks
            .iter_mut()
            .find(|d| d.id == deck.id && d.user_id == owner)
        else {
            return Ok(None);
        };
        stored.name = deck.name.clone();
        stored.description = deck.description.clone();
        stored.image_url = deck.image_url.clone();
        stored.is_private = deck.is_private;
        stored.study_suggestions = deck.study_suggestions.clone();
        stored.updated_at = deck.updated_at;
        Ok(Some(stored.clone()))
    }

    async fn delete(&self, owner: &str, id: EntityId) -> StoreResult<Option<Deck>> {
        self.check(Fault::DeckWrites)?;
        let mut decks = self.decks.write().await;
        let position = decks.iter().position(|d| d.id == id && d.user_id == owner);
        Ok(position.map(|i| decks.remove(i)))
    }

    async fn adjust_cards_count(&self, id: EntityId, delta: i64) -> StoreResult<()> {
        self.check(Fault::DeckWrites)?;
        if let Some(deck) = self.decks.write().await.iter_mut().find(|d| d.id == id) {
            deck.cards_count = (deck.cards_count + delta).max(0);
        }
        Ok(())
    }

    async fn increment_play_count(&self, id: EntityId) -> StoreResult<()> {
        self.check(Fault::PlayCount)?;
        if let Some(deck) = self.decks.write().await.iter_mut().find(|d| d.id == id) {
            deck.play_count += 1;
        }
        Ok(())
    }
}

/* --------------------------------------------------------------------------
Cards
-------------------------------------------------------------------------- */

#[async_trait]
impl CardStore for MemoryStore {
    async fn insert(&self, card: &Card) -> StoreResult<()> {
        self.check(Fault::CardWrites)?;
        self.cards.write().await.push(card.clone());
        Ok(())
    }

    async fn find_visible(&self, caller: &str, id: EntityId) -> StoreResult<Option<Card>> {
        self.check(Fault::CardReads)?;
        let cards = self.cards.read().await;
        Ok(cards
            .iter()
            .find(|c| c.id == id && (c.user_id == caller || !c.is_private))
            .cloned())
    }

    async fn list_by_deck(&self, caller: &str, deck_id: EntityId) -> StoreResult<Vec<Card>> {
        self.check(Fault::CardReads)?;
        let cards = self.cards.read().await;
        Ok(cards
            .iter()
            .filter(|c| c.deck_id == deck_id && (c.user_id == caller || !c.is_private))
            .cloned()
            .collect())
    }

    async fn replace(&self, owner: &str, card: &Card) -> StoreResult<Option<Card>> {
        self.check(Fault::CardWrites)?;
        let mut cards = self.cards.write().await;
        let Some(stored) = cards
            .iter_mut()
            .find(|c| c.id == card.id && c.user_id == owner)
        else {
            return Ok(None);
        };
        stored.front = card.front.clone();
        stored.back = card.back.clone();
        stored.color = card.color.clone();
        stored.is_private = card.is_private;
        stored.updated_at = card.updated_at;
        Ok(Some(stored.clone()))
    }

    async fn delete(&self, owner: &str, id: EntityId) -> StoreResult<Option<Card>> {
        self.check(Fault::CardWrites)?;
        let mut cards = self.cards.write().await;
        let position = cards.iter().position(|c| c.id == id && c.user_id == owner);
        Ok(position.map(|i| cards.remove(i)))
    }
}

/* --------------------------------------------------------------------------
Playlists
-------------------------------------------------------------------------- */

#[async_trait]
impl PlaylistStore for MemoryStore {
    async fn insert(&self, playlist: &Playlist) -> StoreResult<()> {
        self.check(Fault::PlaylistWrites)?;
        self.playlists.write().await.push(playlist.clone());
        Ok(())
    }

    async fn find_visible(&self, caller: &str, id: EntityId) -> StoreResult<Option<Playlist>> {
        self.check(Fault::PlaylistReads)?;
        let playlists = self.playlists.read().await;
        Ok(playlists
            .iter()
            .find(|p| p.id == id && (p.user_id == caller || !p.is_private))
            .cloned())
    }

    async fn list(&self, caller: &str, query: &ListQuery) -> StoreResult<Vec<Playlist>> {
        self.check(Fault::PlaylistReads)?;
        let playlists = self.playlists.read().await;
        Ok(page(playlists.iter(), query, |p| {
            query.matches(caller, &p.user_id, p.is_private, &p.name)
        }))
    }

    async fn count(&self, caller: &str, query: &ListQuery) -> StoreResult<i64> {
        self.check(Fault::PlaylistReads)?;
        let playlists = self.playlists.read().await;
        let n = playlists
            .iter()
            .filter(|p| query.matches(caller, &p.user_id, p.is_private, &p.name))
            .count();
        Ok(n as i64)
    }

    async fn replace(&self, owner: &str, playlist: &Playlist) -> StoreResult<Option<Playlist>> {
        self.check(Fault::PlaylistWrites)?;
        let mut playlists = self.playlists.write().await;
        let Some(stored) = playlists
            .iter_mut()
            .find(|p| p.id == playlist.id && p.user_id == owner)
        else {
            return Ok(None);
        };
        stored.name = playlist.name.clone();
        stored.description = playlist.description.clone();
        stored.image_url = playlist.image_url.clone();
        stored.is_private = playlist.is_private;
        stored.study_suggestions = playlist.study_suggestions.clone();
        stored.decks = playlist.decks.clone();
        stored.updated_at = playlist.updated_at;
        Ok(Some(stored.clone()))
    }

    async fn delete(&self, owner: &str, id: EntityId) -> StoreResult<Option<Playlist>> {
        self.check(Fault::PlaylistWrites)?;
        let mut playlists = self.playlists.write().await;
        let position = playlists
            .iter()
            .position(|p| p.id == id && p.user_id == owner);
        Ok(position.map(|i| playlists.remove(i)))
    }
}

/* --------------------------------------------------------------------------
Reviews
-------------------------------------------------------------------------- */

#[async_trait]
impl ReviewStore for MemoryStore {
    async fn insert(&self, review: &Review) -> StoreResult<()> {
        self.check(Fault::ReviewWrites)?;
        self.reviews.write().await.push(review.clone());
        Ok(())
    }

    async fn find_owned(&self, owner: &str, id: EntityId) -> StoreResult<Option<Review>> {
        self.check(Fault::ReviewReads)?;
        let reviews = self.reviews.read().await;
        Ok(reviews
            .iter()
            .find(|r| r.id == id && r.user_id == owner)
            .cloned())
    }

    async fn replace(&self, owner: &str, review: &Review) -> StoreResult<Option<Review>> {
        self.check(Fault::ReviewWrites)?;
        let mut reviews = self.reviews.write().await;
        let Some(stored) = reviews
            .iter_mut()
            .find(|r| r.id == review.id && r.user_id == owner)
        else {
            return Ok(None);
        };
        stored.hits = review.hits.clone();
        stored.hits_count = review.hits_count;
        stored.mistakes = review.mistakes.clone();
        stored.mistakes_count = review.mistakes_count;
        stored.updated_at = review.updated_at;
        Ok(Some(stored.clone()))
    }

    async fn recent(
        &self,
        owner: &str,
        origin_type: OriginType,
        limit: i64,
    ) -> StoreResult<Vec<Review>> {
        self.check(Fault::ReviewReads)?;
        let reviews = self.reviews.read().await;
        let mut matching: Vec<Review> = reviews
            .iter()
            .filter(|r| r.user_id == owner && r.origin_type == origin_type)
            .cloned()
            .collect();
        // Stable sort keeps later inserts first among equal timestamps.
        matching.reverse();
        matching.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        matching.truncate(usize::try_from(limit).unwrap_or(0));
        Ok(matching)
    }
}
