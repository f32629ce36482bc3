//! Store traits the service layer depends on.
//!
//! Every entity has one trait. The PostgreSQL repositories in
//! [`crate::repositories`] implement them for production; the `memory`
//! feature provides an in-process implementation for tests.
//!
//! Ownership-scoped writes (`replace`, `delete`) return `Ok(None)` when no
//! row matched the (id, owner) pair. Services map that to `NotFound`.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use flashcards_core::pagination::Pagination;
use flashcards_core::review::OriginType;
use flashcards_core::types::EntityId;

use crate::models::card::Card;
use crate::models::deck::Deck;
use crate::models::playlist::Playlist;
use crate::models::review::Review;

/// Failure raised by a store. Never means "not found".
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Store call exceeded {0:?}")]
    Timeout(Duration),

    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Which records a listing covers, relative to the caller.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Scope {
    /// Only records the caller owns.
    #[default]
    Owned,
    /// Records the caller owns plus every public record.
    Visible,
}

/// Parameters shared by every paginated listing.
#[derive(Debug, Clone, Default)]
pub struct ListQuery {
    pub scope: Scope,
    /// Case-insensitive substring match on the record name.
    pub name: Option<String>,
    pub pagination: Pagination,
}

impl ListQuery {
    /// Whether a record passes the scope and name filters for `caller`.
    pub fn matches(&self, caller: &str, owner: &str, is_private: bool, name: &str) -> bool {
        let in_scope = match self.scope {
            Scope::Owned => owner == caller,
            Scope::Visible => owner == caller || !is_private,
        };
        let name_ok = match &self.name {
            Some(filter) => name.to_lowercase().contains(&filter.to_lowercase()),
            None => true,
        };
        in_scope && name_ok
    }
}

#[async_trait]
pub trait DeckStore: Send + Sync {
    async fn insert(&self, deck: &Deck) -> StoreResult<()>;

    /// A deck the caller owns, or a public one.
    async fn find_visible(&self, caller: &str, id: EntityId) -> StoreResult<Option<Deck>>;

    /// A page of decks ordered by creation time.
    async fn list(&self, caller: &str, query: &ListQuery) -> StoreResult<Vec<Deck>>;

    /// Total matching `query` ignoring pagination.
    async fn count(&self, caller: &str, query: &ListQuery) -> StoreResult<i64>;

    /// Replace the editable fields of a deck owned by `owner`.
    async fn replace(&self, owner: &str, deck: &Deck) -> StoreResult<Option<Deck>>;

    async fn delete(&self, owner: &str, id: EntityId) -> StoreResult<Option<Deck>>;

    /// Add `delta` to the card counter, never dropping below zero.
    async fn adjust_cards_count(&self, id: EntityId, delta: i64) -> StoreResult<()>;

    async fn increment_play_count(&self, id: EntityId) -> StoreResult<()>;
}

#[async_trait]
pub trait CardStore: Send + Sync {
    async fn insert(&self, card: &Card) -> StoreResult<()>;

    async fn find_visible(&self, caller: &str, id: EntityId) -> StoreResult<Option<Card>>;

    /// Cards of one deck visible to the caller, in storage order.
    async fn list_by_deck(&self, caller: &str, deck_id: EntityId) -> StoreResult<Vec<Card>>;

    async fn replace(&self, owner: &str, card: &Card) -> StoreResult<Option<Card>>;

    async fn delete(&self, owner: &str, id: EntityId) -> StoreResult<Option<Card>>;
}

#[async_trait]
pub trait PlaylistStore: Send + Sync {
    async fn insert(&self, playlist: &Playlist) -> StoreResult<()>;

    async fn find_visible(&self, caller: &str, id: EntityId) -> StoreResult<Option<Playlist>>;

    async fn list(&self, caller: &str, query: &ListQuery) -> StoreResult<Vec<Playlist>>;

    async fn count(&self, caller: &str, query: &ListQuery) -> StoreResult<i64>;

    /// Replace the editable fields and deck list of a playlist owned by `owner`.
    async fn replace(&self, owner: &str, playlist: &Playlist) -> StoreResult<Option<Playlist>>;

    async fn delete(&self, owner: &str, id: EntityId) -> StoreResult<Option<Playlist>>;
}

#[async_trait]
pub trait ReviewStore: Send + Sync {
    async fn insert(&self, review: &Review) -> StoreResult<()>;

    /// Reviews are private to the user that started them.
    async fn find_owned(&self, owner: &str, id: EntityId) -> StoreResult<Option<Review>>;

    async fn replace(&self, owner: &str, review: &Review) -> StoreResult<Option<Review>>;

    /// Most recently updated reviews of one origin kind, newest first.
    async fn recent(
        &self,
        owner: &str,
        origin_type: OriginType,
        limit: i64,
    ) -> StoreResult<Vec<Review>>;
}

/// One handle per entity store, shared by the services.
#[derive(Clone)]
pub struct Stores {
    pub decks: Arc<dyn DeckStore>,
    pub cards: Arc<dyn CardStore>,
    pub playlists: Arc<dyn PlaylistStore>,
    pub reviews: Arc<dyn ReviewStore>,
}

impl Stores {
    /// PostgreSQL-backed stores sharing one pool.
    pub fn postgres(pool: crate::DbPool) -> Self {
        use crate::repositories::{CardRepo, DeckRepo, PlaylistRepo, ReviewRepo};

        Self {
            decks: Arc::new(DeckRepo::new(pool.clone())),
            cards: Arc::new(CardRepo::new(pool.clone())),
            playlists: Arc::new(PlaylistRepo::new(pool.clone())),
            reviews: Arc::new(ReviewRepo::new(pool)),
        }
    }

    /// Stores backed by a single in-memory instance.
    #[cfg(feature = "memory")]
    pub fn memory(store: Arc<crate::memory::MemoryStore>) -> Self {
        Self {
            decks: store.clone(),
            cards: store.clone(),
            playlists: store.clone(),
            reviews: store,
        }
    }
}
