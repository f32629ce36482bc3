//! Review-session orchestration.
//!
//! Starting a review gathers the cards of a deck (or of every deck in a
//! playlist, in playlist order) and opens a session. Answers are then
//! recorded one card at a time. Each step aborts on the first failure.

use std::sync::Arc;

use flashcards_core::error::CoreError;
use flashcards_core::review::OriginType;
use flashcards_core::types::EntityId;
use flashcards_db::models::card::Card;
use flashcards_db::models::review::{Review, ReviewStart};
use flashcards_db::store::ReviewStore;

use crate::services::card::CardService;
use crate::services::deck::DeckService;
use crate::services::playlist::PlaylistService;
use crate::services::{store_failure, ServiceResult};

pub struct ReviewService {
    reviews: Arc<dyn ReviewStore>,
    decks: Arc<DeckService>,
    playlists: Arc<PlaylistService>,
    cards: Arc<CardService>,
}

impl ReviewService {
    pub fn new(
        reviews: Arc<dyn ReviewStore>,
        decks: Arc<DeckService>,
        playlists: Arc<PlaylistService>,
        cards: Arc<CardService>,
    ) -> Self {
        Self {
            reviews,
            decks,
            playlists,
            cards,
        }
    }

    /// Open a session over one deck's cards and count the play.
    pub async fn start_deck_review(
        &self,
        caller: &str,
        deck_id: EntityId,
    ) -> ServiceResult<ReviewStart> {
        let deck = self.decks.find_by_id(caller, deck_id).await?;
        let cards = self.cards.find_by_deck(caller, deck.id).await?;
        let session = self.open(caller, OriginType::Deck, deck.id).await?;
        self.decks.record_play(deck.id).await;

        tracing::debug!(
            review_id = %session.id,
            deck_id = %deck.id,
            cards = cards.len(),
            "Deck review started"
        );
        Ok(ReviewStart { cards, session })
    }

    /// Open a session over the cards of every deck in a playlist.
    ///
    /// Cards are concatenated in playlist deck order. A referenced deck that
    /// was deleted is not an error; only its leftover visible cards appear.
    pub async fn start_playlist_review(
        &self,
        caller: &str,
        playlist_id: EntityId,
    ) -> ServiceResult<ReviewStart> {
        let playlist = self.playlists.find_by_id(caller, playlist_id).await?;

        let mut cards = Vec::new();
        for preview in &playlist.decks {
            cards.extend(self.cards.find_by_deck(caller, preview.id).await?);
        }
        let session = self
            .open(caller, OriginType::Playlist, playlist.id)
            .await?;

        tracing::debug!(
            review_id = %session.id,
            playlist_id = %playlist.id,
            cards = cards.len(),
            "Playlist review started"
        );
        Ok(ReviewStart { cards, session })
    }

    pub async fn get_session_by_id(&self, caller: &str, id: EntityId) -> ServiceResult<Review> {
        self.reviews
            .find_owned(caller, id)
            .await
            .map_err(store_failure("find review"))?
            .ok_or_else(|| CoreError::not_found("Review", id))
    }

    /// Append one answered card to the session and persist it.
    pub async fn record_card_result(
        &self,
        caller: &str,
        review_id: EntityId,
        card: Card,
        is_correct: bool,
    ) -> ServiceResult<Review> {
        let mut review = self.get_session_by_id(caller, review_id).await?;
        let card_id = card.id;
        review.record(card, is_correct);

        let saved = self
            .reviews
            .replace(caller, &review)
            .await
            .map_err(store_failure("replace review"))?
            .ok_or_else(|| CoreError::not_found("Review", review_id))?;

        tracing::debug!(
            review_id = %review_id,
            card_id = %card_id,
            is_correct,
            hits = saved.hits_count,
            mistakes = saved.mistakes_count,
            "Review answer recorded"
        );
        Ok(saved)
    }

    async fn open(
        &self,
        caller: &str,
        origin_type: OriginType,
        origin_id: EntityId,
    ) -> ServiceResult<Review> {
        let review = Review::start(origin_type, origin_id, caller);
        self.reviews
            .insert(&review)
            .await
            .map_err(store_failure("insert review"))?;
        Ok(review)
    }
}
