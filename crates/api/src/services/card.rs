use std::sync::Arc;

use flashcards_core::error::CoreError;
use flashcards_core::types::EntityId;
use flashcards_core::validation::{validate_color, validate_entity};
use flashcards_db::models::card::{Card, CardPatch, CreateCard};
use flashcards_db::store::{CardStore, DeckStore};

use crate::services::{store_failure, ServiceResult};

pub struct CardService {
    cards: Arc<dyn CardStore>,
    decks: Arc<dyn DeckStore>,
}

impl CardService {
    pub fn new(cards: Arc<dyn CardStore>, decks: Arc<dyn DeckStore>) -> Self {
        Self { cards, decks }
    }

    /// Add a card to a deck the caller owns.
    pub async fn create(
        &self,
        caller: &str,
        deck_id: EntityId,
        input: CreateCard,
    ) -> ServiceResult<Card> {
        let deck = self
            .decks
            .find_visible(caller, deck_id)
            .await
            .map_err(store_failure("find deck"))?
            .filter(|d| d.user_id == caller)
            .ok_or_else(|| CoreError::not_found("Deck", deck_id))?;

        let card = input.into_card(caller, deck.id);
        validate_card(&card)?;
        self.cards
            .insert(&card)
            .await
            .map_err(store_failure("insert card"))?;
        self.adjust_count(deck.id, 1).await;

        tracing::debug!(card_id = %card.id, deck_id = %deck.id, user_id = caller, "Card created");
        Ok(card)
    }

    pub async fn find_by_id(&self, caller: &str, id: EntityId) -> ServiceResult<Card> {
        self.cards
            .find_visible(caller, id)
            .await
            .map_err(store_failure("find card"))?
            .ok_or_else(|| CoreError::not_found("Card", id))
    }

    /// Cards of a deck visible to the caller, in storage order.
    pub async fn find_by_deck(&self, caller: &str, deck_id: EntityId) -> ServiceResult<Vec<Card>> {
        self.cards
            .list_by_deck(caller, deck_id)
            .await
            .map_err(store_failure("list cards"))
    }

    pub async fn update(
        &self,
        caller: &str,
        id: EntityId,
        is_partial: bool,
        patch: CardPatch,
    ) -> ServiceResult<Card> {
        let mut card = self.find_by_id(caller, id).await?;
        patch.apply(&mut card, is_partial);
        validate_card(&card)?;

        let saved = self
            .cards
            .replace(caller, &card)
            .await
            .map_err(store_failure("replace card"))?
            .ok_or_else(|| CoreError::not_found("Card", id))?;

        tracing::debug!(card_id = %id, user_id = caller, is_partial, "Card updated");
        Ok(saved)
    }

    pub async fn delete(&self, caller: &str, id: EntityId) -> ServiceResult<()> {
        let card = self
            .cards
            .delete(caller, id)
            .await
            .map_err(store_failure("delete card"))?
            .ok_or_else(|| CoreError::not_found("Card", id))?;
        self.adjust_count(card.deck_id, -1).await;

        tracing::debug!(card_id = %id, user_id = caller, "Card deleted");
        Ok(())
    }

    /// Keep the deck's denormalized counter in step. Failures are logged.
    async fn adjust_count(&self, deck_id: EntityId, delta: i64) {
        if let Err(err) = self.decks.adjust_cards_count(deck_id, delta).await {
            tracing::warn!(deck_id = %deck_id, delta, error = %err, "Failed to adjust deck card count");
        }
    }
}

fn validate_card(card: &Card) -> ServiceResult<()> {
    validate_entity(card)?;
    validate_color(&card.color)
}
