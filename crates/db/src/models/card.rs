//! Card entity model and DTOs.

use chrono::Utc;
use flashcards_core::types::{new_id, EntityId, Timestamp, UserId};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::models::merge_text;

/// A card row from the `cards` table.
///
/// Also deserializable: review sessions embed full card snapshots, and the
/// record-result endpoints receive a card as their body.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize, Validate)]
pub struct Card {
    pub id: EntityId,
    pub deck_id: EntityId,
    #[validate(length(min = 1, max = 400))]
    pub front: String,
    #[validate(length(max = 400))]
    pub back: String,
    /// Empty or `#RRGGBB`.
    pub color: String,
    pub is_private: bool,
    pub user_id: UserId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new card inside a deck.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateCard {
    #[serde(default)]
    pub front: String,
    #[serde(default)]
    pub back: String,
    #[serde(default)]
    pub color: String,
    #[serde(default)]
    pub is_private: bool,
}

impl CreateCard {
    /// Build an unsaved card in `deck_id` owned by `owner`.
    pub fn into_card(self, owner: &str, deck_id: EntityId) -> Card {
        let now = Utc::now();
        Card {
            id: new_id(),
            deck_id,
            front: self.front,
            back: self.back,
            color: self.color,
            is_private: self.is_private,
            user_id: owner.to_string(),
            created_at: now,
            updated_at: now,
        }
    }
}

/// DTO for updating an existing card. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CardPatch {
    pub front: Option<String>,
    pub back: Option<String>,
    pub color: Option<String>,
    pub is_private: Option<bool>,
}

impl CardPatch {
    /// Apply the patch onto a stored card. The owning deck never changes.
    pub fn apply(self, card: &mut Card, is_partial: bool) {
        if is_partial {
            merge_text(&mut card.front, self.front);
            merge_text(&mut card.back, self.back);
            merge_text(&mut card.color, self.color);
            if let Some(is_private) = self.is_private {
                card.is_private = is_private;
            }
        } else {
            card.front = self.front.unwrap_or_default();
            card.back = self.back.unwrap_or_default();
            card.color = self.color.unwrap_or_default();
            card.is_private = self.is_private.unwrap_or_default();
        }
        card.updated_at = Utc::now();
    }
}
