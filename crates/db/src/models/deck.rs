//! Deck entity model and DTOs.

use chrono::Utc;
use flashcards_core::types::{new_id, EntityId, Timestamp, UserId};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::models::{merge_list, merge_text};

/// A deck row from the `decks` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Validate)]
pub struct Deck {
    pub id: EntityId,
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[validate(length(min = 1, max = 400))]
    pub description: String,
    #[validate(length(min = 1, max = 100))]
    pub image_url: String,
    pub is_private: bool,
    pub study_suggestions: Vec<String>,
    /// Maintained by card create/delete, never by deck updates.
    pub cards_count: i64,
    /// Incremented each time a deck review starts.
    pub play_count: i64,
    pub user_id: UserId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Deck {
    /// Snapshot stored inside playlists that reference this deck.
    pub fn preview(&self) -> DeckPreview {
        DeckPreview {
            id: self.id,
            name: self.name.clone(),
            image_url: self.image_url.clone(),
            user_id: self.user_id.clone(),
        }
    }

    /// Projection returned by search.
    pub fn summary(&self) -> DeckSummary {
        DeckSummary {
            id: self.id,
            name: self.name.clone(),
            description: self.description.clone(),
            image_url: self.image_url.clone(),
            cards_count: self.cards_count,
            user_id: self.user_id.clone(),
        }
    }
}

/// Denormalized deck reference embedded in a playlist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeckPreview {
    pub id: EntityId,
    pub name: String,
    pub image_url: String,
    pub user_id: UserId,
}

/// Search projection of a deck.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeckSummary {
    pub id: EntityId,
    pub name: String,
    pub description: String,
    pub image_url: String,
    pub cards_count: i64,
    pub user_id: UserId,
}

/// DTO for creating a new deck.
///
/// Missing text fields deserialize as empty and are rejected by validation.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateDeck {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub is_private: bool,
    #[serde(default)]
    pub study_suggestions: Vec<String>,
}

impl CreateDeck {
    /// Build an unsaved deck owned by `owner` with zeroed counters.
    pub fn into_deck(self, owner: &str) -> Deck {
        let now = Utc::now();
        Deck {
            id: new_id(),
            name: self.name,
            description: self.description,
            image_url: self.image_url,
            is_private: self.is_private,
            study_suggestions: self.study_suggestions,
            cards_count: 0,
            play_count: 0,
            user_id: owner.to_string(),
            created_at: now,
            updated_at: now,
        }
    }
}

/// DTO for updating an existing deck. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DeckPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub is_private: Option<bool>,
    pub study_suggestions: Option<Vec<String>>,
}

impl DeckPatch {
    /// Apply the patch onto a stored deck.
    ///
    /// Partial: supplied non-empty fields override, the rest are kept.
    /// Full: every editable field takes the supplied value or its empty
    /// default. Id, owner, counters and `created_at` are never touched.
    pub fn apply(self, deck: &mut Deck, is_partial: bool) {
        if is_partial {
            merge_text(&mut deck.name, self.name);
            merge_text(&mut deck.description, self.description);
            merge_text(&mut deck.image_url, self.image_url);
            if let Some(is_private) = self.is_private {
                deck.is_private = is_private;
            }
            merge_list(&mut deck.study_suggestions, self.study_suggestions);
        } else {
            deck.name = self.name.unwrap_or_default();
            deck.description = self.description.unwrap_or_default();
            deck.image_url = self.image_url.unwrap_or_default();
            deck.is_private = self.is_private.unwrap_or_default();
            deck.study_suggestions = self.study_suggestions.unwrap_or_default();
        }
        deck.updated_at = Utc::now();
    }
}
