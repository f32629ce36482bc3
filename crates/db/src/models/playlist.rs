//! Playlist entity model and DTOs.

use chrono::Utc;
use flashcards_core::types::{new_id, EntityId, Timestamp, UserId};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::models::deck::DeckPreview;
use crate::models::{merge_list, merge_text};

/// A playlist row from the `playlists` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Validate)]
pub struct Playlist {
    pub id: EntityId,
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[validate(length(min = 1, max = 400))]
    pub description: String,
    #[validate(length(min = 1, max = 100))]
    pub image_url: String,
    pub is_private: bool,
    pub study_suggestions: Vec<String>,
    /// Ordered deck snapshots; may reference decks that no longer exist.
    #[sqlx(json)]
    pub decks: Vec<DeckPreview>,
    pub user_id: UserId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Playlist {
    /// Whether the playlist already references `deck_id`.
    pub fn references(&self, deck_id: EntityId) -> bool {
        self.decks.iter().any(|d| d.id == deck_id)
    }

    /// Projection returned by search.
    pub fn summary(&self) -> PlaylistSummary {
        PlaylistSummary {
            id: self.id,
            name: self.name.clone(),
            description: self.description.clone(),
            image_url: self.image_url.clone(),
            decks_count: self.decks.len(),
            user_id: self.user_id.clone(),
        }
    }
}

/// Search projection of a playlist.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlaylistSummary {
    pub id: EntityId,
    pub name: String,
    pub description: String,
    pub image_url: String,
    pub decks_count: usize,
    pub user_id: UserId,
}

/// DTO for creating a new playlist. Decks are added afterwards.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreatePlaylist {
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

impl CreatePlaylist {
    /// Build an unsaved, empty playlist owned by `owner`.
    pub fn into_playlist(self, owner: &str) -> Playlist {
        let now = Utc::now();
        Playlist {
            id: new_id(),
            name: self.name,
            description: self.description,
            image_url: self.image_url,
            is_private: self.is_private,
            study_suggestions: self.study_suggestions,
            decks: Vec::new(),
            user_id: owner.to_string(),
            created_at: now,
            updated_at: now,
        }
    }
}

/// DTO for updating an existing playlist. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PlaylistPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub is_private: Option<bool>,
    pub study_suggestions: Option<Vec<String>>,
    /// Set only by the deck add/remove operations, never from a request body.
    #[serde(skip)]
    pub decks: Option<Vec<DeckPreview>>,
}

impl PlaylistPatch {
    /// Apply the patch onto a stored playlist.
    ///
    /// The deck list is replaced only when the patch carries one, in either
    /// mode; an explicit empty list clears it.
    pub fn apply(self, playlist: &mut Playlist, is_partial: bool) {
        if is_partial {
            merge_text(&mut playlist.name, self.name);
            merge_text(&mut playlist.description, self.description);
            merge_text(&mut playlist.image_url, self.image_url);
            if let Some(is_private) = self.is_private {
                playlist.is_private = is_private;
            }
            merge_list(&mut playlist.study_suggestions, self.study_suggestions);
        } else {
            playlist.name = self.name.unwrap_or_default();
            playlist.description = self.description.unwrap_or_default();
            playlist.image_url = self.image_url.unwrap_or_default();
            playlist.is_private = self.is_private.unwrap_or_default();
            playlist.study_suggestions = self.study_suggestions.unwrap_or_default();
        }
        if let Some(decks) = self.decks {
            playlist.decks = decks;
        }
        playlist.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Playlist {
        CreatePlaylist {
            name: "Study".into(),
            description: "Evening set".into(),
            image_url: "study.png".into(),
            is_private: false,
            study_suggestions: vec![],
        }
        .into_playlist("u1")
    }

    fn preview(name: &str) -> DeckPreview {
        DeckPreview {
            id: new_id(),
            name: name.into(),
            image_url: format!("{name}.png"),
            user_id: "u1".into(),
        }
    }

    #[test]
    fn new_playlist_has_no_decks() {
        assert!(sample().decks.is_empty());
    }

    #[test]
    fn partial_patch_without_decks_keeps_decks() {
        let mut playlist = sample();
        playlist.decks = vec![preview("go")];
        PlaylistPatch {
            name: Some("Renamed".into()),
            ..Default::default()
        }
        .apply(&mut playlist, true);

        assert_eq!(playlist.name, "Renamed");
        assert_eq!(playlist.decks.len(), 1);
    }

    #[test]
    fn empty_deck_list_clears_decks() {
        let mut playlist = sample();
        playlist.decks = vec![preview("go")];
        PlaylistPatch {
            decks: Some(vec![]),
            ..Default::default()
        }
        .apply(&mut playlist, true);
        assert!(playlist.decks.is_empty());
    }

    #[test]
    fn request_body_cannot_set_decks() {
        let patch: PlaylistPatch = serde_json::from_value(serde_json::json!({
            "name": "x",
            "decks": [{"id": new_id(), "name": "d", "image_url": "", "user_id": "u"}]
        }))
        .unwrap();
        assert!(patch.decks.is_none());
    }

    #[test]
    fn references_matches_by_deck_id() {
        let mut playlist = sample();
        let p = preview("go");
        let id = p.id;
        playlist.decks.push(p);
        assert!(playlist.references(id));
        assert!(!playlist.references(new_id()));
    }

    #[test]
    fn summary_counts_decks() {
        let mut playlist = sample();
        playlist.decks = vec![preview("a"), preview("b")];
        assert_eq!(playlist.summary().decks_count, 2);
    }
}
