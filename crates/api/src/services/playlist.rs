use std::sync::Arc;

use flashcards_core::error::CoreError;
use flashcards_core::types::EntityId;
use flashcards_core::validation::validate_entity;
use flashcards_db::models::playlist::{CreatePlaylist, Playlist, PlaylistPatch};
use flashcards_db::store::{ListQuery, PlaylistStore};

use crate::services::deck::DeckService;
use crate::services::{store_failure, Page, ServiceResult};

pub struct PlaylistService {
    playlists: Arc<dyn PlaylistStore>,
    decks: Arc<DeckService>,
}

impl PlaylistService {
    pub fn new(playlists: Arc<dyn PlaylistStore>, decks: Arc<DeckService>) -> Self {
        Self { playlists, decks }
    }

    pub async fn create(&self, caller: &str, input: CreatePlaylist) -> ServiceResult<Playlist> {
        let playlist = input.into_playlist(caller);
        validate_entity(&playlist)?;
        self.playlists
            .insert(&playlist)
            .await
            .map_err(store_failure("insert playlist"))?;

        tracing::debug!(playlist_id = %playlist.id, user_id = caller, "Playlist created");
        Ok(playlist)
    }

    pub async fn find_by_id(&self, caller: &str, id: EntityId) -> ServiceResult<Playlist> {
        self.playlists
            .find_visible(caller, id)
            .await
            .map_err(store_failure("find playlist"))?
            .ok_or_else(|| CoreError::not_found("Playlist", id))
    }

    pub async fn find_by_owner(
        &self,
        caller: &str,
        query: &ListQuery,
    ) -> ServiceResult<Page<Playlist>> {
        let items = self
            .playlists
            .list(caller, query)
            .await
            .map_err(store_failure("list playlists"))?;
        let total = self
            .playlists
            .count(caller, query)
            .await
            .map_err(store_failure("count playlists"))?;
        Ok(Page { items, total })
    }

    pub async fn update(
        &self,
        caller: &str,
        id: EntityId,
        is_partial: bool,
        patch: PlaylistPatch,
    ) -> ServiceResult<Playlist> {
        let mut playlist = self.find_by_id(caller, id).await?;
        patch.apply(&mut playlist, is_partial);
        self.save(caller, &playlist).await
    }

    pub async fn delete(&self, caller: &str, id: EntityId) -> ServiceResult<()> {
        self.playlists
            .delete(caller, id)
            .await
            .map_err(store_failure("delete playlist"))?
            .ok_or_else(|| CoreError::not_found("Playlist", id))?;

        tracing::debug!(playlist_id = %id, user_id = caller, "Playlist deleted");
        Ok(())
    }

    /// Append a visible deck to the playlist. Adding a deck twice is a no-op.
    pub async fn add_deck_reference(
        &self,
        caller: &str,
        playlist_id: EntityId,
        deck_id: EntityId,
    ) -> ServiceResult<Playlist> {
        let mut playlist = self.find_by_id(caller, playlist_id).await?;
        let deck = self.decks.find_by_id(caller, deck_id).await?;
        if playlist.references(deck.id) {
            return Ok(playlist);
        }

        let mut decks = playlist.decks.clone();
        decks.push(deck.preview());
        PlaylistPatch {
            decks: Some(decks),
            ..Default::default()
        }
        .apply(&mut playlist, true);
        self.save(caller, &playlist).await
    }

    pub async fn remove_deck_reference(
        &self,
        caller: &str,
        playlist_id: EntityId,
        deck_id: EntityId,
    ) -> ServiceResult<Playlist> {
        let mut playlist = self.find_by_id(caller, playlist_id).await?;
        if !playlist.references(deck_id) {
            return Err(CoreError::not_found("Deck", deck_id));
        }

        let decks = playlist
            .decks
            .iter()
            .filter(|d| d.id != deck_id)
            .cloned()
            .collect();
        PlaylistPatch {
            decks: Some(decks),
            ..Default::default()
        }
        .apply(&mut playlist, true);
        self.save(caller, &playlist).await
    }

    /// Validate and persist a merged playlist with an owner filter.
    async fn save(&self, caller: &str, playlist: &Playlist) -> ServiceResult<Playlist> {
        validate_entity(playlist)?;
        let saved = self
            .playlists
            .replace(caller, playlist)
            .await
            .map_err(store_failure("replace playlist"))?
            .ok_or_else(|| CoreError::not_found("Playlist", playlist.id))?;

        tracing::debug!(
            playlist_id = %saved.id,
            user_id = caller,
            decks = saved.decks.len(),
            "Playlist updated"
        );
        Ok(saved)
    }
}
