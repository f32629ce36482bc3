//! Repository for the `playlists` table.
//!
//! The deck list is stored as a JSONB array of deck previews.

use async_trait::async_trait;
use flashcards_core::types::EntityId;
use sqlx::types::Json;
use sqlx::PgPool;

use crate::models::playlist::Playlist;
use crate::repositories::{bounded, name_pattern, scope_clause};
use crate::store::{ListQuery, PlaylistStore, StoreResult};

/// Column list for `playlists` queries.
const COLUMNS: &str = "\
    id, name, description, image_url, is_private, study_suggestions, \
    decks, user_id, created_at, updated_at";

/// PostgreSQL-backed [`PlaylistStore`].
pub struct PlaylistRepo {
    pool: PgPool,
}

impl PlaylistRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PlaylistStore for PlaylistRepo {
    async fn insert(&self, playlist: &Playlist) -> StoreResult<()> {
        let query = "\
            INSERT INTO playlists \
                (id, name, description, image_url, is_private, study_suggestions, \
                 decks, user_id, created_at, updated_at) \
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)";
        bounded(
            sqlx::query(query)
                .bind(playlist.id)
                .bind(&playlist.name)
                .bind(&playlist.description)
                .bind(&playlist.image_url)
                .bind(playlist.is_private)
                .bind(&playlist.study_suggestions)
                .bind(Json(&playlist.decks))
                .bind(&playlist.user_id)
                .bind(playlist.created_at)
                .bind(playlist.updated_at)
                .execute(&self.pool),
        )
        .await?;
        Ok(())
    }

    async fn find_visible(&self, caller: &str, id: EntityId) -> StoreResult<Option<Playlist>> {
        let query = format!(
            "SELECT {COLUMNS} FROM playlists \
             WHERE id = $2 AND (user_id = $1 OR is_private = FALSE)"
        );
        bounded(
            sqlx::query_as::<_, Playlist>(&query)
                .bind(caller)
                .bind(id)
                .fetch_optional(&self.pool),
        )
        .await
    }

    async fn list(&self, caller: &str, query: &ListQuery) -> StoreResult<Vec<Playlist>> {
        let sql = format!(
            "SELECT {COLUMNS} FROM playlists \
             WHERE {} AND ($2::TEXT IS NULL OR name ILIKE $2) \
             ORDER BY created_at, id \
             LIMIT $3 OFFSET $4",
            scope_clause(query.scope)
        );
        bounded(
            sqlx::query_as::<_, Playlist>(&sql)
                .bind(caller)
                .bind(name_pattern(query))
                .bind(query.pagination.limit)
                .bind(query.pagination.skip())
                .fetch_all(&self.pool),
        )
        .await
    }

    async fn count(&self, caller: &str, query: &ListQuery) -> StoreResult<i64> {
        let sql = format!(
            "SELECT COUNT(*) FROM playlists \
             WHERE {} AND ($2::TEXT IS NULL OR name ILIKE $2)",
            scope_clause(query.scope)
        );
        bounded(
            sqlx::query_scalar::<_, i64>(&sql)
                .bind(caller)
                .bind(name_pattern(query))
                .fetch_one(&self.pool),
        )
        .await
    }

    async fn replace(&self, owner: &str, playlist: &Playlist) -> StoreResult<Option<Playlist>> {
        let query = format!(
            "UPDATE playlists SET \
                name = $3, description = $4, image_url = $5, is_private = $6, \
                study_suggestions = $7, decks = $8, updated_at = $9 \
             WHERE id = $2 AND user_id = $1 \
             RETURNING {COLUMNS}"
        );
        bounded(
            sqlx::query_as::<_, Playlist>(&query)
                .bind(owner)
                .bind(playlist.id)
                .bind(&playlist.name)
                .bind(&playlist.description)
                .bind(&playlist.image_url)
                .bind(playlist.is_private)
                .bind(&playlist.study_suggestions)
                .bind(Json(&playlist.decks))
                .bind(playlist.updated_at)
                .fetch_optional(&self.pool),
        )
        .await
    }

    async fn delete(&self, owner: &str, id: EntityId) -> StoreResult<Option<Playlist>> {
        let query =
            format!("DELETE FROM playlists WHERE id = $2 AND user_id = $1 RETURNING {COLUMNS}");
        bounded(
            sqlx::query_as::<_, Playlist>(&query)
                .bind(owner)
                .bind(id)
                .fetch_optional(&self.pool),
        )
        .await
    }
}
