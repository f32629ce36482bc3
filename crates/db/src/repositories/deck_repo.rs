//! Repository for the `decks` table.

use async_trait::async_trait;
use flashcards_core::types::EntityId;
use sqlx::PgPool;

use crate::models::deck::Deck;
use crate::repositories::{bounded, name_pattern, scope_clause};
use crate::store::{DeckStore, ListQuery, StoreResult};

/// Column list for `decks` queries.
const COLUMNS: &str = "\
    id, name, description, image_url, is_private, study_suggestions, \
    cards_count, play_count, user_id, created_at, updated_at";

/// PostgreSQL-backed [`DeckStore`].
pub struct DeckRepo {
    pool: PgPool,
}

impl DeckRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DeckStore for DeckRepo {
    async fn insert(&self, deck: &Deck) -> StoreResult<()> {
        let query = "\
            INSERT INTO decks \
                (id, name, description, image_url, is_private, study_suggestions, \
                 cards_count, play_count, user_id, created_at, updated_at) \
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)";
        bounded(
            sqlx::query(query)
                .bind(deck.id)
                .bind(&deck.name)
                .bind(&deck.description)
                .bind(&deck.image_url)
                .bind(deck.is_private)
                .bind(&deck.study_suggestions)
                .bind(deck.cards_count)
                .bind(deck.play_count)
                .bind(&deck.user_id)
                .bind(deck.created_at)
                .bind(deck.updated_at)
                .execute(&self.pool),
        )
        .await?;
        Ok(())
    }

    async fn find_visible(&self, caller: &str, id: EntityId) -> StoreResult<Option<Deck>> {
        let query = format!(
            "SELECT {COLUMNS} FROM decks \
             WHERE id = $2 AND (user_id = $1 OR is_private = FALSE)"
        );
        bounded(
            sqlx::query_as::<_, Deck>(&query)
                .bind(caller)
                .bind(id)
                .fetch_optional(&self.pool),
        )
        .await
    }

    async fn list(&self, caller: &str, query: &ListQuery) -> StoreResult<Vec<Deck>> {
        let sql = format!(
            "SELECT {COLUMNS} FROM decks \
             WHERE {} AND ($2::TEXT IS NULL OR name ILIKE $2) \
             ORDER BY created_at, id \
             LIMIT $3 OFFSET $4",
            scope_clause(query.scope)
        );
        bounded(
            sqlx::query_as::<_, Deck>(&sql)
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
            "SELECT COUNT(*) FROM decks \
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

    async fn replace(&self, owner: &str, deck: &Deck) -> StoreResult<Option<Deck>> {
        let query = format!(
            "UPDATE decks SET \
                name = $3, description = $4, image_url = $5, is_private = $6, \
                study_suggestions = $7, updated_at = $8 \
             WHERE id = $2 AND user_id = $1 \
             RETURNING {COLUMNS}"
        );
        bounded(
            sqlx::query_as::<_, Deck>(&query)
                .bind(owner)
                .bind(deck.id)
                .bind(&deck.name)
                .bind(&deck.description)
                .bind(&deck.image_url)
                .bind(deck.is_private)
                .bind(&deck.study_suggestions)
                .bind(deck.updated_at)
                .fetch_optional(&self.pool),
        )
        .await
    }

    async fn delete(&self, owner: &str, id: EntityId) -> StoreResult<Option<Deck>> {
        let query = format!("DELETE FROM decks WHERE id = $2 AND user_id = $1 RETURNING {COLUMNS}");
        bounded(
            sqlx::query_as::<_, Deck>(&query)
                .bind(owner)
                .bind(id)
                .fetch_optional(&self.pool),
        )
        .await
    }

    async fn adjust_cards_count(&self, id: EntityId, delta: i64) -> StoreResult<()> {
        bounded(
            sqlx::query("UPDATE decks SET cards_count = GREATEST(cards_count + $2, 0) WHERE id = $1")
                .bind(id)
                .bind(delta)
                .execute(&self.pool),
        )
        .await?;
        Ok(())
    }

    async fn increment_play_count(&self, id: EntityId) -> StoreResult<()> {
        bounded(
            sqlx::query("UPDATE decks SET play_count = play_count + 1 WHERE id = $1")
                .bind(id)
                .execute(&self.pool),
        )
        .await?;
        Ok(())
    }
}
