//! Repository for the `cards` table.

use async_trait::async_trait;
use flashcards_core::types::EntityId;
use sqlx::PgPool;

use crate::models::card::Card;
use crate::repositories::bounded;
use crate::store::{CardStore, StoreResult};

/// Column list for `cards` queries.
const COLUMNS: &str = "\
    id, deck_id, front, back, color, is_private, user_id, created_at, updated_at";

/// PostgreSQL-backed [`CardStore`].
pub struct CardRepo {
    pool: PgPool,
}

impl CardRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CardStore for CardRepo {
    async fn insert(&self, card: &Card) -> StoreResult<()> {
        let query = "\
            INSERT INTO cards \
                (id, deck_id, front, back, color, is_private, user_id, created_at, updated_at) \
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)";
        bounded(
            sqlx::query(query)
                .bind(card.id)
                .bind(card.deck_id)
                .bind(&card.front)
                .bind(&card.back)
                .bind(&card.color)
                .bind(card.is_private)
                .bind(&card.user_id)
                .bind(card.created_at)
                .bind(card.updated_at)
                .execute(&self.pool),
        )
        .await?;
        Ok(())
    }

    async fn find_visible(&self, caller: &str, id: EntityId) -> StoreResult<Option<Card>> {
        let query = format!(
            "SELECT {COLUMNS} FROM cards \
             WHERE id = $2 AND (user_id = $1 OR is_private = FALSE)"
        );
        bounded(
            sqlx::query_as::<_, Card>(&query)
                .bind(caller)
                .bind(id)
                .fetch_optional(&self.pool),
        )
        .await
    }

    async fn list_by_deck(&self, caller: &str, deck_id: EntityId) -> StoreResult<Vec<Card>> {
        let query = format!(
            "SELECT {COLUMNS} FROM cards \
             WHERE deck_id = $2 AND (user_id = $1 OR is_private = FALSE) \
             ORDER BY created_at, id"
        );
        bounded(
            sqlx::query_as::<_, Card>(&query)
                .bind(caller)
                .bind(deck_id)
                .fetch_all(&self.pool),
        )
        .await
    }

    async fn replace(&self, owner: &str, card: &Card) -> StoreResult<Option<Card>> {
        let query = format!(
            "UPDATE cards SET \
                front = $3, back = $4, color = $5, is_private = $6, updated_at = $7 \
             WHERE id = $2 AND user_id = $1 \
             RETURNING {COLUMNS}"
        );
        bounded(
            sqlx::query_as::<_, Card>(&query)
                .bind(owner)
                .bind(card.id)
                .bind(&card.front)
                .bind(&card.back)
                .bind(&card.color)
                .bind(card.is_private)
                .bind(card.updated_at)
                .fetch_optional(&self.pool),
        )
        .await
    }

    async fn delete(&self, owner: &str, id: EntityId) -> StoreResult<Option<Card>> {
        let query = format!("DELETE FROM cards WHERE id = $2 AND user_id = $1 RETURNING {COLUMNS}");
        bounded(
            sqlx::query_as::<_, Card>(&query)
                .bind(owner)
                .bind(id)
                .fetch_optional(&self.pool),
        )
        .await
    }
}
