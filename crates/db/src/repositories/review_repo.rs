//! Repository for the `reviews` table.

use async_trait::async_trait;
use flashcards_core::review::OriginType;
use flashcards_core::types::EntityId;
use sqlx::types::Json;
use sqlx::PgPool;

use crate::models::review::Review;
use crate::repositories::bounded;
use crate::store::{ReviewStore, StoreResult};

/// Column list for `reviews` queries.
const COLUMNS: &str = "\
    id, origin_type, origin_id, user_id, hits, hits_count, \
    mistakes, mistakes_count, updated_at";

/// PostgreSQL-backed [`ReviewStore`].
pub struct ReviewRepo {
    pool: PgPool,
}

impl ReviewRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReviewStore for ReviewRepo {
    async fn insert(&self, review: &Review) -> StoreResult<()> {
        let query = "\
            INSERT INTO reviews \
                (id, origin_type, origin_id, user_id, hits, hits_count, \
                 mistakes, mistakes_count, updated_at) \
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)";
        bounded(
            sqlx::query(query)
                .bind(review.id)
                .bind(review.origin_type.as_str())
                .bind(review.origin_id)
                .bind(&review.user_id)
                .bind(Json(&review.hits))
                .bind(review.hits_count)
                .bind(Json(&review.mistakes))
                .bind(review.mistakes_count)
                .bind(review.updated_at)
                .execute(&self.pool),
        )
        .await?;
        Ok(())
    }

    async fn find_owned(&self, owner: &str, id: EntityId) -> StoreResult<Option<Review>> {
        let query = format!("SELECT {COLUMNS} FROM reviews WHERE id = $2 AND user_id = $1");
        bounded(
            sqlx::query_as::<_, Review>(&query)
                .bind(owner)
                .bind(id)
                .fetch_optional(&self.pool),
        )
        .await
    }

    async fn replace(&self, owner: &str, review: &Review) -> StoreResult<Option<Review>> {
        let query = format!(
            "UPDATE reviews SET \
                hits = $3, hits_count = $4, mistakes = $5, mistakes_count = $6, updated_at = $7 \
             WHERE id = $2 AND user_id = $1 \
             RETURNING {COLUMNS}"
        );
        bounded(
            sqlx::query_as::<_, Review>(&query)
                .bind(owner)
                .bind(review.id)
                .bind(Json(&review.hits))
                .bind(review.hits_count)
                .bind(Json(&review.mistakes))
                .bind(review.mistakes_count)
                .bind(review.updated_at)
                .fetch_optional(&self.pool),
        )
        .await
    }

    async fn recent(
        &self,
        owner: &str,
        origin_type: OriginType,
        limit: i64,
    ) -> StoreResult<Vec<Review>> {
        let query = format!(
            "SELECT {COLUMNS} FROM reviews \
             WHERE user_id = $1 AND origin_type = $2 \
             ORDER BY updated_at DESC \
             LIMIT $3"
        );
        bounded(
            sqlx::query_as::<_, Review>(&query)
                .bind(owner)
                .bind(origin_type.as_str())
                .bind(limit)
                .fetch_all(&self.pool),
        )
        .await
    }
}
