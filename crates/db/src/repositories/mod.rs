//! PostgreSQL implementations of the store traits.
//!
//! Each repository owns a clone of the pool. Every query runs under
//! [`STORE_TIMEOUT`]; exceeding it surfaces as [`StoreError::Timeout`].

use std::future::Future;
use std::time::Duration;

use crate::store::{ListQuery, Scope, StoreError, StoreResult};

pub mod card_repo;
pub mod deck_repo;
pub mod playlist_repo;
pub mod review_repo;

pub use card_repo::CardRepo;
pub use deck_repo::DeckRepo;
pub use playlist_repo::PlaylistRepo;
pub use review_repo::ReviewRepo;

/// Upper bound on any single store call.
pub const STORE_TIMEOUT: Duration = Duration::from_secs(10);

/// Run a query future under [`STORE_TIMEOUT`].
pub(crate) async fn bounded<T, F>(fut: F) -> StoreResult<T>
where
    F: Future<Output = Result<T, sqlx::Error>>,
{
    match tokio::time::timeout(STORE_TIMEOUT, fut).await {
        Ok(result) => result.map_err(StoreError::from),
        Err(_) => {
            tracing::warn!(timeout = ?STORE_TIMEOUT, "Store call timed out");
            Err(StoreError::Timeout(STORE_TIMEOUT))
        }
    }
}

/// `WHERE` condition for a listing scope. `$1` is always the caller.
pub(crate) fn scope_clause(scope: Scope) -> &'static str {
    match scope {
        Scope::Owned => "user_id = $1",
        Scope::Visible => "(user_id = $1 OR is_private = FALSE)",
    }
}

/// `ILIKE` pattern for the optional name filter, with wildcards escaped.
pub(crate) fn name_pattern(query: &ListQuery) -> Option<String> {
    query.name.as_deref().map(|name| {
        let escaped = name
            .replace('\\', "\\\\")
            .replace('%', "\\%")
            .replace('_', "\\_");
        format!("%{escaped}%")
    })
}
