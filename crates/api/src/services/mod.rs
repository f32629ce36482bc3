//! Domain services.
//!
//! Services own the business rules and talk to storage only through the
//! store traits in [`flashcards_db::store`]. Store failures are logged here
//! and surface to callers as [`CoreError::Internal`].

use flashcards_core::error::CoreError;
use flashcards_db::store::StoreError;

pub mod card;
pub mod deck;
pub mod playlist;
pub mod review;
pub mod search;

pub type ServiceResult<T> = Result<T, CoreError>;

/// One page of a listing plus the total number of matching records.
#[derive(Debug, Clone)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: i64,
}

/// Map a store failure to `Internal`, logging the underlying cause.
pub(crate) fn store_failure(operation: &'static str) -> impl FnOnce(StoreError) -> CoreError {
    move |err| {
        tracing::error!(error = %err, operation, "Store call failed");
        CoreError::Internal(format!("{operation} failed"))
    }
}
