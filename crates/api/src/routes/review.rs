//! Route definitions for review sessions, mounted at `/reviews`.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::review;
use crate::state::AppState;

/// ```text
/// GET    /{id}          -> get_review
/// POST   /{id}/right    -> record_right
/// POST   /{id}/wrong    -> record_wrong
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/{id}", get(review::get_review))
        .route("/{id}/right", post(review::record_right))
        .route("/{id}/wrong", post(review::record_wrong))
}
