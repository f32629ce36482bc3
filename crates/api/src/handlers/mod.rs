pub mod card;
pub mod deck;
pub mod playlist;
pub mod review;
pub mod search;

use axum::http::HeaderName;

/// Response header carrying the total count of a paginated listing.
pub const X_TOTAL: HeaderName = HeaderName::from_static("x-total");
