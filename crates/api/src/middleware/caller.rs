//! Caller identity extractor.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use flashcards_core::error::CoreError;

use crate::error::AppError;

/// Header carrying the caller's user id. Header names are case-insensitive.
pub const USER_ID_HEADER: &str = "userid";

/// The user on whose behalf a request runs.
///
/// Every `/api/v1` handler takes this extractor; a missing or blank header
/// rejects the request with 403.
#[derive(Debug, Clone)]
pub struct Caller {
    pub user_id: String,
}

impl<S> FromRequestParts<S> for Caller
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let user_id = parts
            .headers
            .get(USER_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .ok_or_else(|| {
                AppError::Core(CoreError::Forbidden("Missing userId header".into()))
            })?;

        Ok(Caller {
            user_id: user_id.to_string(),
        })
    }
}
