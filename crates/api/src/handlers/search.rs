use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;

use crate::error::AppResult;
use crate::extract::AppQuery;
use crate::middleware::caller::Caller;
use crate::query::ListParams;
use crate::state::AppState;

/// GET /api/v1/search?filter=&limit=&page=
///
/// Playlists and decks visible to the caller whose names contain `filter`.
pub async fn search(
    caller: Caller,
    State(state): State<AppState>,
    AppQuery(params): AppQuery<ListParams>,
) -> AppResult<impl IntoResponse> {
    let hits = state
        .search
        .search(&caller.user_id, params.name_filter(), params.pagination())
        .await?;
    Ok(Json(hits))
}
