use axum::routing::get;
use axum::Router;

use crate::handlers::search;
use crate::state::AppState;

/// ```text
/// GET    /search        -> search
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/search", get(search::search))
}
