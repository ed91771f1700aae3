//! Route definitions for the `/scores` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::score;
use crate::state::AppState;

/// Routes mounted at `/scores`.
///
/// ```text
/// GET    /        -> list
/// POST   /        -> create
/// GET    /{id}    -> get
/// PUT    /{id}    -> update
/// DELETE /{id}    -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(score::list).post(score::create))
        .route(
            "/{id}",
            get(score::get).put(score::update).delete(score::delete),
        )
}
