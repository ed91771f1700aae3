//! Route definitions for the `/texts` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::text;
use crate::state::AppState;

/// Routes mounted at `/texts`.
///
/// ```text
/// GET    /        -> list
/// POST   /        -> create
/// GET    /{id}    -> get     (id or title)
/// PUT    /{id}    -> update
/// DELETE /{id}    -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(text::list).post(text::create))
        .route(
            "/{id}",
            get(text::get).put(text::update).delete(text::delete),
        )
}
