pub mod activity;
pub mod health;
pub mod score;
pub mod text;
pub mod user;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /users                      list, create
/// /users/{id}                 get (id or username), update, delete
///
/// /texts                      list, create
/// /texts/{id}                 get (id or title), update, delete
///
/// /activities                 list, create
/// /activities/{id}            get (id or name), update, delete
///
/// /scores                     list, create
/// /scores/{id}                get, update, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/users", user::router())
        .nest("/texts", text::router())
        .nest("/activities", activity::router())
        .nest("/scores", score::router())
}
