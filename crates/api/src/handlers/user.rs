//! Handlers for the `/users` resource.
//!
//! `GET /users/{id}` accepts either a numeric id or a username.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use typewriter_core::lookup::Lookup;
use typewriter_core::types::DbId;
use typewriter_db::models::user::{UserRequest, UserResponse};

use crate::error::AppResult;
use crate::response::UserList;
use crate::state::AppState;

/// GET /api/v1/users
pub async fn list(State(state): State<AppState>) -> AppResult<Json<UserList>> {
    let users = state.users.get_all().await?;
    Ok(Json(UserList { users }))
}

/// GET /api/v1/users/{id}
pub async fn get(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> AppResult<Json<UserResponse>> {
    let user = state
        .users
        .get_by_id_or_username(&Lookup::parse(&key))
        .await?;
    Ok(Json(user))
}

/// POST /api/v1/users
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<UserRequest>,
) -> AppResult<(StatusCode, Json<UserResponse>)> {
    let user = state.users.create(input).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

/// PUT /api/v1/users/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UserRequest>,
) -> AppResult<Json<UserResponse>> {
    let user = state.users.update(input, id).await?;
    Ok(Json(user))
}

/// DELETE /api/v1/users/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<Json<bool>> {
    let deleted = state.users.delete(id).await?;
    Ok(Json(deleted))
}
