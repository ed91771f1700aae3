use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use typewriter_core::lookup::Lookup;
use typewriter_core::types::DbId;
use typewriter_db::models::activity::{ActivityRequest, ActivityResponse};

use crate::error::AppResult;
use crate::response::ActivityList;
use crate::state::AppState;

/// GET /api/v1/activities
pub async fn list(State(state): State<AppState>) -> AppResult<Json<ActivityList>> {
    let activities = state.activities.get_all().await?;
    Ok(Json(ActivityList { activities }))
}

/// GET /api/v1/activities/{id}
pub async fn get(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> AppResult<Json<ActivityResponse>> {
    let activity = state
        .activities
        .get_by_id_or_name(&Lookup::parse(&key))
        .await?;
    Ok(Json(activity))
}

/// POST /api/v1/activities
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<ActivityRequest>,
) -> AppResult<(StatusCode, Json<ActivityResponse>)> {
    let activity = state.activities.create(input).await?;
    Ok((StatusCode::CREATED, Json(activity)))
}

/// PUT /api/v1/activities/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<ActivityRequest>,
) -> AppResult<Json<ActivityResponse>> {
    Ok(Json(state.activities.update(input, id).await?))
}

/// DELETE /api/v1/activities/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<Json<bool>> {
    Ok(Json(state.activities.delete(id).await?))
}
