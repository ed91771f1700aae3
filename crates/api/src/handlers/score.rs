//! Handlers for the `/scores` resource. Scores have no natural key, so every
//! path segment must be a numeric id.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use typewriter_core::types::DbId;
use typewriter_db::models::score::{ScoreRequest, ScoreResponse};

use crate::error::{AppError, AppResult};
use crate::response::ScoreList;
use crate::state::AppState;

/// GET /api/v1/scores
pub async fn list(State(state): State<AppState>) -> AppResult<Json<ScoreList>> {
    let scores = state.scores.get_all().await?;
    Ok(Json(ScoreList { scores }))
}

/// GET /api/v1/scores/{id}
///
/// A non-numeric id is a 400 with the usual JSON error body.
pub async fn get(
    State(state): State<AppState>,
    Path(raw): Path<String>,
) -> AppResult<Json<ScoreResponse>> {
    let id: DbId = raw
        .parse()
        .map_err(|_| AppError::BadRequest(format!("Invalid score id '{raw}'")))?;
    Ok(Json(state.scores.get_by_id(id).await?))
}

/// POST /api/v1/scores
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<ScoreRequest>,
) -> AppResult<(StatusCode, Json<ScoreResponse>)> {
    let score = state.scores.create(input).await?;
    Ok((StatusCode::CREATED, Json(score)))
}

/// PUT /api/v1/scores/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<ScoreRequest>,
) -> AppResult<Json<ScoreResponse>> {
    Ok(Json(state.scores.update(input, id).await?))
}

/// DELETE /api/v1/scores/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<Json<bool>> {
    Ok(Json(state.scores.delete(id).await?))
}
