//! Handlers for the `/texts` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use typewriter_core::lookup::Lookup;
use typewriter_core::types::DbId;
use typewriter_db::models::text::{TextRequest, TextResponse};

use crate::error::AppResult;
use crate::response::TextList;
use crate::state::AppState;

/// GET /api/v1/texts
pub async fn list(State(state): State<AppState>) -> AppResult<Json<TextList>> {
    let texts = state.texts.get_all().await?;
    Ok(Json(TextList { texts }))
}

/// GET /api/v1/texts/{id}
///
/// Non-numeric path segments are matched against the title.
pub async fn get(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> AppResult<Json<TextResponse>> {
    let text = state.texts.get_by_id_or_title(&Lookup::parse(&key)).await?;
    Ok(Json(text))
}

/// POST /api/v1/texts
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<TextRequest>,
) -> AppResult<(StatusCode, Json<TextResponse>)> {
    let text = state.texts.create(input).await?;
    Ok((StatusCode::CREATED, Json(text)))
}

/// PUT /api/v1/texts/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<TextRequest>,
) -> AppResult<Json<TextResponse>> {
    Ok(Json(state.texts.update(input, id).await?))
}

/// DELETE /api/v1/texts/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<Json<bool>> {
    Ok(Json(state.texts.delete(id).await?))
}
