//! Score service: practice result CRUD. Scores are addressed by id only.

use std::sync::Arc;

use typewriter_core::error::CoreError;
use typewriter_core::lookup::Lookup;
use typewriter_core::types::DbId;
use typewriter_db::models::score::{Score, ScoreRequest, ScoreResponse};
use typewriter_db::repositories::Repository;

#[derive(Clone)]
pub struct ScoreService {
    repo: Arc<dyn Repository<Score>>,
}

impl ScoreService {
    pub fn new(repo: Arc<dyn Repository<Score>>) -> Self {
        Self { repo }
    }

    pub async fn get_all(&self) -> Result<Vec<ScoreResponse>, CoreError> {
        let scores = self.repo.list().await?;
        Ok(scores.into_iter().map(ScoreResponse::from).collect())
    }

    pub async fn get_by_id(&self, id: DbId) -> Result<ScoreResponse, CoreError> {
        let score = self.repo.find_by_id_or_key(&Lookup::by_id(id)).await?;
        Ok(score.into())
    }

    pub async fn create(&self, req: ScoreRequest) -> Result<ScoreResponse, CoreError> {
        req.check_create()?;

        let score = Score::from_request(&req);
        let created = self.repo.create(&score).await.inspect_err(|e| {
            tracing::error!(
                user_id = score.user_id,
                activity_id = score.activity_id,
                text_id = score.text_id,
                error = %e,
                "Failed to create score"
            );
        })?;

        tracing::info!(score_id = created.id, user_id = created.user_id, "Score created");
        Ok(created.into())
    }

    pub async fn update(&self, req: ScoreRequest, id: DbId) -> Result<ScoreResponse, CoreError> {
        req.check_update()?;

        let mut score = self.repo.find_by_id_or_key(&Lookup::by_id(id)).await?;
        score.merge(req);

        let updated = self.repo.update(&score).await.inspect_err(|e| {
            tracing::error!(score_id = id, error = %e, "Failed to update score");
        })?;

        tracing::info!(score_id = id, "Score updated");
        Ok(updated.into())
    }

    pub async fn delete(&self, id: DbId) -> Result<bool, CoreError> {
        let deleted = self.repo.delete(id).await.inspect_err(|e| {
            tracing::error!(score_id = id, error = %e, "Failed to delete score");
        })?;
        tracing::info!(score_id = id, "Score deleted");
        Ok(deleted)
    }
}
