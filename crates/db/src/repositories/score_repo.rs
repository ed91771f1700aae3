//! Repository for the `scores` table.

use async_trait::async_trait;
use sqlx::PgPool;
use typewriter_core::error::CoreError;
use typewriter_core::lookup::Lookup;
use typewriter_core::types::DbId;

use super::{classify_sqlx_error, Repository};
use crate::models::score::Score;
use crate::models::Record;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, user_id, activity_id, text_id, points, duration, errors, created_at, updated_at";

/// Practice results. Scores have no alternate key, so lookups match on id only.
#[derive(Debug, Clone)]
pub struct PgScoreRepo {
    pool: PgPool,
}

impl PgScoreRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Repository<Score> for PgScoreRepo {
    async fn list(&self) -> Result<Vec<Score>, CoreError> {
        let query = format!("SELECT {COLUMNS} FROM scores ORDER BY id");
        sqlx::query_as::<_, Score>(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| classify_sqlx_error(Score::ENTITY, e))
    }

    async fn find_by_id_or_key(&self, lookup: &Lookup) -> Result<Score, CoreError> {
        let Some(id) = lookup.id else {
            return Err(CoreError::NotFound {
                entity: Score::ENTITY,
                lookup: lookup.clone(),
            });
        };
        let query = format!("SELECT {COLUMNS} FROM scores WHERE id = $1");
        sqlx::query_as::<_, Score>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| classify_sqlx_error(Score::ENTITY, e))?
            .ok_or_else(|| CoreError::not_found(Score::ENTITY, id))
    }

    async fn create(&self, score: &Score) -> Result<Score, CoreError> {
        let query = format!(
            "INSERT INTO scores (user_id, activity_id, text_id, points, duration, errors)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Score>(&query)
            .bind(score.user_id)
            .bind(score.activity_id)
            .bind(score.text_id)
            .bind(score.points)
            .bind(score.duration)
            .bind(score.errors)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| classify_sqlx_error(Score::ENTITY, e))
    }

    async fn update(&self, score: &Score) -> Result<Score, CoreError> {
        let query = format!(
            "UPDATE scores SET
                user_id = $2,
                activity_id = $3,
                text_id = $4,
                points = $5,
                duration = $6,
                errors = $7,
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Score>(&query)
            .bind(score.id)
            .bind(score.user_id)
            .bind(score.activity_id)
            .bind(score.text_id)
            .bind(score.points)
            .bind(score.duration)
            .bind(score.errors)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| classify_sqlx_error(Score::ENTITY, e))?
            .ok_or_else(|| CoreError::not_found(Score::ENTITY, score.id))
    }

    async fn delete(&self, id: DbId) -> Result<bool, CoreError> {
        let result = sqlx::query("DELETE FROM scores WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| classify_sqlx_error(Score::ENTITY, e))?;
        if result.rows_affected() == 0 {
            return Err(CoreError::not_found(Score::ENTITY, id));
        }
        Ok(true)
    }
}
