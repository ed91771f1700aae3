//! Repository for the `texts` table.

use async_trait::async_trait;
use sqlx::PgPool;
use typewriter_core::error::CoreError;
use typewriter_core::lookup::Lookup;
use typewriter_core::types::DbId;

use super::{classify_sqlx_error, Repository};
use crate::models::text::Text;
use crate::models::Record;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, text_type, title, difficulty, text_body, text_length, created_at, updated_at";

/// Typing drills, looked up by id or `title`.
#[derive(Debug, Clone)]
pub struct PgTextRepo {
    pool: PgPool,
}

impl PgTextRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Repository<Text> for PgTextRepo {
    async fn list(&self) -> Result<Vec<Text>, CoreError> {
        let query = format!("SELECT {COLUMNS} FROM texts ORDER BY id");
        sqlx::query_as::<_, Text>(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| classify_sqlx_error(Text::ENTITY, e))
    }

    async fn find_by_id_or_key(&self, lookup: &Lookup) -> Result<Text, CoreError> {
        if lookup.is_empty() {
            return Err(not_found(lookup));
        }
        let query = format!(
            "SELECT {COLUMNS} FROM texts WHERE id = $1 OR title = $2 ORDER BY id LIMIT 1"
        );
        sqlx::query_as::<_, Text>(&query)
            .bind(lookup.id)
            .bind(lookup.key.as_deref())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| classify_sqlx_error(Text::ENTITY, e))?
            .ok_or_else(|| not_found(lookup))
    }

    async fn create(&self, text: &Text) -> Result<Text, CoreError> {
        let query = format!(
            "INSERT INTO texts (text_type, title, difficulty, text_body, text_length)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Text>(&query)
            .bind(&text.text_type)
            .bind(&text.title)
            .bind(&text.difficulty)
            .bind(&text.text_body)
            .bind(text.text_length)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| classify_sqlx_error(Text::ENTITY, e))
    }

    async fn update(&self, text: &Text) -> Result<Text, CoreError> {
        let query = format!(
            "UPDATE texts SET
                text_type = $2,
                title = $3,
                difficulty = $4,
                text_body = $5,
                text_length = $6,
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Text>(&query)
            .bind(text.id)
            .bind(&text.text_type)
            .bind(&text.title)
            .bind(&text.difficulty)
            .bind(&text.text_body)
            .bind(text.text_length)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| classify_sqlx_error(Text::ENTITY, e))?
            .ok_or_else(|| CoreError::not_found(Text::ENTITY, text.id))
    }

    async fn delete(&self, id: DbId) -> Result<bool, CoreError> {
        let result = sqlx::query("DELETE FROM texts WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| classify_sqlx_error(Text::ENTITY, e))?;
        if result.rows_affected() == 0 {
            return Err(CoreError::not_found(Text::ENTITY, id));
        }
        Ok(true)
    }
}

fn not_found(lookup: &Lookup) -> CoreError {
    CoreError::NotFound {
        entity: Text::ENTITY,
        lookup: lookup.clone(),
    }
}
