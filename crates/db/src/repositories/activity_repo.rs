//! Repository for the `activities` table.

use async_trait::async_trait;
use sqlx::PgPool;
use typewriter_core::error::CoreError;
use typewriter_core::lookup::Lookup;
use typewriter_core::types::DbId;

use super::{classify_sqlx_error, Repository};
use crate::models::activity::Activity;
use crate::models::Record;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, description, created_at, updated_at";

/// Drill types, looked up by id or `name`.
#[derive(Debug, Clone)]
pub struct PgActivityRepo {
    pool: PgPool,
}

impl PgActivityRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Repository<Activity> for PgActivityRepo {
    async fn list(&self) -> Result<Vec<Activity>, CoreError> {
        let query = format!("SELECT {COLUMNS} FROM activities ORDER BY id");
        sqlx::query_as::<_, Activity>(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| classify_sqlx_error(Activity::ENTITY, e))
    }

    async fn find_by_id_or_key(&self, lookup: &Lookup) -> Result<Activity, CoreError> {
        if lookup.is_empty() {
            return Err(not_found(lookup));
        }
        let query = format!(
            "SELECT {COLUMNS} FROM activities WHERE id = $1 OR name = $2 ORDER BY id LIMIT 1"
        );
        sqlx::query_as::<_, Activity>(&query)
            .bind(lookup.id)
            .bind(lookup.key.as_deref())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| classify_sqlx_error(Activity::ENTITY, e))?
            .ok_or_else(|| not_found(lookup))
    }

    async fn create(&self, activity: &Activity) -> Result<Activity, CoreError> {
        let query = format!(
            "INSERT INTO activities (name, description)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Activity>(&query)
            .bind(&activity.name)
            .bind(&activity.description)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| classify_sqlx_error(Activity::ENTITY, e))
    }

    async fn update(&self, activity: &Activity) -> Result<Activity, CoreError> {
        let query = format!(
            "UPDATE activities SET
                name = $2,
                description = $3,
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Activity>(&query)
            .bind(activity.id)
            .bind(&activity.name)
            .bind(&activity.description)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| classify_sqlx_error(Activity::ENTITY, e))?
            .ok_or_else(|| CoreError::not_found(Activity::ENTITY, activity.id))
    }

    async fn delete(&self, id: DbId) -> Result<bool, CoreError> {
        let result = sqlx::query("DELETE FROM activities WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| classify_sqlx_error(Activity::ENTITY, e))?;
        if result.rows_affected() == 0 {
            return Err(CoreError::not_found(Activity::ENTITY, id));
        }
        Ok(true)
    }
}

fn not_found(lookup: &Lookup) -> CoreError {
    CoreError::NotFound {
        entity: Activity::ENTITY,
        lookup: lookup.clone(),
    }
}
