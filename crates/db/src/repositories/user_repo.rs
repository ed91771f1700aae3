//! Repository for the `users` table.

use async_trait::async_trait;
use sqlx::PgPool;
use typewriter_core::error::CoreError;
use typewriter_core::lookup::Lookup;
use typewriter_core::types::DbId;

use super::{classify_sqlx_error, Repository};
use crate::models::user::User;
use crate::models::Record;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, user_type, username, password_hash, name, email, created_at, updated_at";

/// Users, looked up by id or `username`.
#[derive(Debug, Clone)]
pub struct PgUserRepo {
    pool: PgPool,
}

impl PgUserRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Repository<User> for PgUserRepo {
    async fn list(&self) -> Result<Vec<User>, CoreError> {
        let query = format!("SELECT {COLUMNS} FROM users ORDER BY id");
        sqlx::query_as::<_, User>(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| classify_sqlx_error(User::ENTITY, e))
    }

    async fn find_by_id_or_key(&self, lookup: &Lookup) -> Result<User, CoreError> {
        if lookup.is_empty() {
            return Err(not_found(lookup));
        }
        let query = format!(
            "SELECT {COLUMNS} FROM users WHERE id = $1 OR username = $2 ORDER BY id LIMIT 1"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(lookup.id)
            .bind(lookup.key.as_deref())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| classify_sqlx_error(User::ENTITY, e))?
            .ok_or_else(|| not_found(lookup))
    }

    async fn create(&self, user: &User) -> Result<User, CoreError> {
        let query = format!(
            "INSERT INTO users (user_type, username, password_hash, name, email)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(&user.user_type)
            .bind(&user.username)
            .bind(&user.password_hash)
            .bind(&user.name)
            .bind(&user.email)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| classify_sqlx_error(User::ENTITY, e))
    }

    async fn update(&self, user: &User) -> Result<User, CoreError> {
        let query = format!(
            "UPDATE users SET
                user_type = $2,
                username = $3,
                password_hash = $4,
                name = $5,
                email = $6,
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(user.id)
            .bind(&user.user_type)
            .bind(&user.username)
            .bind(&user.password_hash)
            .bind(&user.name)
            .bind(&user.email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| classify_sqlx_error(User::ENTITY, e))?
            .ok_or_else(|| CoreError::not_found(User::ENTITY, user.id))
    }

    async fn delete(&self, id: DbId) -> Result<bool, CoreError> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| classify_sqlx_error(User::ENTITY, e))?;
        if result.rows_affected() == 0 {
            return Err(CoreError::not_found(User::ENTITY, id));
        }
        Ok(true)
    }
}

fn not_found(lookup: &Lookup) -> CoreError {
    CoreError::NotFound {
        entity: User::ENTITY,
        lookup: lookup.clone(),
    }
}
