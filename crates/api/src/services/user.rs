//! User service: account CRUD with password hashing.

use std::sync::Arc;

use typewriter_core::error::CoreError;
use typewriter_core::lookup::Lookup;
use typewriter_core::password::PasswordHasher;
use typewriter_core::types::DbId;
use typewriter_db::models::user::{User, UserRequest, UserResponse};
use typewriter_db::repositories::Repository;

/// Orchestrates user requests. Plaintext passwords stop here: only the hash
/// reaches the repository and no response carries it.
#[derive(Clone)]
pub struct UserService {
    repo: Arc<dyn Repository<User>>,
    hasher: Arc<dyn PasswordHasher>,
}

impl UserService {
    pub fn new(repo: Arc<dyn Repository<User>>, hasher: Arc<dyn PasswordHasher>) -> Self {
        Self { repo, hasher }
    }

    pub async fn get_all(&self) -> Result<Vec<UserResponse>, CoreError> {
        let users = self.repo.list().await?;
        Ok(users.into_iter().map(UserResponse::from).collect())
    }

    /// Fetch a user by id or username.
    pub async fn get_by_id_or_username(&self, lookup: &Lookup) -> Result<UserResponse, CoreError> {
        let user = self.repo.find_by_id_or_key(lookup).await?;
        Ok(user.into())
    }

    pub async fn create(&self, req: UserRequest) -> Result<UserResponse, CoreError> {
        req.check_create()?;

        let mut user = User::from_request(&req);
        let password = req.password.as_deref().unwrap_or_default();
        user.password_hash = self.hash(password)?;

        let created = self.repo.create(&user).await.inspect_err(|e| {
            tracing::error!(username = %user.username, error = %e, "Failed to create user");
        })?;

        tracing::info!(user_id = created.id, username = %created.username, "User created");
        Ok(created.into())
    }

    /// Merge the supplied fields into the stored user. A supplied password
    /// replaces the stored hash.
    pub async fn update(&self, mut req: UserRequest, id: DbId) -> Result<UserResponse, CoreError> {
        req.check_update()?;

        let mut user = self.repo.find_by_id_or_key(&Lookup::by_id(id)).await?;
        let password = req.password.take();
        user.merge(req);
        if let Some(password) = password {
            user.password_hash = self.hash(&password)?;
        }

        let updated = self.repo.update(&user).await.inspect_err(|e| {
            tracing::error!(user_id = id, error = %e, "Failed to update user");
        })?;

        tracing::info!(user_id = id, "User updated");
        Ok(updated.into())
    }

    pub async fn delete(&self, id: DbId) -> Result<bool, CoreError> {
        let deleted = self.repo.delete(id).await.inspect_err(|e| {
            tracing::error!(user_id = id, error = %e, "Failed to delete user");
        })?;
        tracing::info!(user_id = id, "User deleted");
        Ok(deleted)
    }

    fn hash(&self, password: &str) -> Result<String, CoreError> {
        self.hasher.hash(password).inspect_err(|e| {
            tracing::error!(error = %e, "Failed password hashing");
        })
    }
}
