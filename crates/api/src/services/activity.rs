//! Activity service: drill type CRUD.

use std::sync::Arc;

use typewriter_core::error::CoreError;
use typewriter_core::lookup::Lookup;
use typewriter_core::types::DbId;
use typewriter_db::models::activity::{Activity, ActivityRequest, ActivityResponse};
use typewriter_db::repositories::Repository;

#[derive(Clone)]
pub struct ActivityService {
    repo: Arc<dyn Repository<Activity>>,
}

impl ActivityService {
    pub fn new(repo: Arc<dyn Repository<Activity>>) -> Self {
        Self { repo }
    }

    pub async fn get_all(&self) -> Result<Vec<ActivityResponse>, CoreError> {
        let activities = self.repo.list().await?;
        Ok(activities.into_iter().map(ActivityResponse::from).collect())
    }

    /// Fetch an activity by id or name.
    pub async fn get_by_id_or_name(&self, lookup: &Lookup) -> Result<ActivityResponse, CoreError> {
        let activity = self.repo.find_by_id_or_key(lookup).await?;
        Ok(activity.into())
    }

    pub async fn create(&self, req: ActivityRequest) -> Result<ActivityResponse, CoreError> {
        req.check_create()?;

        let activity = Activity::from_request(&req);
        let created = self.repo.create(&activity).await.inspect_err(|e| {
            tracing::error!(name = %activity.name, error = %e, "Failed to create activity");
        })?;

        tracing::info!(activity_id = created.id, name = %created.name, "Activity created");
        Ok(created.into())
    }

    pub async fn update(&self, req: ActivityRequest, id: DbId) -> Result<ActivityResponse, CoreError> {
        req.check_update()?;

        let mut activity = self.repo.find_by_id_or_key(&Lookup::by_id(id)).await?;
        activity.merge(req);

        let updated = self.repo.update(&activity).await.inspect_err(|e| {
            tracing::error!(activity_id = id, error = %e, "Failed to update activity");
        })?;

        tracing::info!(activity_id = id, "Activity updated");
        Ok(updated.into())
    }

    pub async fn delete(&self, id: DbId) -> Result<bool, CoreError> {
        let deleted = self.repo.delete(id).await.inspect_err(|e| {
            tracing::error!(activity_id = id, error = %e, "Failed to delete activity");
        })?;
        tracing::info!(activity_id = id, "Activity deleted");
        Ok(deleted)
    }
}
