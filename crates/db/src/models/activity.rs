//! Activity (drill type) entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use typewriter_core::error::CoreError;
use typewriter_core::types::{DbId, Timestamp};
use validator::Validate;

use super::{assign, require, validate_request, Record};

/// A row from the `activities` table.
#[derive(Debug, Clone, Default, PartialEq, FromRow)]
pub struct Activity {
    pub id: DbId,
    pub name: String,
    pub description: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct ActivityRequest {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActivityResponse {
    pub id: DbId,
    pub name: String,
    pub description: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl ActivityRequest {
    pub fn check_create(&self) -> Result<(), CoreError> {
        require("name", &self.name)?;
        validate_request(self)
    }

    pub fn check_update(&self) -> Result<(), CoreError> {
        validate_request(self)
    }
}

impl Activity {
    pub fn from_request(req: &ActivityRequest) -> Self {
        Self {
            name: req.name.clone().unwrap_or_default(),
            description: req.description.clone().unwrap_or_default(),
            ..Self::default()
        }
    }

    pub fn merge(&mut self, req: ActivityRequest) {
        let ActivityRequest { name, description } = req;

        assign(&mut self.name, name);
        assign(&mut self.description, description);
    }
}

impl From<Activity> for ActivityResponse {
    fn from(activity: Activity) -> Self {
        Self {
            id: activity.id,
            name: activity.name,
            description: activity.description,
            created_at: activity.created_at,
            updated_at: activity.updated_at,
        }
    }
}

impl Record for Activity {
    const ENTITY: &'static str = "Activity";

    fn id(&self) -> DbId {
        self.id
    }

    fn set_id(&mut self, id: DbId) {
        self.id = id;
    }

    fn lookup_key(&self) -> Option<&str> {
        Some(&self.name)
    }

    fn created_at(&self) -> Timestamp {
        self.created_at
    }

    fn set_timestamps(&mut self, created_at: Timestamp, updated_at: Timestamp) {
        self.created_at = created_at;
        self.updated_at = updated_at;
    }
}
