//! Score (practice result) entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use typewriter_core::error::CoreError;
use typewriter_core::types::{DbId, Timestamp};
use validator::Validate;

use super::{assign, non_negative, require, validate_request, Record};

/// A row from the `scores` table.
///
/// `user_id`, `activity_id` and `text_id` are foreign keys enforced by the
/// database, not by this crate.
#[derive(Debug, Clone, Default, PartialEq, FromRow)]
pub struct Score {
    pub id: DbId,
    pub user_id: DbId,
    pub activity_id: DbId,
    pub text_id: DbId,
    pub points: i32,
    /// Seconds spent on the drill.
    pub duration: i32,
    pub errors: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct ScoreRequest {
    pub user_id: Option<DbId>,
    pub activity_id: Option<DbId>,
    pub text_id: Option<DbId>,
    pub points: Option<i32>,
    #[validate(range(min = 0, message = "duration must not be negative"))]
    pub duration: Option<i32>,
    pub errors: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreResponse {
    pub id: DbId,
    pub user_id: DbId,
    pub activity_id: DbId,
    pub text_id: DbId,
    pub points: i32,
    pub duration: i32,
    pub errors: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl ScoreRequest {
    /// A new score must reference a user, an activity and a text.
    pub fn check_create(&self) -> Result<(), CoreError> {
        require("user_id", &self.user_id)?;
        require("activity_id", &self.activity_id)?;
        require("text_id", &self.text_id)?;
        self.check_update()
    }

    pub fn check_update(&self) -> Result<(), CoreError> {
        non_negative("errors", self.errors)?;
        validate_request(self)
    }
}

impl Score {
    pub fn from_request(req: &ScoreRequest) -> Self {
        Self {
            user_id: req.user_id.unwrap_or_default(),
            activity_id: req.activity_id.unwrap_or_default(),
            text_id: req.text_id.unwrap_or_default(),
            points: req.points.unwrap_or_default(),
            duration: req.duration.unwrap_or_default(),
            errors: req.errors.unwrap_or_default(),
            ..Self::default()
        }
    }

    pub fn merge(&mut self, req: ScoreRequest) {
        let ScoreRequest {
            user_id,
            activity_id,
            text_id,
            points,
            duration,
            errors,
        } = req;

        assign(&mut self.user_id, user_id);
        assign(&mut self.activity_id, activity_id);
        assign(&mut self.text_id, text_id);
        assign(&mut self.points, points);
        assign(&mut self.duration, duration);
        assign(&mut self.errors, errors);
    }
}

impl From<Score> for ScoreResponse {
    fn from(score: Score) -> Self {
        Self {
            id: score.id,
            user_id: score.user_id,
            activity_id: score.activity_id,
            text_id: score.text_id,
            points: score.points,
            duration: score.duration,
            errors: score.errors,
            created_at: score.created_at,
            updated_at: score.updated_at,
        }
    }
}

impl Record for Score {
    const ENTITY: &'static str = "Score";

    fn id(&self) -> DbId {
        self.id
    }

    fn set_id(&mut self, id: DbId) {
        self.id = id;
    }

    fn lookup_key(&self) -> Option<&str> {
        None
    }

    fn created_at(&self) -> Timestamp {
        self.created_at
    }

    fn set_timestamps(&mut self, created_at: Timestamp, updated_at: Timestamp) {
        self.created_at = created_at;
        self.updated_at = updated_at;
    }
}
