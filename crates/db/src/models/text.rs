//! Text (typing drill) entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use typewriter_core::error::CoreError;
use typewriter_core::types::{DbId, Timestamp};
use validator::Validate;

use super::{assign, require, validate_request, Record};

/// A row from the `texts` table.
///
/// `text_length` is derived from `text_body` and never set directly.
#[derive(Debug, Clone, Default, PartialEq, FromRow)]
pub struct Text {
    pub id: DbId,
    pub text_type: String,
    pub title: String,
    pub difficulty: String,
    pub text_body: String,
    pub text_length: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Client payload for creating or updating a text.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct TextRequest {
    pub text_type: Option<String>,
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: Option<String>,
    pub difficulty: Option<String>,
    pub text_body: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextResponse {
    pub id: DbId,
    pub text_type: String,
    pub title: String,
    pub difficulty: String,
    pub text_body: String,
    pub text_length: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Length of a drill body in characters (not bytes), saturating at `i32::MAX`.
pub fn text_length(body: &str) -> i32 {
    i32::try_from(body.chars().count()).unwrap_or(i32::MAX)
}

impl TextRequest {
    pub fn check_create(&self) -> Result<(), CoreError> {
        require("title", &self.title)?;
        validate_request(self)
    }

    pub fn check_update(&self) -> Result<(), CoreError> {
        validate_request(self)
    }
}

impl Text {
    pub fn from_request(req: &TextRequest) -> Self {
        let text_body = req.text_body.clone().unwrap_or_default();
        Self {
            text_type: req.text_type.clone().unwrap_or_default(),
            title: req.title.clone().unwrap_or_default(),
            difficulty: req.difficulty.clone().unwrap_or_default(),
            text_length: text_length(&text_body),
            text_body,
            ..Self::default()
        }
    }

    /// Overwrite supplied fields; a new body also resets `text_length`.
    pub fn merge(&mut self, req: TextRequest) {
        let TextRequest {
            text_type,
            title,
            difficulty,
            text_body,
        } = req;

        assign(&mut self.text_type, text_type);
        assign(&mut self.title, title);
        assign(&mut self.difficulty, difficulty);
        if let Some(body) = text_body {
            self.text_length = text_length(&body);
            self.text_body = body;
        }
    }
}

impl From<Text> for TextResponse {
    fn from(text: Text) -> Self {
        Self {
            id: text.id,
            text_type: text.text_type,
            title: text.title,
            difficulty: text.difficulty,
            text_body: text.text_body,
            text_length: text.text_length,
            created_at: text.created_at,
            updated_at: text.updated_at,
        }
    }
}

impl Record for Text {
    const ENTITY: &'static str = "Text";

    fn id(&self) -> DbId {
        self.id
    }

    fn set_id(&mut self, id: DbId) {
        self.id = id;
    }

    fn lookup_key(&self) -> Option<&str> {
        Some(&self.title)
    }

    fn created_at(&self) -> Timestamp {
        self.created_at
    }

    fn set_timestamps(&mut self, created_at: Timestamp, updated_at: Timestamp) {
        self.created_at = created_at;
        self.updated_at = updated_at;
    }
}
