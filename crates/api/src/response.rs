//! List response envelopes.
//!
//! Collections are wrapped in an object keyed by the capitalised resource
//! name, e.g. `{ "Users": [...] }`, which is the shape existing clients read.

use serde::Serialize;
use typewriter_db::models::activity::ActivityResponse;
use typewriter_db::models::score::ScoreResponse;
use typewriter_db::models::text::TextResponse;
use typewriter_db::models::user::UserResponse;

/// `{ "Users": [...] }`
#[derive(Debug, Serialize)]
pub struct UserList {
    #[serde(rename = "Users")]
    pub users: Vec<UserResponse>,
}

/// `{ "Texts": [...] }`
#[derive(Debug, Serialize)]
pub struct TextList {
    #[serde(rename = "Texts")]
    pub texts: Vec<TextResponse>,
}

/// `{ "Activities": [...] }`
#[derive(Debug, Serialize)]
pub struct ActivityList {
    #[serde(rename = "Activities")]
    pub activities: Vec<ActivityResponse>,
}

/// `{ "Scores": [...] }`
#[derive(Debug, Serialize)]
pub struct ScoreList {
    #[serde(rename = "Scores")]
    pub scores: Vec<ScoreResponse>,
}
