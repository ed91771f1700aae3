//! User entity model and DTOs.

use std::fmt;

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use typewriter_core::error::CoreError;
use typewriter_core::types::{DbId, Timestamp};
use validator::{Validate, ValidateEmail};

use super::{assign, require, validate_request, Record};

/// Full user row from the `users` table.
///
/// Contains the password hash -- NEVER serialize this to API responses directly.
/// Use [`UserResponse`] for external-facing output.
#[derive(Debug, Clone, Default, PartialEq, FromRow)]
pub struct User {
    pub id: DbId,
    pub user_type: String,
    pub username: String,
    pub password_hash: String,
    pub name: String,
    pub email: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Client payload for creating or updating a user.
///
/// `password` is plaintext and only ever leaves this struct as a hash.
#[derive(Clone, Default, Deserialize, Validate)]
pub struct UserRequest {
    pub user_type: Option<String>,
    #[validate(length(min = 1, message = "username must not be empty"))]
    pub username: Option<String>,
    #[validate(length(min = 1, message = "password must not be empty"))]
    pub password: Option<String>,
    pub name: Option<String>,
    /// Checked by hand: an empty string is allowed and clears the address.
    pub email: Option<String>,
}

/// Safe user representation for API responses (no password hash).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserResponse {
    pub id: DbId,
    pub user_type: String,
    pub username: String,
    pub name: String,
    pub email: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl fmt::Debug for UserRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserRequest")
            .field("user_type", &self.user_type)
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .field("name", &self.name)
            .field("email", &self.email)
            .finish()
    }
}

impl UserRequest {
    /// Checks for a create: username and password must be present.
    pub fn check_create(&self) -> Result<(), CoreError> {
        require("username", &self.username)?;
        require("password", &self.password)?;
        self.check_update()
    }

    pub fn check_update(&self) -> Result<(), CoreError> {
        validate_request(self)?;
        match &self.email {
            Some(email) if !email.is_empty() && !email.validate_email() => Err(
                CoreError::Validation("email: email must be a valid address".into()),
            ),
            _ => Ok(()),
        }
    }
}

impl User {
    /// Build an unsaved user from a request. The password is not copied; the
    /// caller hashes it into `password_hash`.
    pub fn from_request(req: &UserRequest) -> Self {
        Self {
            user_type: req.user_type.clone().unwrap_or_default(),
            username: req.username.clone().unwrap_or_default(),
            name: req.name.clone().unwrap_or_default(),
            email: req.email.clone().unwrap_or_default(),
            ..Self::default()
        }
    }

    /// Overwrite every field the request supplied. `password` is ignored here.
    pub fn merge(&mut self, req: UserRequest) {
        let UserRequest {
            user_type,
            username,
            password: _,
            name,
            email,
        } = req;

        assign(&mut self.user_type, user_type);
        assign(&mut self.username, username);
        assign(&mut self.name, name);
        assign(&mut self.email, email);
    }
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            user_type: user.user_type,
            username: user.username,
            name: user.name,
            email: user.email,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

impl Record for User {
    const ENTITY: &'static str = "User";

    fn id(&self) -> DbId {
        self.id
    }

    fn set_id(&mut self, id: DbId) {
        self.id = id;
    }

    fn lookup_key(&self) -> Option<&str> {
        Some(&self.username)
    }

    fn created_at(&self) -> Timestamp {
        self.created_at
    }

    fn set_timestamps(&mut self, created_at: Timestamp, updated_at: Timestamp) {
        self.created_at = created_at;
        self.updated_at = updated_at;
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    fn stored_user() -> User {
        User {
            id: 1,
            user_type: "regular".into(),
            username: "testuser1".into(),
            password_hash: "$argon2id$stored".into(),
            name: "test user1".into(),
            email: "tu1@example.com".into(),
            ..User::default()
        }
    }

    #[test]
    fn from_request_copies_present_fields_and_skips_password() {
        let req = UserRequest {
            username: Some("typist".into()),
            password: Some("hunter2".into()),
            email: Some("typist@example.com".into()),
            ..UserRequest::default()
        };

        let user = User::from_request(&req);

        assert_eq!(user.id, 0);
        assert_eq!(user.username, "typist");
        assert_eq!(user.email, "typist@example.com");
        assert_eq!(user.user_type, "");
        assert_eq!(user.password_hash, "");
    }

    #[test]
    fn merge_keeps_absent_fields() {
        let mut user = stored_user();
        user.merge(UserRequest {
            name: Some("renamed".into()),
            ..UserRequest::default()
        });

        assert_eq!(user.name, "renamed");
        assert_eq!(user.username, "testuser1");
        assert_eq!(user.email, "tu1@example.com");
        assert_eq!(user.password_hash, "$argon2id$stored");
    }

    #[test]
    fn merge_accepts_explicit_empty_values() {
        let mut user = stored_user();
        user.merge(UserRequest {
            user_type: Some(String::new()),
            ..UserRequest::default()
        });

        assert_eq!(user.user_type, "");
    }

    #[test]
    fn response_has_no_password_hash() {
        let response = UserResponse::from(stored_user());
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["username"], "testuser1");
        assert!(json.get("password_hash").is_none());
        assert!(json.get("password").is_none());
    }

    #[test]
    fn debug_redacts_password() {
        let req = UserRequest {
            password: Some("hunter2".into()),
            ..UserRequest::default()
        };
        let rendered = format!("{req:?}");
        assert!(!rendered.contains("hunter2"));
        assert!(rendered.contains("<redacted>"));
    }

    #[test]
    fn create_requires_username_and_password() {
        let req = UserRequest {
            username: Some("typist".into()),
            ..UserRequest::default()
        };
        assert_matches!(req.check_create(), Err(CoreError::Validation(msg)) if msg.contains("password"));
    }

    #[test]
    fn update_rejects_empty_username_and_bad_email() {
        let req = UserRequest {
            username: Some(String::new()),
            ..UserRequest::default()
        };
        assert_matches!(req.check_update(), Err(CoreError::Validation(_)));

        let req = UserRequest {
            email: Some("not-an-email".into()),
            ..UserRequest::default()
        };
        assert_matches!(req.check_update(), Err(CoreError::Validation(_)));

        assert!(UserRequest::default().check_update().is_ok());
    }

    #[test]
    fn empty_email_is_accepted_and_clears_the_address() {
        let req = UserRequest {
            email: Some(String::new()),
            ..UserRequest::default()
        };
        assert!(req.check_update().is_ok());

        let mut user = stored_user();
        user.merge(req);
        assert_eq!(user.email, "");
    }
}
