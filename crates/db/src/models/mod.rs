//! Entity models, request/response DTOs, and the conversions between them.
//!
//! Each submodule contains:
//! - A `FromRow` entity struct matching the database row
//! - A `Deserialize` request DTO (every field `Option`, `None` means "not supplied")
//! - A `Serialize` response DTO with secrets stripped
//! - `from_request` (create), `merge` (partial update) and `From<Entity> for Response`

use typewriter_core::error::CoreError;
use typewriter_core::types::{DbId, Timestamp};
use validator::{Validate, ValidationErrors};

pub mod activity;
pub mod score;
pub mod text;
pub mod user;

/// Row-level bookkeeping the in-memory repository needs to behave like a table.
pub trait Record: Clone + Send + Sync + 'static {
    /// Human-readable entity name used in error messages.
    const ENTITY: &'static str;

    fn id(&self) -> DbId;

    fn set_id(&mut self, id: DbId);

    /// Unique alternate key, or `None` for entities looked up by id only.
    fn lookup_key(&self) -> Option<&str>;

    fn created_at(&self) -> Timestamp;

    fn set_timestamps(&mut self, created_at: Timestamp, updated_at: Timestamp);
}

/// Run the derived `validator` rules and fold failures into [`CoreError::Validation`].
pub(crate) fn validate_request<T: Validate>(request: &T) -> Result<(), CoreError> {
    request.validate().map_err(validation_error)
}

fn validation_error(errors: ValidationErrors) -> CoreError {
    CoreError::Validation(errors.to_string())
}

/// Fail with a validation error when a field required on create is absent.
pub(crate) fn require<T>(field: &'static str, value: &Option<T>) -> Result<(), CoreError> {
    match value {
        Some(_) => Ok(()),
        None => Err(CoreError::Validation(format!("{field} is required"))),
    }
}

/// Fail when a supplied count is below zero.
///
/// For fields the `Validate` derive cannot check: it keeps its own error list
/// in a local named `errors`, which a field of the same name shadows.
pub(crate) fn non_negative(field: &'static str, value: Option<i32>) -> Result<(), CoreError> {
    match value {
        Some(v) if v < 0 => Err(CoreError::Validation(format!(
            "{field} must not be negative"
        ))),
        _ => Ok(()),
    }
}

/// Overwrite `target` when the request supplied a value.
pub(crate) fn assign<T>(target: &mut T, value: Option<T>) {
    if let Some(value) = value {
        *target = value;
    }
}
