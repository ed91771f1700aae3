use crate::lookup::Lookup;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("{entity} {lookup} not found")]
    NotFound { entity: &'static str, lookup: Lookup },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    /// Persistence failure. The message is meant for logs, never for clients.
    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Password hashing failed: {0}")]
    Hashing(String),
}

impl CoreError {
    /// Shorthand for a [`CoreError::NotFound`] on a primary key.
    pub fn not_found(entity: &'static str, id: crate::types::DbId) -> Self {
        CoreError::NotFound {
            entity,
            lookup: Lookup::by_id(id),
        }
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn not_found_by_id_message() {
        let err = CoreError::not_found("Score", 9);
        assert_eq!(err.to_string(), "Score with id 9 not found");
        assert_matches!(err, CoreError::NotFound { entity: "Score", .. });
    }

    #[test]
    fn not_found_by_key_message() {
        let err = CoreError::NotFound {
            entity: "User",
            lookup: Lookup::by_key("alice"),
        };
        assert_eq!(err.to_string(), "User 'alice' not found");
    }
}
