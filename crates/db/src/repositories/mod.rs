//! Persistence gateways, one per table.
//!
//! Every gateway implements [`Repository`], so services can be driven either
//! by the PostgreSQL repositories or by [`InMemoryRepository`] in tests.

use async_trait::async_trait;
use typewriter_core::error::CoreError;
use typewriter_core::lookup::Lookup;
use typewriter_core::types::DbId;

pub mod activity_repo;
pub mod memory;
pub mod score_repo;
pub mod text_repo;
pub mod user_repo;

pub use activity_repo::PgActivityRepo;
pub use memory::InMemoryRepository;
pub use score_repo::PgScoreRepo;
pub use text_repo::PgTextRepo;
pub use user_repo::PgUserRepo;

/// The five store operations every entity supports.
#[async_trait]
pub trait Repository<T>: Send + Sync {
    /// All rows in insertion (id) order.
    async fn list(&self) -> Result<Vec<T>, CoreError>;

    /// First row with `id = lookup.id OR <alternate key> = lookup.key`.
    ///
    /// When both halves match different rows the lowest id wins. Fails with
    /// [`CoreError::NotFound`] when nothing matches.
    async fn find_by_id_or_key(&self, lookup: &Lookup) -> Result<T, CoreError>;

    /// Insert a new row and return it with its generated id and timestamps.
    async fn create(&self, record: &T) -> Result<T, CoreError>;

    /// Replace the row with the same id. Fails with [`CoreError::NotFound`]
    /// when the id does not exist.
    async fn update(&self, record: &T) -> Result<T, CoreError>;

    /// Delete a row by id. Returns `true`, or [`CoreError::NotFound`] when
    /// no row was removed.
    async fn delete(&self, id: DbId) -> Result<bool, CoreError>;
}

/// Classify a sqlx error into a [`CoreError`].
///
/// - Unique constraint violations (constraint name starting with `uq_`) map to `Conflict`.
/// - Everything else maps to `Storage`; the cause is logged, not returned to clients.
pub(crate) fn classify_sqlx_error(entity: &'static str, err: sqlx::Error) -> CoreError {
    if let sqlx::Error::Database(db_err) = &err {
        // PostgreSQL unique constraint violation: error code 23505
        if db_err.code().as_deref() == Some("23505") {
            let constraint = db_err.constraint().unwrap_or("unknown");
            if constraint.starts_with("uq_") {
                return CoreError::Conflict(format!(
                    "{entity} violates unique constraint: {constraint}"
                ));
            }
        }
    }
    tracing::error!(entity, error = %err, "Database error");
    CoreError::Storage(err.to_string())
}
