//! In-memory [`Repository`] used by service and HTTP tests.
//!
//! Behaves like one of the PostgreSQL tables: ids are assigned from 1 in
//! insertion order, timestamps are stamped on write, and alternate keys are
//! unique.

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use typewriter_core::error::CoreError;
use typewriter_core::lookup::Lookup;
use typewriter_core::types::DbId;

use super::Repository;
use crate::models::Record;

#[derive(Debug)]
struct Table<T> {
    rows: Vec<T>,
    next_id: DbId,
}

#[derive(Debug)]
pub struct InMemoryRepository<T> {
    table: RwLock<Table<T>>,
}

impl<T> InMemoryRepository<T> {
    pub fn new() -> Self {
        Self {
            table: RwLock::new(Table {
                rows: Vec::new(),
                next_id: 1,
            }),
        }
    }
}

impl<T> Default for InMemoryRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Record> Table<T> {
    fn ensure_key_free(&self, record: &T) -> Result<(), CoreError> {
        let Some(key) = record.lookup_key() else {
            return Ok(());
        };
        let taken = self
            .rows
            .iter()
            .any(|row| row.id() != record.id() && row.lookup_key() == Some(key));
        if taken {
            return Err(CoreError::Conflict(format!(
                "{} '{key}' already exists",
                T::ENTITY
            )));
        }
        Ok(())
    }
}

fn matches<T: Record>(row: &T, lookup: &Lookup) -> bool {
    lookup.id == Some(row.id())
        || lookup
            .key
            .as_deref()
            .is_some_and(|key| row.lookup_key() == Some(key))
}

#[async_trait]
impl<T: Record> Repository<T> for InMemoryRepository<T> {
    async fn list(&self) -> Result<Vec<T>, CoreError> {
        Ok(self.table.read().await.rows.clone())
    }

    async fn find_by_id_or_key(&self, lookup: &Lookup) -> Result<T, CoreError> {
        self.table
            .read()
            .await
            .rows
            .iter()
            .find(|row| matches(*row, lookup))
            .cloned()
            .ok_or_else(|| CoreError::NotFound {
                entity: T::ENTITY,
                lookup: lookup.clone(),
            })
    }

    async fn create(&self, record: &T) -> Result<T, CoreError> {
        let mut table = self.table.write().await;
        let mut row = record.clone();
        row.set_id(table.next_id);
        table.ensure_key_free(&row)?;

        let now = Utc::now();
        row.set_timestamps(now, now);
        table.next_id += 1;
        table.rows.push(row.clone());
        Ok(row)
    }

    async fn update(&self, record: &T) -> Result<T, CoreError> {
        let mut table = self.table.write().await;
        table.ensure_key_free(record)?;

        let slot = table
            .rows
            .iter_mut()
            .find(|row| row.id() == record.id())
            .ok_or_else(|| CoreError::not_found(T::ENTITY, record.id()))?;

        let mut row = record.clone();
        row.set_timestamps(slot.created_at(), Utc::now());
        *slot = row.clone();
        Ok(row)
    }

    async fn delete(&self, id: DbId) -> Result<bool, CoreError> {
        let mut table = self.table.write().await;
        let before = table.rows.len();
        table.rows.retain(|row| row.id() != id);
        if table.rows.len() == before {
            return Err(CoreError::not_found(T::ENTITY, id));
        }
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;
    use crate::models::activity::Activity;
    use crate::models::score::Score;

    fn activity(name: &str) -> Activity {
        Activity {
            name: name.into(),
            description: "drill".into(),
            ..Activity::default()
        }
    }

    #[tokio::test]
    async fn create_assigns_sequential_ids_and_timestamps() {
        let repo = InMemoryRepository::new();
        let first = repo.create(&activity("speed")).await.unwrap();
        let second = repo.create(&activity("accuracy")).await.unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(first.created_at, first.updated_at);
        assert!(first.created_at.timestamp() > 0);

        let all = repo.list().await.unwrap();
        assert_eq!(all.iter().map(|a| a.id).collect::<Vec<_>>(), vec![1, 2]);
    }

    #[tokio::test]
    async fn find_by_id_or_key() {
        let repo = InMemoryRepository::new();
        repo.create(&activity("speed")).await.unwrap();
        repo.create(&activity("accuracy")).await.unwrap();

        let by_id = repo.find_by_id_or_key(&Lookup::by_id(2)).await.unwrap();
        assert_eq!(by_id.name, "accuracy");

        let by_key = repo
            .find_by_id_or_key(&Lookup::by_key("speed"))
            .await
            .unwrap();
        assert_eq!(by_key.id, 1);

        // Both halves match different rows: lowest id wins.
        let both = Lookup {
            id: Some(2),
            key: Some("speed".into()),
        };
        assert_eq!(repo.find_by_id_or_key(&both).await.unwrap().id, 1);

        assert_matches!(
            repo.find_by_id_or_key(&Lookup::by_key("missing")).await,
            Err(CoreError::NotFound { entity: "Activity", .. })
        );
    }

    #[tokio::test]
    async fn duplicate_key_conflicts() {
        let repo = InMemoryRepository::new();
        repo.create(&activity("speed")).await.unwrap();
        let other = repo.create(&activity("accuracy")).await.unwrap();

        assert_matches!(
            repo.create(&activity("speed")).await,
            Err(CoreError::Conflict(_))
        );

        let mut renamed = other.clone();
        renamed.name = "speed".into();
        assert_matches!(repo.update(&renamed).await, Err(CoreError::Conflict(_)));
    }

    #[tokio::test]
    async fn update_keeps_created_at() {
        let repo = InMemoryRepository::new();
        let created = repo.create(&activity("speed")).await.unwrap();

        let mut changed = created.clone();
        changed.description = "updated".into();
        let updated = repo.update(&changed).await.unwrap();

        assert_eq!(updated.created_at, created.created_at);
        assert!(updated.updated_at >= created.updated_at);
        assert_eq!(
            repo.find_by_id_or_key(&Lookup::by_id(created.id))
                .await
                .unwrap()
                .description,
            "updated"
        );
    }

    #[tokio::test]
    async fn update_and_delete_missing_rows_are_not_found() {
        let repo: InMemoryRepository<Score> = InMemoryRepository::new();
        let ghost = Score {
            id: 42,
            ..Score::default()
        };

        assert_matches!(repo.update(&ghost).await, Err(CoreError::NotFound { .. }));
        assert_matches!(repo.delete(42).await, Err(CoreError::NotFound { .. }));
    }

    #[tokio::test]
    async fn delete_removes_row() {
        let repo = InMemoryRepository::new();
        let created = repo.create(&activity("speed")).await.unwrap();

        assert!(repo.delete(created.id).await.unwrap());
        assert!(repo.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn scores_ignore_key_lookups() {
        let repo = InMemoryRepository::new();
        repo.create(&Score::default()).await.unwrap();

        assert_matches!(
            repo.find_by_id_or_key(&Lookup::by_key("1")).await,
            Err(CoreError::NotFound { .. })
        );
        assert!(repo.find_by_id_or_key(&Lookup::by_id(1)).await.is_ok());
    }
}
