//! Text service: typing drill CRUD.

use std::sync::Arc;

use typewriter_core::error::CoreError;
use typewriter_core::lookup::Lookup;
use typewriter_core::types::DbId;
use typewriter_db::models::text::{Text, TextRequest, TextResponse};
use typewriter_db::repositories::Repository;

#[derive(Clone)]
pub struct TextService {
    repo: Arc<dyn Repository<Text>>,
}

impl TextService {
    pub fn new(repo: Arc<dyn Repository<Text>>) -> Self {
        Self { repo }
    }

    pub async fn get_all(&self) -> Result<Vec<TextResponse>, CoreError> {
        let texts = self.repo.list().await?;
        Ok(texts.into_iter().map(TextResponse::from).collect())
    }

    /// Fetch a text by id or title.
    pub async fn get_by_id_or_title(&self, lookup: &Lookup) -> Result<TextResponse, CoreError> {
        let text = self.repo.find_by_id_or_key(lookup).await?;
        Ok(text.into())
    }

    pub async fn create(&self, req: TextRequest) -> Result<TextResponse, CoreError> {
        req.check_create()?;

        let text = Text::from_request(&req);
        let created = self.repo.create(&text).await.inspect_err(|e| {
            tracing::error!(title = %text.title, error = %e, "Failed to create text");
        })?;

        tracing::info!(
            text_id = created.id,
            text_length = created.text_length,
            "Text created"
        );
        Ok(created.into())
    }

    /// Merge the supplied fields into the stored text; a new body recomputes
    /// its length.
    pub async fn update(&self, req: TextRequest, id: DbId) -> Result<TextResponse, CoreError> {
        req.check_update()?;

        let mut text = self.repo.find_by_id_or_key(&Lookup::by_id(id)).await?;
        text.merge(req);

        let updated = self.repo.update(&text).await.inspect_err(|e| {
            tracing::error!(text_id = id, error = %e, "Failed to update text");
        })?;

        tracing::info!(text_id = id, "Text updated");
        Ok(updated.into())
    }

    pub async fn delete(&self, id: DbId) -> Result<bool, CoreError> {
        let deleted = self.repo.delete(id).await.inspect_err(|e| {
            tracing::error!(text_id = id, error = %e, "Failed to delete text");
        })?;
        tracing::info!(text_id = id, "Text deleted");
        Ok(deleted)
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use typewriter_db::repositories::InMemoryRepository;

    use super::*;

    fn service() -> TextService {
        TextService::new(Arc::new(InMemoryRepository::<Text>::new()))
    }

    fn drill(title: &str, body: &str) -> TextRequest {
        TextRequest {
            text_type: Some("quote".into()),
            title: Some(title.into()),
            difficulty: Some("easy".into()),
            text_body: Some(body.into()),
        }
    }

    #[tokio::test]
    async fn create_derives_length_from_body() {
        let service = service();
        let created = service
            .create(drill("Pangram", "the quick brown fox jumps"))
            .await
            .unwrap();

        assert_eq!(created.text_length, 25);
        assert_eq!(created.title, "Pangram");
    }

    #[tokio::test]
    async fn update_body_recomputes_length_and_keeps_the_rest() {
        let service = service();
        let created = service.create(drill("Home row", "asdf jkl;")).await.unwrap();

        let updated = service
            .update(
                TextRequest {
                    text_body: Some("asdf jkl; asdf jkl;".into()),
                    ..TextRequest::default()
                },
                created.id,
            )
            .await
            .unwrap();

        assert_eq!(updated.text_body, "asdf jkl; asdf jkl;");
        assert_eq!(updated.text_length, 19);
        assert_eq!(updated.title, "Home row");
        assert_eq!(updated.difficulty, "easy");
        assert_eq!(updated.text_type, "quote");
    }

    #[tokio::test]
    async fn update_without_body_keeps_length() {
        let service = service();
        let created = service.create(drill("Home row", "asdf jkl;")).await.unwrap();

        let updated = service
            .update(
                TextRequest {
                    difficulty: Some("medium".into()),
                    ..TextRequest::default()
                },
                created.id,
            )
            .await
            .unwrap();

        assert_eq!(updated.difficulty, "medium");
        assert_eq!(updated.text_length, 9);
    }

    #[tokio::test]
    async fn lookup_by_title() {
        let service = service();
        service.create(drill("Home row", "asdf")).await.unwrap();
        let top = service.create(drill("Top row", "qwer")).await.unwrap();

        let found = service
            .get_by_id_or_title(&Lookup::by_key("Top row"))
            .await
            .unwrap();
        assert_eq!(found, top);
    }

    #[tokio::test]
    async fn duplicate_title_conflicts() {
        let service = service();
        service.create(drill("Home row", "asdf")).await.unwrap();

        assert_matches!(
            service.create(drill("Home row", "jkl;")).await,
            Err(CoreError::Conflict(_))
        );
    }

    #[tokio::test]
    async fn delete_missing_text_is_not_found() {
        let service = service();
        assert_matches!(service.delete(3).await, Err(CoreError::NotFound { .. }));
    }
}
