//! Session-backed implementation of the author repository.

use async_trait::async_trait;
use std::sync::Arc;

use super::store::{AuthorRecord, SessionStore};
use crate::domain::entities::{Author, NewAuthor};
use crate::domain::repositories::AuthorRepository;
use crate::error::AppError;

/// Author repository over an injected [`SessionStore`].
pub struct SessionAuthorRepository {
    store: Arc<SessionStore>,
}

impl SessionAuthorRepository {
    pub fn new(store: Arc<SessionStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl AuthorRepository for SessionAuthorRepository {
    async fn get_all(&self) -> Result<Vec<Author>, AppError> {
        let inner = self.store.lock()?;
        Ok(inner
            .authors
            .iter()
            .map(|r| Author::new(r.id, r.name.clone(), 0))
            .collect())
    }

    async fn get_by_id(&self, id: i64) -> Result<Option<Author>, AppError> {
        let inner = self.store.lock()?;
        Ok(inner
            .authors
            .iter()
            .find(|r| r.id == id)
            .map(|r| Author::new(r.id, r.name.clone(), 0)))
    }

    async fn create(&self, new_author: NewAuthor) -> Result<i64, AppError> {
        let mut inner = self.store.lock()?;
        let id = inner.next_author_id();
        inner.authors.push(AuthorRecord {
            id,
            name: new_author.full_name(),
        });
        Ok(id)
    }

    async fn update(&self, id: i64, name: &str) -> Result<(), AppError> {
        let mut inner = self.store.lock()?;
        if let Some(record) = inner.authors.iter_mut().find(|r| r.id == id) {
            record.name = name.to_string();
        }
        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<(), AppError> {
        let mut inner = self.store.lock()?;
        inner.authors.retain(|r| r.id != id);
        Ok(())
    }
}
