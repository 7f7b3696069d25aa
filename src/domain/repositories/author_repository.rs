//! Repository trait for author data access.

use crate::domain::entities::{Author, NewAuthor};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for author records.
///
/// The service layer is storage-agnostic; any failure of the backing store
/// surfaces as [`AppError::Repository`] with the underlying cause attached.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgAuthorRepository`] - PostgreSQL
/// - [`crate::infrastructure::session::SessionAuthorRepository`] - in-process store
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AuthorRepository: Send + Sync {
    /// Lists all authors in insertion order. Book counts are not populated
    /// at this layer.
    async fn get_all(&self) -> Result<Vec<Author>, AppError>;

    /// Finds an author by id.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Author))` if found
    /// - `Ok(None)` if not found
    async fn get_by_id(&self, id: i64) -> Result<Option<Author>, AppError>;

    /// Persists a new author and returns the store-assigned id.
    async fn create(&self, new_author: NewAuthor) -> Result<i64, AppError>;

    /// Updates an existing author's name. Updating an unknown id is a
    /// storage-level no-op; existence checks belong to the service layer.
    async fn update(&self, id: i64, name: &str) -> Result<(), AppError>;

    /// Deletes an author by id.
    async fn delete(&self, id: i64) -> Result<(), AppError>;
}
