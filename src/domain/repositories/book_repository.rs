//! Repository trait for book data access.

use crate::domain::entities::{Book, BookPatch, NewBook};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for book records.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgBookRepository`] - PostgreSQL
/// - [`crate::infrastructure::session::SessionBookRepository`] - in-process store
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookRepository: Send + Sync {
    /// Lists all books in insertion order.
    async fn get_all(&self) -> Result<Vec<Book>, AppError>;

    /// Finds a book by id.
    async fn get_by_id(&self, id: i64) -> Result<Option<Book>, AppError>;

    /// Lists all books owned by the given author.
    async fn find_by_author_id(&self, author_id: i64) -> Result<Vec<Book>, AppError>;

    /// Persists a new book and returns the store-assigned id.
    async fn create(&self, new_book: NewBook) -> Result<i64, AppError>;

    /// Applies title and publication-year changes to an existing book.
    async fn update(&self, id: i64, patch: BookPatch) -> Result<(), AppError>;

    /// Deletes a book by id.
    async fn delete(&self, id: i64) -> Result<(), AppError>;

    /// Deletes every book owned by the given author.
    ///
    /// Returns `Ok(true)` when the operation completed, whether or not any
    /// rows existed; only a storage failure is an error.
    async fn delete_all_by_author_id(&self, author_id: i64) -> Result<bool, AppError>;
}
