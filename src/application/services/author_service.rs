//! Author validation and orchestration service.

use std::sync::Arc;

use serde_json::json;

use crate::domain::entities::{Author, NewAuthor};
use crate::domain::repositories::{AuthorRepository, BookRepository};
use crate::error::AppError;

const MAX_NAME_LEN: usize = 100;

/// Service for author CRUD and the one cross-entity rule: deleting an
/// author cascades to the author's books.
///
/// Name validation lives here so every caller (HTML forms, JSON API, tests)
/// gets the same rules. Validation failures are visible
/// [`AppError::Validation`] values, including on update.
pub struct AuthorService<A: AuthorRepository + ?Sized, B: BookRepository + ?Sized> {
    author_repository: Arc<A>,
    book_repository: Arc<B>,
}

impl<A: AuthorRepository + ?Sized, B: BookRepository + ?Sized> AuthorService<A, B> {
    /// Creates a new author service.
    pub fn new(author_repository: Arc<A>, book_repository: Arc<B>) -> Self {
        Self {
            author_repository,
            book_repository,
        }
    }

    /// Lists all authors with their derived book counts.
    pub async fn list_authors(&self) -> Result<Vec<Author>, AppError> {
        let mut authors = self.author_repository.get_all().await?;
        for author in &mut authors {
            author.book_count = self
                .book_repository
                .find_by_author_id(author.id)
                .await?
                .len() as i64;
        }
        Ok(authors)
    }

    /// Retrieves one author with the derived book count.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] when no author has the given id.
    pub async fn get_author(&self, id: i64) -> Result<Author, AppError> {
        let mut author = self
            .author_repository
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Author not found", json!({ "id": id })))?;

        author.book_count = self.book_repository.find_by_author_id(id).await?.len() as i64;
        Ok(author)
    }

    /// Creates an author from trimmed first and last names and returns the
    /// freshly persisted record, re-fetched by its new id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] when either name is empty after
    /// trimming or exceeds 100 characters.
    pub async fn create_author(
        &self,
        first_name: &str,
        last_name: &str,
    ) -> Result<Author, AppError> {
        let new_author = NewAuthor::from_parts(first_name, last_name);
        validate_name("first_name", &new_author.first_name)?;
        validate_name("last_name", &new_author.last_name)?;

        let id = self.author_repository.create(new_author).await?;
        self.get_author(id).await
    }

    /// Updates an author's name with the same validation as creation.
    ///
    /// The original system swallowed validation failures here; this version
    /// reports them, so stale data is never silently preserved.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] on invalid names and
    /// [`AppError::NotFound`] for an unknown id.
    pub async fn update_author(
        &self,
        id: i64,
        first_name: &str,
        last_name: &str,
    ) -> Result<Author, AppError> {
        let new_author = NewAuthor::from_parts(first_name, last_name);
        validate_name("first_name", &new_author.first_name)?;
        validate_name("last_name", &new_author.last_name)?;

        if self.author_repository.get_by_id(id).await?.is_none() {
            return Err(AppError::not_found("Author not found", json!({ "id": id })));
        }

        self.author_repository
            .update(id, &new_author.full_name())
            .await?;
        self.get_author(id).await
    }

    /// Deletes an author and all of the author's books.
    ///
    /// Books go first; if clearing them fails the operation aborts and the
    /// author stays in place, so a failed cascade never leaves orphaned
    /// books behind a deleted author.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] for an unknown id and propagates
    /// [`AppError::Repository`] from either deletion step.
    pub async fn delete_author(&self, id: i64) -> Result<(), AppError> {
        if self.author_repository.get_by_id(id).await?.is_none() {
            return Err(AppError::not_found("Author not found", json!({ "id": id })));
        }

        self.book_repository.delete_all_by_author_id(id).await?;
        self.author_repository.delete(id).await
    }
}

/// Checks one trimmed name field: required, at most 100 characters.
fn validate_name(field: &'static str, value: &str) -> Result<(), AppError> {
    if value.is_empty() {
        return Err(AppError::validation(
            format!("{field} must not be empty"),
            json!({ "field": field }),
        ));
    }
    if value.chars().count() > MAX_NAME_LEN {
        return Err(AppError::validation(
            format!("{field} must be at most {MAX_NAME_LEN} characters"),
            json!({ "field": field, "max": MAX_NAME_LEN }),
        ));
    }
    Ok(())
}
