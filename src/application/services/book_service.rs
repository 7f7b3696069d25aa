//! Book validation and orchestration service.

use std::sync::Arc;

use chrono::{Datelike, Utc};
use serde_json::json;

use crate::domain::entities::{Book, BookPatch, NewBook};
use crate::domain::repositories::{AuthorRepository, BookRepository};
use crate::error::AppError;

const MAX_TITLE_LEN: usize = 255;

/// Service for book CRUD.
///
/// Field validation happens here; update, delete, and list operations are
/// thin pass-throughs that propagate repository errors unchanged.
pub struct BookService<B: BookRepository + ?Sized, A: AuthorRepository + ?Sized> {
    book_repository: Arc<B>,
    author_repository: Arc<A>,
}

impl<B: BookRepository + ?Sized, A: AuthorRepository + ?Sized> BookService<B, A> {
    /// Creates a new book service.
    pub fn new(book_repository: Arc<B>, author_repository: Arc<A>) -> Self {
        Self {
            book_repository,
            author_repository,
        }
    }

    /// Lists all books owned by an author.
    pub async fn books_by_author(&self, author_id: i64) -> Result<Vec<Book>, AppError> {
        self.book_repository.find_by_author_id(author_id).await
    }

    /// Retrieves one book.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] when no book has the given id.
    pub async fn get_book(&self, id: i64) -> Result<Book, AppError> {
        self.book_repository
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Book not found", json!({ "id": id })))
    }

    /// Creates a book after validating every field, then returns the
    /// persisted record re-fetched by its new id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] naming the offending field when:
    /// - `author_id` is not positive or references no existing author
    /// - `title` is empty after trimming or exceeds 255 characters
    /// - `publication_year` is not positive or lies in the future
    pub async fn create_book(&self, new_book: NewBook) -> Result<Book, AppError> {
        let new_book = NewBook {
            title: new_book.title.trim().to_string(),
            ..new_book
        };
        validate_title(&new_book.title)?;
        validate_publication_year(new_book.publication_year)?;

        if new_book.author_id <= 0 {
            return Err(AppError::validation(
                "author_id must be a positive integer",
                json!({ "field": "author_id" }),
            ));
        }
        if self
            .author_repository
            .get_by_id(new_book.author_id)
            .await?
            .is_none()
        {
            return Err(AppError::validation(
                "author_id references no existing author",
                json!({ "field": "author_id", "author_id": new_book.author_id }),
            ));
        }

        let id = self.book_repository.create(new_book).await?;
        self.get_book(id).await
    }

    /// Updates a book's title and publication year.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for invalid fields and
    /// [`AppError::NotFound`] for an unknown id.
    pub async fn update_book(&self, id: i64, patch: BookPatch) -> Result<Book, AppError> {
        let patch = BookPatch {
            title: patch.title.trim().to_string(),
            ..patch
        };
        validate_title(&patch.title)?;
        validate_publication_year(patch.publication_year)?;

        if self.book_repository.get_by_id(id).await?.is_none() {
            return Err(AppError::not_found("Book not found", json!({ "id": id })));
        }

        self.book_repository.update(id, patch).await?;
        self.get_book(id).await
    }

    /// Deletes one book.
    pub async fn delete_book(&self, id: i64) -> Result<(), AppError> {
        if self.book_repository.get_by_id(id).await?.is_none() {
            return Err(AppError::not_found("Book not found", json!({ "id": id })));
        }
        self.book_repository.delete(id).await
    }

    /// Deletes every book owned by an author.
    pub async fn delete_books_by_author(&self, author_id: i64) -> Result<bool, AppError> {
        self.book_repository.delete_all_by_author_id(author_id).await
    }
}

fn validate_title(title: &str) -> Result<(), AppError> {
    if title.is_empty() {
        return Err(AppError::validation(
            "title must not be empty",
            json!({ "field": "title" }),
        ));
    }
    if title.chars().count() > MAX_TITLE_LEN {
        return Err(AppError::validation(
            format!("title must be at most {MAX_TITLE_LEN} characters"),
            json!({ "field": "title", "max": MAX_TITLE_LEN }),
        ));
    }
    Ok(())
}

fn validate_publication_year(year: i32) -> Result<(), AppError> {
    if year <= 0 {
        return Err(AppError::validation(
            "publication_year must be a positive integer",
            json!({ "field": "publication_year" }),
        ));
    }
    let current_year = Utc::now().year();
    if year > current_year {
        return Err(AppError::validation(
            "publication_year must not be in the future",
            json!({ "field": "publication_year", "max": current_year }),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::Author;
    use crate::domain::repositories::{MockAuthorRepository, MockBookRepository};

    fn service(
        books: MockBookRepository,
        authors: MockAuthorRepository,
    ) -> BookService<MockBookRepository, MockAuthorRepository> {
        BookService::new(Arc::new(books), Arc::new(authors))
    }

    fn new_book(title: &str, year: i32, author_id: i64) -> NewBook {
        NewBook {
            title: title.to_string(),
            publication_year: year,
            author_id,
        }
    }

    fn offending_field(err: &AppError) -> String {
        match err {
            AppError::Validation { details, .. } => {
                details["field"].as_str().unwrap_or_default().to_string()
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_create_book_round_trip() {
        let mut books = MockBookRepository::new();
        let mut authors = MockAuthorRepository::new();

        authors
            .expect_get_by_id()
            .withf(|id| *id == 1)
            .times(1)
            .returning(|_| Ok(Some(Author::new(1, "Frank Herbert".to_string(), 0))));
        books
            .expect_create()
            .withf(|b| b.title == "Dune" && b.publication_year == 1965 && b.author_id == 1)
            .times(1)
            .returning(|_| Ok(10));
        books
            .expect_get_by_id()
            .withf(|id| *id == 10)
            .times(1)
            .returning(|_| Ok(Some(Book::new(10, "Dune".to_string(), 1965, 1))));

        let book = service(books, authors)
            .create_book(new_book("Dune", 1965, 1))
            .await
            .unwrap();

        assert_eq!(book.id, 10);
        assert_eq!(book.title, "Dune");
        assert_eq!(book.publication_year, 1965);
        assert_eq!(book.author_id, 1);
    }

    #[tokio::test]
    async fn test_create_book_empty_title() {
        let result = service(MockBookRepository::new(), MockAuthorRepository::new())
            .create_book(new_book("   ", 1965, 1))
            .await;

        assert_eq!(offending_field(&result.unwrap_err()), "title");
    }

    #[tokio::test]
    async fn test_create_book_title_too_long() {
        let title = "x".repeat(256);
        let result = service(MockBookRepository::new(), MockAuthorRepository::new())
            .create_book(new_book(&title, 1965, 1))
            .await;

        assert_eq!(offending_field(&result.unwrap_err()), "title");
    }

    #[tokio::test]
    async fn test_create_book_year_not_positive() {
        let result = service(MockBookRepository::new(), MockAuthorRepository::new())
            .create_book(new_book("Dune", 0, 1))
            .await;

        assert_eq!(offending_field(&result.unwrap_err()), "publication_year");
    }

    #[tokio::test]
    async fn test_create_book_year_in_future() {
        let future = Utc::now().year() + 1;
        let result = service(MockBookRepository::new(), MockAuthorRepository::new())
            .create_book(new_book("Dune", future, 1))
            .await;

        assert_eq!(offending_field(&result.unwrap_err()), "publication_year");
    }

    #[tokio::test]
    async fn test_create_book_author_id_not_positive() {
        let result = service(MockBookRepository::new(), MockAuthorRepository::new())
            .create_book(new_book("Dune", 1965, 0))
            .await;

        assert_eq!(offending_field(&result.unwrap_err()), "author_id");
    }

    #[tokio::test]
    async fn test_create_book_unknown_author() {
        let mut authors = MockAuthorRepository::new();
        authors.expect_get_by_id().times(1).returning(|_| Ok(None));

        let mut books = MockBookRepository::new();
        books.expect_create().times(0);

        let result = service(books, authors)
            .create_book(new_book("Dune", 1965, 99))
            .await;

        assert_eq!(offending_field(&result.unwrap_err()), "author_id");
    }

    #[tokio::test]
    async fn test_delete_book_unknown_id() {
        let mut books = MockBookRepository::new();
        books.expect_get_by_id().times(1).returning(|_| Ok(None));
        books.expect_delete().times(0);

        let result = service(books, MockAuthorRepository::new())
            .delete_book(5)
            .await;
        assert!(matches!(result, Err(AppError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_delete_books_by_author_propagates_repository_error() {
        let mut books = MockBookRepository::new();
        books
            .expect_delete_all_by_author_id()
            .times(1)
            .returning(|_| Err(AppError::repository("Storage failure", json!({}))));

        let result = service(books, MockAuthorRepository::new())
            .delete_books_by_author(1)
            .await;
        assert!(matches!(result, Err(AppError::Repository { .. })));
    }
}
