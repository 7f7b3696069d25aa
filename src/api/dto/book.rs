//! DTOs for book endpoints.
//!
//! The canonical wire field for the year is `publication_year`.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::{Book, BookPatch, NewBook};

/// Query parameters for listing an author's books.
#[derive(Debug, Deserialize)]
pub struct BooksQuery {
    pub author_id: i64,
}

/// Request to create a book.
///
/// The service layer re-checks these rules (plus author existence and the
/// current-year bound) for non-HTTP callers; the derive gives early 400s
/// with field-level messages.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateBookRequest {
    #[validate(range(min = 1, message = "author_id must be a positive integer"))]
    pub author_id: i64,

    #[validate(length(min = 1, max = 255))]
    pub title: String,

    #[validate(range(min = 1, message = "publication_year must be a positive integer"))]
    pub publication_year: i32,
}

impl From<CreateBookRequest> for NewBook {
    fn from(req: CreateBookRequest) -> Self {
        Self {
            title: req.title,
            publication_year: req.publication_year,
            author_id: req.author_id,
        }
    }
}

/// Request to edit a book's title and publication year.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateBookRequest {
    #[validate(length(min = 1, max = 255))]
    pub title: String,

    #[validate(range(min = 1, message = "publication_year must be a positive integer"))]
    pub publication_year: i32,
}

impl From<UpdateBookRequest> for BookPatch {
    fn from(req: UpdateBookRequest) -> Self {
        Self {
            title: req.title,
            publication_year: req.publication_year,
        }
    }
}

/// JSON representation of a book.
#[derive(Debug, Serialize)]
pub struct BookResponse {
    pub id: i64,
    pub author_id: i64,
    pub title: String,
    pub publication_year: i32,
}

impl From<Book> for BookResponse {
    fn from(book: Book) -> Self {
        Self {
            id: book.id,
            author_id: book.author_id,
            title: book.title,
            publication_year: book.publication_year,
        }
    }
}
