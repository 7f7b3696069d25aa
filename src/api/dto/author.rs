//! DTOs for author endpoints.

use serde::Serialize;

use crate::domain::entities::Author;

/// JSON representation of an author.
#[derive(Debug, Serialize)]
pub struct AuthorResponse {
    pub id: i64,
    pub name: String,
    pub book_count: i64,
}

impl From<Author> for AuthorResponse {
    fn from(author: Author) -> Self {
        Self {
            id: author.id,
            name: author.name,
            book_count: author.book_count,
        }
    }
}
