//! Book entity.

use serde::Serialize;

/// A book in the catalog, owned by exactly one author.
#[derive(Debug, Clone, Serialize)]
pub struct Book {
    pub id: i64,
    pub title: String,
    pub publication_year: i32,
    pub author_id: i64,
}

impl Book {
    /// Creates a new Book instance.
    pub fn new(id: i64, title: String, publication_year: i32, author_id: i64) -> Self {
        Self {
            id,
            title,
            publication_year,
            author_id,
        }
    }
}

/// Input data for creating a new book.
#[derive(Debug, Clone)]
pub struct NewBook {
    pub title: String,
    pub publication_year: i32,
    pub author_id: i64,
}

/// Fields applied when editing an existing book.
///
/// The owning author never changes through an edit; books move between
/// authors only by delete-and-recreate.
#[derive(Debug, Clone)]
pub struct BookPatch {
    pub title: String,
    pub publication_year: i32,
}
