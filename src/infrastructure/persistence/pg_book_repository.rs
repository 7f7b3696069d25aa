//! PostgreSQL implementation of the book repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{Book, BookPatch, NewBook};
use crate::domain::repositories::BookRepository;
use crate::error::AppError;

type BookRow = (i64, String, i32, i64);

fn row_to_book((id, title, publication_year, author_id): BookRow) -> Book {
    Book::new(id, title, publication_year, author_id)
}

/// PostgreSQL repository for book storage and retrieval.
pub struct PgBookRepository {
    pool: Arc<PgPool>,
}

impl PgBookRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BookRepository for PgBookRepository {
    async fn get_all(&self) -> Result<Vec<Book>, AppError> {
        let rows: Vec<BookRow> = sqlx::query_as(
            "SELECT id, title, publication_year, author_id FROM books ORDER BY id",
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(row_to_book).collect())
    }

    async fn get_by_id(&self, id: i64) -> Result<Option<Book>, AppError> {
        let row: Option<BookRow> = sqlx::query_as(
            "SELECT id, title, publication_year, author_id FROM books WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(row_to_book))
    }

    async fn find_by_author_id(&self, author_id: i64) -> Result<Vec<Book>, AppError> {
        let rows: Vec<BookRow> = sqlx::query_as(
            "SELECT id, title, publication_year, author_id FROM books \
             WHERE author_id = $1 ORDER BY id",
        )
        .bind(author_id)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(row_to_book).collect())
    }

    async fn create(&self, new_book: NewBook) -> Result<i64, AppError> {
        let id: i64 = sqlx::query_scalar(
            "INSERT INTO books (title, publication_year, author_id) \
             VALUES ($1, $2, $3) RETURNING id",
        )
        .bind(new_book.title)
        .bind(new_book.publication_year)
        .bind(new_book.author_id)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(id)
    }

    async fn update(&self, id: i64, patch: BookPatch) -> Result<(), AppError> {
        sqlx::query("UPDATE books SET title = $2, publication_year = $3 WHERE id = $1")
            .bind(id)
            .bind(patch.title)
            .bind(patch.publication_year)
            .execute(self.pool.as_ref())
            .await?;

        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<(), AppError> {
        sqlx::query("DELETE FROM books WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(())
    }

    async fn delete_all_by_author_id(&self, author_id: i64) -> Result<bool, AppError> {
        sqlx::query("DELETE FROM books WHERE author_id = $1")
            .bind(author_id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(true)
    }
}
