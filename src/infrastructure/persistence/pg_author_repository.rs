//! PostgreSQL implementation of the author repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{Author, NewAuthor};
use crate::domain::repositories::AuthorRepository;
use crate::error::AppError;

/// PostgreSQL repository for author storage and retrieval.
///
/// All statements bind parameters; ids are assigned by the database.
pub struct PgAuthorRepository {
    pool: Arc<PgPool>,
}

impl PgAuthorRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AuthorRepository for PgAuthorRepository {
    async fn get_all(&self) -> Result<Vec<Author>, AppError> {
        let rows: Vec<(i64, String)> =
            sqlx::query_as("SELECT id, name FROM authors ORDER BY id")
                .fetch_all(self.pool.as_ref())
                .await?;

        Ok(rows
            .into_iter()
            .map(|(id, name)| Author::new(id, name, 0))
            .collect())
    }

    async fn get_by_id(&self, id: i64) -> Result<Option<Author>, AppError> {
        let row: Option<(i64, String)> =
            sqlx::query_as("SELECT id, name FROM authors WHERE id = $1")
                .bind(id)
                .fetch_optional(self.pool.as_ref())
                .await?;

        Ok(row.map(|(id, name)| Author::new(id, name, 0)))
    }

    async fn create(&self, new_author: NewAuthor) -> Result<i64, AppError> {
        let id: i64 = sqlx::query_scalar("INSERT INTO authors (name) VALUES ($1) RETURNING id")
            .bind(new_author.full_name())
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(id)
    }

    async fn update(&self, id: i64, name: &str) -> Result<(), AppError> {
        sqlx::query("UPDATE authors SET name = $2 WHERE id = $1")
            .bind(id)
            .bind(name)
            .execute(self.pool.as_ref())
            .await?;

        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<(), AppError> {
        sqlx::query("DELETE FROM authors WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(())
    }
}
