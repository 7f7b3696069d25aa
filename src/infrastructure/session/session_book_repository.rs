//! Session-backed implementation of the book repository.

use async_trait::async_trait;
use std::sync::Arc;

use super::store::SessionStore;
use crate::domain::entities::{Book, BookPatch, NewBook};
use crate::domain::repositories::BookRepository;
use crate::error::AppError;

/// Book repository over an injected [`SessionStore`].
pub struct SessionBookRepository {
    store: Arc<SessionStore>,
}

impl SessionBookRepository {
    pub fn new(store: Arc<SessionStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl BookRepository for SessionBookRepository {
    async fn get_all(&self) -> Result<Vec<Book>, AppError> {
        let inner = self.store.lock()?;
        Ok(inner.books.clone())
    }

    async fn get_by_id(&self, id: i64) -> Result<Option<Book>, AppError> {
        let inner = self.store.lock()?;
        Ok(inner.books.iter().find(|b| b.id == id).cloned())
    }

    async fn find_by_author_id(&self, author_id: i64) -> Result<Vec<Book>, AppError> {
        let inner = self.store.lock()?;
        Ok(inner
            .books
            .iter()
            .filter(|b| b.author_id == author_id)
            .cloned()
            .collect())
    }

    async fn create(&self, new_book: NewBook) -> Result<i64, AppError> {
        let mut inner = self.store.lock()?;
        let id = inner.next_book_id();
        inner.books.push(Book::new(
            id,
            new_book.title,
            new_book.publication_year,
            new_book.author_id,
        ));
        Ok(id)
    }

    async fn update(&self, id: i64, patch: BookPatch) -> Result<(), AppError> {
        let mut inner = self.store.lock()?;
        if let Some(book) = inner.books.iter_mut().find(|b| b.id == id) {
            book.title = patch.title;
            book.publication_year = patch.publication_year;
        }
        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<(), AppError> {
        let mut inner = self.store.lock()?;
        inner.books.retain(|b| b.id != id);
        Ok(())
    }

    async fn delete_all_by_author_id(&self, author_id: i64) -> Result<bool, AppError> {
        let mut inner = self.store.lock()?;
        inner.books.retain(|b| b.author_id != author_id);
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_book(title: &str, year: i32, author_id: i64) -> NewBook {
        NewBook {
            title: title.to_string(),
            publication_year: year,
            author_id,
        }
    }

    #[tokio::test]
    async fn test_create_and_get_by_id() {
        let repo = SessionBookRepository::new(Arc::new(SessionStore::new()));
        let id = repo.create(new_book("Dune", 1965, 1)).await.unwrap();

        let book = repo.get_by_id(id).await.unwrap().unwrap();
        assert_eq!(book.title, "Dune");
        assert_eq!(book.publication_year, 1965);
        assert_eq!(book.author_id, 1);
    }

    #[tokio::test]
    async fn test_find_by_author_id_filters() {
        let repo = SessionBookRepository::new(Arc::new(SessionStore::new()));
        repo.create(new_book("Dune", 1965, 1)).await.unwrap();
        repo.create(new_book("Hyperion", 1989, 2)).await.unwrap();
        repo.create(new_book("Messiah", 1969, 1)).await.unwrap();

        let books = repo.find_by_author_id(1).await.unwrap();
        let titles: Vec<_> = books.iter().map(|b| b.title.as_str()).collect();
        assert_eq!(titles, vec!["Dune", "Messiah"]);
    }

    #[tokio::test]
    async fn test_update_applies_patch() {
        let repo = SessionBookRepository::new(Arc::new(SessionStore::new()));
        let id = repo.create(new_book("Dnue", 1964, 1)).await.unwrap();

        repo.update(
            id,
            BookPatch {
                title: "Dune".to_string(),
                publication_year: 1965,
            },
        )
        .await
        .unwrap();

        let book = repo.get_by_id(id).await.unwrap().unwrap();
        assert_eq!(book.title, "Dune");
        assert_eq!(book.publication_year, 1965);
        assert_eq!(book.author_id, 1);
    }

    #[tokio::test]
    async fn test_delete_all_by_author_id() {
        let repo = SessionBookRepository::new(Arc::new(SessionStore::new()));
        repo.create(new_book("Dune", 1965, 1)).await.unwrap();
        repo.create(new_book("Hyperion", 1989, 2)).await.unwrap();
        repo.create(new_book("Messiah", 1969, 1)).await.unwrap();

        assert!(repo.delete_all_by_author_id(1).await.unwrap());
        assert!(repo.find_by_author_id(1).await.unwrap().is_empty());
        assert_eq!(repo.find_by_author_id(2).await.unwrap().len(), 1);

        // An author without books still reports success.
        assert!(repo.delete_all_by_author_id(99).await.unwrap());
    }
}
