#![allow(dead_code)]

use std::sync::Arc;

use bookstore::domain::repositories::{AuthorRepository, BookRepository};
use bookstore::infrastructure::session::{
    SessionAuthorRepository, SessionBookRepository, SessionStore,
};
use bookstore::state::AppState;

/// Builds handler-ready state over a fresh session store.
pub fn create_test_state() -> AppState {
    let store = Arc::new(SessionStore::new());
    let authors: Arc<dyn AuthorRepository> = Arc::new(SessionAuthorRepository::new(store.clone()));
    let books: Arc<dyn BookRepository> = Arc::new(SessionBookRepository::new(store));

    AppState::new("session", authors, books)
}

pub async fn create_test_author(state: &AppState, first: &str, last: &str) -> i64 {
    state
        .author_service
        .create_author(first, last)
        .await
        .unwrap()
        .id
}

pub async fn create_test_book(state: &AppState, author_id: i64, title: &str, year: i32) -> i64 {
    state
        .book_service
        .create_book(bookstore::domain::entities::NewBook {
            title: title.to_string(),
            publication_year: year,
            author_id,
        })
        .await
        .unwrap()
        .id
}
