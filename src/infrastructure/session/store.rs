//! In-process entity store with per-entity id counters.

use std::sync::{Mutex, MutexGuard};

use serde_json::json;

use crate::domain::entities::Book;
use crate::error::AppError;

/// An author row as stored; book counts are derived elsewhere.
#[derive(Debug, Clone)]
pub(crate) struct AuthorRecord {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Default)]
pub(crate) struct StoreInner {
    pub author_id_counter: i64,
    pub authors: Vec<AuthorRecord>,
    pub book_id_counter: i64,
    pub books: Vec<Book>,
}

/// Shared in-process store behind the session-backed repositories.
///
/// Each entity type has its own monotonically incrementing counter; records
/// keep insertion order, so `get_all` reflects creation order. Interior
/// mutability keeps the repository traits' `&self` contract.
#[derive(Debug, Default)]
pub struct SessionStore {
    inner: Mutex<StoreInner>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Locks the store. A poisoned lock means a writer panicked mid-update;
    /// that surfaces as a repository error rather than a panic here.
    pub(crate) fn lock(&self) -> Result<MutexGuard<'_, StoreInner>, AppError> {
        self.inner
            .lock()
            .map_err(|_| AppError::repository("Session store lock poisoned", json!({})))
    }
}

impl StoreInner {
    /// Assigns the next author id.
    pub fn next_author_id(&mut self) -> i64 {
        self.author_id_counter += 1;
        self.author_id_counter
    }

    /// Assigns the next book id.
    pub fn next_book_id(&mut self) -> i64 {
        self.book_id_counter += 1;
        self.book_id_counter
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters_are_independent() {
        let store = SessionStore::new();
        let mut inner = store.lock().unwrap();

        assert_eq!(inner.next_author_id(), 1);
        assert_eq!(inner.next_author_id(), 2);
        assert_eq!(inner.next_book_id(), 1);
        assert_eq!(inner.next_author_id(), 3);
        assert_eq!(inner.next_book_id(), 2);
    }
}
