//! Shared application state injected into all handlers.

use std::sync::Arc;

use crate::application::services::{AuthorService, BookService};
use crate::domain::repositories::{AuthorRepository, BookRepository};

/// Author service over runtime-selected repositories.
pub type DynAuthorService = AuthorService<dyn AuthorRepository, dyn BookRepository>;
/// Book service over runtime-selected repositories.
pub type DynBookService = BookService<dyn BookRepository, dyn AuthorRepository>;

/// Handler-visible state. The storage backend is chosen once by the
/// composition root ([`crate::server::run`] or a test harness); handlers
/// only ever see the services.
#[derive(Clone)]
pub struct AppState {
    pub author_service: Arc<DynAuthorService>,
    pub book_service: Arc<DynBookService>,
    /// Name of the active storage backend, reported by `/health`.
    pub backend: &'static str,
}

impl AppState {
    /// Wires the services over the given repositories.
    pub fn new(
        backend: &'static str,
        authors: Arc<dyn AuthorRepository>,
        books: Arc<dyn BookRepository>,
    ) -> Self {
        Self {
            author_service: Arc::new(AuthorService::new(authors.clone(), books.clone())),
            book_service: Arc::new(BookService::new(books, authors)),
            backend,
        }
    }
}
