//! Session-backed storage: an in-process store with the same repository
//! contracts as the PostgreSQL backend.
//!
//! The store is an explicit object handed to the repositories by the
//! composition root — never process-global state. The running binary keeps
//! one store for its lifetime; tests create one per test.

mod session_author_repository;
mod session_book_repository;
mod store;

pub use session_author_repository::SessionAuthorRepository;
pub use session_book_repository::SessionBookRepository;
pub use store::SessionStore;
