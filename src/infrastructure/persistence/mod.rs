//! PostgreSQL repository implementations.

mod pg_author_repository;
mod pg_book_repository;

pub use pg_author_repository::PgAuthorRepository;
pub use pg_book_repository::PgBookRepository;
