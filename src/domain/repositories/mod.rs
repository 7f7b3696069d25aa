//! Repository traits abstracting persistence from the service layer.

mod author_repository;
mod book_repository;

pub use author_repository::AuthorRepository;
pub use book_repository::BookRepository;

#[cfg(test)]
pub use author_repository::MockAuthorRepository;
#[cfg(test)]
pub use book_repository::MockBookRepository;
