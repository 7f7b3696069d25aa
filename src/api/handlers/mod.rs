//! JSON API handlers.

mod authors;
mod books;
mod health;

pub use authors::list_authors_handler;
pub use books::{
    create_book_handler, delete_book_handler, edit_book_handler, list_books_handler,
};
pub use health::health_handler;
