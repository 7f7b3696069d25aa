//! Core business entities.

mod author;
mod book;

pub use author::{Author, NewAuthor};
pub use book::{Book, BookPatch, NewBook};
