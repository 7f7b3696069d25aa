//! Request/response DTOs for the JSON API.

pub mod author;
pub mod book;
pub mod health;
