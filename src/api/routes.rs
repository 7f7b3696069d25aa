//! JSON API route configuration.

use axum::{
    Router,
    routing::{get, post},
};

use crate::api::handlers::{
    create_book_handler, delete_book_handler, edit_book_handler, list_authors_handler,
    list_books_handler,
};
use crate::state::AppState;

/// All JSON API routes, nested under `/api`.
///
/// # Endpoints
///
/// - `GET  /books?author_id=N`    - List an author's books
/// - `POST /books/create`         - Create a book
/// - `POST /books/{id}/edit`      - Edit title / publication year
/// - `POST /books/{id}/delete`    - Delete a book
/// - `GET  /authors`              - List authors with book counts
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/books", get(list_books_handler))
        .route("/books/create", post(create_book_handler))
        .route("/books/{id}/edit", post(edit_book_handler))
        .route("/books/{id}/delete", post(delete_book_handler))
        .route("/authors", get(list_authors_handler))
}
