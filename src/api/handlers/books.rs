//! Handlers for the books JSON API.

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde_json::json;
use validator::Validate;

use crate::api::dto::book::{BookResponse, BooksQuery, CreateBookRequest, UpdateBookRequest};
use crate::error::AppError;
use crate::http::Response;
use crate::state::AppState;

/// Lists all books owned by an author.
///
/// # Endpoint
///
/// `GET /api/books?author_id=N`
pub async fn list_books_handler(
    State(state): State<AppState>,
    Query(query): Query<BooksQuery>,
) -> Result<Response, AppError> {
    let books = state.book_service.books_by_author(query.author_id).await?;
    let body: Vec<BookResponse> = books.into_iter().map(BookResponse::from).collect();

    Ok(Response::json(&body)?)
}

/// Creates a book under an existing author.
///
/// # Endpoint
///
/// `POST /api/books/create`
///
/// # Request Body
///
/// ```json
/// { "author_id": 1, "title": "Dune", "publication_year": 1965 }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request naming the offending field when validation fails
/// (including an `author_id` that references no existing author).
pub async fn create_book_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreateBookRequest>,
) -> Result<Response, AppError> {
    payload.validate()?;

    let book = state.book_service.create_book(payload.into()).await?;

    Ok(Response::json_with_status(&BookResponse::from(book), 201)?)
}

/// Edits a book's title and publication year.
///
/// # Endpoint
///
/// `POST /api/books/{id}/edit`
///
/// # Errors
///
/// Returns 404 Not Found for an unknown book id and 400 Bad Request on
/// validation failure.
pub async fn edit_book_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
    Json(payload): Json<UpdateBookRequest>,
) -> Result<Response, AppError> {
    payload.validate()?;

    let book = state.book_service.update_book(id, payload.into()).await?;

    Ok(Response::json(&BookResponse::from(book))?)
}

/// Deletes a single book.
///
/// # Endpoint
///
/// `POST /api/books/{id}/delete`
pub async fn delete_book_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    state.book_service.delete_book(id).await?;

    Ok(Response::json(&json!({ "deleted": true, "id": id }))?)
}
