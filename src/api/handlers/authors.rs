//! Handlers for the authors JSON API.

use axum::extract::State;

use crate::api::dto::author::AuthorResponse;
use crate::error::AppError;
use crate::http::Response;
use crate::state::AppState;

/// Lists all authors with their book counts.
///
/// # Endpoint
///
/// `GET /api/authors`
pub async fn list_authors_handler(State(state): State<AppState>) -> Result<Response, AppError> {
    let authors = state.author_service.list_authors().await?;
    let body: Vec<AuthorResponse> = authors.into_iter().map(AuthorResponse::from).collect();

    Ok(Response::json(&body)?)
}
