//! Author management pages: list, create, edit, delete.
//!
//! Form POSTs follow the redirect-after-post pattern: 303 to the author
//! list on success, a 400 re-render of the form with the message on
//! validation failure. Pages render through [`Response::html`] so the whole
//! HTML surface shares the response contract with the JSON API.

use askama::Template;
use axum::{
    Form,
    extract::{Path, State},
};
use serde::Deserialize;

use crate::domain::entities::Author;
use crate::error::AppError;
use crate::http::Response;
use crate::state::AppState;

/// Author list page, `templates/authors.html`.
#[derive(Template)]
#[template(path = "authors.html")]
struct AuthorsTemplate {
    authors: Vec<Author>,
}

/// Create/edit form page, `templates/author_form.html`.
///
/// An empty `error` means no error banner.
#[derive(Template)]
#[template(path = "author_form.html")]
struct AuthorFormTemplate {
    heading: String,
    action: String,
    first_name: String,
    last_name: String,
    error: String,
}

/// 404 page, `templates/not_found.html`.
#[derive(Template)]
#[template(path = "not_found.html")]
struct NotFoundTemplate {
    message: String,
}

/// Fields posted by the author forms.
#[derive(Debug, Deserialize)]
pub struct AuthorForm {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
}

/// Redirects the site root to the author list.
///
/// # Endpoint
///
/// `GET /`
pub async fn root_handler() -> Response {
    Response::redirect("/authors")
}

/// Renders the author list with per-author book counts.
///
/// # Endpoint
///
/// `GET /authors`
pub async fn author_list_handler(State(state): State<AppState>) -> Result<Response, AppError> {
    let authors = state.author_service.list_authors().await?;
    let html = AuthorsTemplate { authors }.render()?;

    Ok(Response::html(html))
}

/// Renders the empty creation form.
///
/// # Endpoint
///
/// `GET /authors/create`
pub async fn create_form_handler() -> Result<Response, AppError> {
    let html = create_form(String::new(), String::new(), String::new()).render()?;
    Ok(Response::html(html))
}

/// Handles the creation form submission.
///
/// # Endpoint
///
/// `POST /authors/create`
pub async fn process_create_handler(
    State(state): State<AppState>,
    Form(form): Form<AuthorForm>,
) -> Result<Response, AppError> {
    match state
        .author_service
        .create_author(&form.first_name, &form.last_name)
        .await
    {
        Ok(author) => {
            tracing::info!(author_id = author.id, "author created");
            Ok(Response::redirect("/authors"))
        }
        Err(AppError::Validation { message, .. }) => {
            let html = create_form(form.first_name, form.last_name, message).render()?;
            Ok(Response::html_with_status(html, 400)?)
        }
        Err(e) => Err(e),
    }
}

/// Renders the edit form pre-filled with the author's name parts.
///
/// # Endpoint
///
/// `GET /authors/{id}/edit`
pub async fn edit_form_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    let author = match state.author_service.get_author(id).await {
        Ok(author) => author,
        Err(AppError::NotFound { .. }) => return not_found_page(id),
        Err(e) => return Err(e),
    };

    let (first, last) = author.name_parts();
    let html = edit_form(id, first.to_string(), last.to_string(), String::new()).render()?;
    Ok(Response::html(html))
}

/// Handles the edit form submission.
///
/// # Endpoint
///
/// `POST /authors/{id}/edit`
pub async fn process_edit_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
    Form(form): Form<AuthorForm>,
) -> Result<Response, AppError> {
    match state
        .author_service
        .update_author(id, &form.first_name, &form.last_name)
        .await
    {
        Ok(author) => {
            tracing::info!(author_id = author.id, "author updated");
            Ok(Response::redirect("/authors"))
        }
        Err(AppError::Validation { message, .. }) => {
            let html = edit_form(id, form.first_name, form.last_name, message).render()?;
            Ok(Response::html_with_status(html, 400)?)
        }
        Err(AppError::NotFound { .. }) => not_found_page(id),
        Err(e) => Err(e),
    }
}

/// Deletes an author and the author's books, then redirects to the list.
///
/// # Endpoint
///
/// `POST /authors/{id}/delete`
///
/// # Errors
///
/// A repository failure while clearing the books aborts the whole delete
/// and surfaces as a 500; the author stays in place.
pub async fn delete_author_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    match state.author_service.delete_author(id).await {
        Ok(()) => {
            tracing::info!(author_id = id, "author deleted");
            Ok(Response::redirect("/authors"))
        }
        Err(AppError::NotFound { .. }) => not_found_page(id),
        Err(e) => Err(e),
    }
}

fn create_form(first_name: String, last_name: String, error: String) -> AuthorFormTemplate {
    AuthorFormTemplate {
        heading: "Create author".to_string(),
        action: "/authors/create".to_string(),
        first_name,
        last_name,
        error,
    }
}

fn edit_form(id: i64, first_name: String, last_name: String, error: String) -> AuthorFormTemplate {
    AuthorFormTemplate {
        heading: "Edit author".to_string(),
        action: format!("/authors/{id}/edit"),
        first_name,
        last_name,
        error,
    }
}

fn not_found_page(id: i64) -> Result<Response, AppError> {
    let html = NotFoundTemplate {
        message: format!("Author with ID {id} not found."),
    }
    .render()?;
    Ok(Response::html_with_status(html, 404)?)
}
