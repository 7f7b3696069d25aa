//! Web route configuration.

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;
use crate::web::handlers::{
    author_list_handler, create_form_handler, delete_author_handler, edit_form_handler,
    process_create_handler, process_edit_handler, root_handler,
};

/// All HTML routes.
///
/// # Endpoints
///
/// - `GET  /`                     - Redirect to the author list
/// - `GET  /authors`              - Author list
/// - `GET  /authors/create`       - Creation form
/// - `POST /authors/create`       - Create, then redirect
/// - `GET  /authors/{id}/edit`    - Edit form
/// - `POST /authors/{id}/edit`    - Update, then redirect
/// - `POST /authors/{id}/delete`  - Cascading delete, then redirect
pub fn web_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(root_handler))
        .route("/authors", get(author_list_handler))
        .route(
            "/authors/create",
            get(create_form_handler).post(process_create_handler),
        )
        .route(
            "/authors/{id}/edit",
            get(edit_form_handler).post(process_edit_handler),
        )
        .route("/authors/{id}/delete", post(delete_author_handler))
}
