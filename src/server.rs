//! HTTP server initialization and runtime setup.
//!
//! The composition root: selects the storage backend, wires repositories
//! into services, and runs the Axum server. Nothing below this layer looks
//! anything up at runtime; every dependency is constructor-injected here.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::postgres::PgPoolOptions;

use crate::config::{Config, StorageBackend};
use crate::domain::repositories::{AuthorRepository, BookRepository};
use crate::infrastructure::persistence::{PgAuthorRepository, PgBookRepository};
use crate::infrastructure::session::{
    SessionAuthorRepository, SessionBookRepository, SessionStore,
};
use crate::routes::app_router;
use crate::state::AppState;

/// Runs the HTTP server with the given configuration.
///
/// For the postgres backend this connects the pool and applies migrations;
/// the session backend creates one in-process store for the server's
/// lifetime.
///
/// # Errors
///
/// Returns an error if the database connection, migration run, or server
/// bind fails.
pub async fn run(config: Config) -> Result<()> {
    let state = match config.storage_backend {
        StorageBackend::Postgres => {
            let url = config
                .database_url
                .as_deref()
                .context("DATABASE_URL must be set for the postgres backend")?;

            let pool = PgPoolOptions::new()
                .max_connections(config.db_max_connections)
                .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
                .idle_timeout(Duration::from_secs(config.db_idle_timeout))
                .max_lifetime(Duration::from_secs(config.db_max_lifetime))
                .connect(url)
                .await?;
            tracing::info!("Connected to database");

            sqlx::migrate::Migrator::new(std::path::Path::new("./migrations"))
                .await?
                .run(&pool)
                .await
                .context("Failed to migrate")?;

            let pool = Arc::new(pool);
            let authors: Arc<dyn AuthorRepository> = Arc::new(PgAuthorRepository::new(pool.clone()));
            let books: Arc<dyn BookRepository> = Arc::new(PgBookRepository::new(pool));

            AppState::new("postgres", authors, books)
        }
        StorageBackend::Session => {
            tracing::info!("Using in-process session store");
            let store = Arc::new(SessionStore::new());
            let authors: Arc<dyn AuthorRepository> =
                Arc::new(SessionAuthorRepository::new(store.clone()));
            let books: Arc<dyn BookRepository> = Arc::new(SessionBookRepository::new(store));

            AppState::new("session", authors, books)
        }
    };

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app)).await?;

    Ok(())
}
