//! Repository layer: persistence of book records

pub mod memory;
pub mod postgres;

use std::sync::Arc;

use async_trait::async_trait;
use sqlx::postgres::PgPoolOptions;

use crate::{
    config::{AppConfig, StoreBackend},
    error::{AppError, AppResult},
    models::Book,
};

pub use memory::InMemoryBookStore;
pub use postgres::PgBookStore;

/// Storage capability consumed by the book service.
///
/// Implementations own every `Book`; callers hold copies only. Listing and
/// searching return books ordered by ISBN.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookStore: Send + Sync {
    /// All books in the store
    async fn list_all(&self) -> AppResult<Vec<Book>>;

    /// Books whose title contains `text`
    async fn search(&self, text: &str, case_sensitive: bool) -> AppResult<Vec<Book>>;

    async fn find_by_isbn(&self, isbn: &str) -> AppResult<Option<Book>>;

    /// Persist a new book. Fails with `AppError::Conflict` if the ISBN is taken.
    async fn save(&self, book: &Book) -> AppResult<Book>;

    async fn delete(&self, book: &Book) -> AppResult<()>;

    /// Check that the backend is reachable
    async fn ping(&self) -> AppResult<()>;
}

/// Build the store selected by configuration
pub async fn connect(config: &AppConfig) -> AppResult<Arc<dyn BookStore>> {
    match config.store.backend {
        StoreBackend::Memory => {
            tracing::info!("Using in-memory book store");
            Ok(Arc::new(InMemoryBookStore::new()))
        }
        StoreBackend::Postgres => {
            let pool = PgPoolOptions::new()
                .max_connections(config.database.max_connections)
                .min_connections(config.database.min_connections)
                .connect(&config.database.url)
                .await?;

            tracing::info!("Connected to database");

            sqlx::migrate!("./migrations")
                .run(&pool)
                .await
                .map_err(|e| AppError::Internal(format!("Migration failed: {}", e)))?;

            tracing::info!("Database migrations completed");

            Ok(Arc::new(PgBookStore::new(pool)))
        }
    }
}

/// Case-aware substring match shared by stores that filter in process
pub(crate) fn title_contains(title: &str, text: &str, case_sensitive: bool) -> bool {
    if case_sensitive {
        title.contains(text)
    } else {
        title.to_lowercase().contains(&text.to_lowercase())
    }
}
