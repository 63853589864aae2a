//! Book management service

use std::sync::Arc;

use crate::{
    error::{AppError, AppResult},
    models::Book,
    repository::BookStore,
};

#[derive(Clone)]
pub struct BookService {
    store: Arc<dyn BookStore>,
    case_sensitive: bool,
}

impl BookService {
    pub fn new(store: Arc<dyn BookStore>, case_sensitive: bool) -> Self {
        Self {
            store,
            case_sensitive,
        }
    }

    pub async fn get_books(&self) -> AppResult<Vec<Book>> {
        self.store.list_all().await
    }

    /// Books whose title contains `text`, using the configured case policy
    pub async fn get_books_containing_text(&self, text: &str) -> AppResult<Vec<Book>> {
        self.store.search(text, self.case_sensitive).await
    }

    /// Fetch a book, failing with `NotFound` when the ISBN is unknown
    pub async fn validate_and_get_book(&self, isbn: &str) -> AppResult<Book> {
        self.store
            .find_by_isbn(isbn)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Book with isbn '{}' not found", isbn)))
    }

    pub async fn save_book(&self, book: Book) -> AppResult<Book> {
        let saved = self.store.save(&book).await?;
        tracing::info!("Book created: isbn={}", saved.isbn);
        Ok(saved)
    }

    pub async fn delete_book(&self, book: &Book) -> AppResult<()> {
        self.store.delete(book).await?;
        tracing::info!("Book deleted: isbn={}", book.isbn);
        Ok(())
    }

    /// Look up then delete; the store is never asked to delete an unknown ISBN
    pub async fn remove_book(&self, isbn: &str) -> AppResult<Book> {
        let book = self.validate_and_get_book(isbn).await?;
        self.delete_book(&book).await?;
        Ok(book)
    }

    pub async fn check_store(&self) -> AppResult<()> {
        self.store.ping().await
    }
}
