//! In-memory book store

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{title_contains, BookStore};
use crate::{
    error::{AppError, AppResult},
    models::Book,
};

/// Book store keeping records in a map keyed by ISBN.
///
/// Used for development and tests. Contents are lost on restart.
#[derive(Debug, Default)]
pub struct InMemoryBookStore {
    books: RwLock<BTreeMap<String, Book>>,
}

impl InMemoryBookStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BookStore for InMemoryBookStore {
    async fn list_all(&self) -> AppResult<Vec<Book>> {
        Ok(self.books.read().await.values().cloned().collect())
    }

    async fn search(&self, text: &str, case_sensitive: bool) -> AppResult<Vec<Book>> {
        Ok(self
            .books
            .read()
            .await
            .values()
            .filter(|b| title_contains(&b.title, text, case_sensitive))
            .cloned()
            .collect())
    }

    async fn find_by_isbn(&self, isbn: &str) -> AppResult<Option<Book>> {
        Ok(self.books.read().await.get(isbn).cloned())
    }

    async fn save(&self, book: &Book) -> AppResult<Book> {
        let mut books = self.books.write().await;
        if books.contains_key(&book.isbn) {
            return Err(AppError::Conflict(format!(
                "Book with isbn '{}' already exists",
                book.isbn
            )));
        }
        books.insert(book.isbn.clone(), book.clone());
        Ok(book.clone())
    }

    async fn delete(&self, book: &Book) -> AppResult<()> {
        self.books.write().await.remove(&book.isbn);
        Ok(())
    }

    async fn ping(&self) -> AppResult<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn seeded() -> InMemoryBookStore {
        let store = InMemoryBookStore::new();
        store.save(&Book::new("222", "Children of Dune")).await.unwrap();
        store.save(&Book::new("111", "Dune")).await.unwrap();
        store.save(&Book::new("333", "Hyperion")).await.unwrap();
        store
    }

    fn isbns(books: &[Book]) -> Vec<&str> {
        books.iter().map(|b| b.isbn.as_str()).collect()
    }

    #[tokio::test]
    async fn test_list_ordered_by_isbn() {
        let store = seeded().await;
        let books = store.list_all().await.unwrap();
        assert_eq!(isbns(&books), vec!["111", "222", "333"]);
    }

    #[tokio::test]
    async fn test_search_case_policy() {
        let store = seeded().await;

        let books = store.search("dune", false).await.unwrap();
        assert_eq!(isbns(&books), vec!["111", "222"]);

        let books = store.search("dune", true).await.unwrap();
        assert!(books.is_empty());

        let books = store.search("Dune", true).await.unwrap();
        assert_eq!(isbns(&books), vec!["111", "222"]);
    }

    #[tokio::test]
    async fn test_search_empty_text_matches_all() {
        let store = seeded().await;
        assert_eq!(
            store.search("", false).await.unwrap(),
            store.list_all().await.unwrap()
        );
    }

    #[tokio::test]
    async fn test_duplicate_isbn_rejected() {
        let store = seeded().await;
        let err = store.save(&Book::new("111", "Other")).await.unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));

        let kept = store.find_by_isbn("111").await.unwrap().unwrap();
        assert_eq!(kept.title, "Dune");
    }

    #[tokio::test]
    async fn test_delete() {
        let store = seeded().await;
        let book = store.find_by_isbn("111").await.unwrap().unwrap();
        store.delete(&book).await.unwrap();

        assert!(store.find_by_isbn("111").await.unwrap().is_none());
        assert_eq!(store.list_all().await.unwrap().len(), 2);
    }
}
