//! PostgreSQL book store

use async_trait::async_trait;
use sqlx::{Pool, Postgres};

use super::BookStore;
use crate::{
    error::{AppError, AppResult},
    models::Book,
};

/// SQLSTATE for unique_violation
const UNIQUE_VIOLATION: &str = "23505";

#[derive(Clone)]
pub struct PgBookStore {
    pool: Pool<Postgres>,
}

impl PgBookStore {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BookStore for PgBookStore {
    async fn list_all(&self) -> AppResult<Vec<Book>> {
        let rows = sqlx::query_as::<_, Book>("SELECT isbn, title FROM books ORDER BY isbn")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn search(&self, text: &str, case_sensitive: bool) -> AppResult<Vec<Book>> {
        // strpos keeps `%` and `_` in user text literal
        let query = if case_sensitive {
            "SELECT isbn, title FROM books WHERE strpos(title, $1) > 0 ORDER BY isbn"
        } else {
            "SELECT isbn, title FROM books WHERE strpos(lower(title), lower($1)) > 0 ORDER BY isbn"
        };

        let rows = sqlx::query_as::<_, Book>(query)
            .bind(text)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn find_by_isbn(&self, isbn: &str) -> AppResult<Option<Book>> {
        let row = sqlx::query_as::<_, Book>("SELECT isbn, title FROM books WHERE isbn = $1")
            .bind(isbn)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn save(&self, book: &Book) -> AppResult<Book> {
        sqlx::query_as::<_, Book>(
            r#"
            INSERT INTO books (isbn, title)
            VALUES ($1, $2)
            RETURNING isbn, title
            "#,
        )
        .bind(&book.isbn)
        .bind(&book.title)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db)
                if db.code().as_deref() == Some(UNIQUE_VIOLATION) =>
            {
                AppError::Conflict(format!("Book with isbn '{}' already exists", book.isbn))
            }
            e => AppError::Database(e),
        })
    }

    async fn delete(&self, book: &Book) -> AppResult<()> {
        sqlx::query("DELETE FROM books WHERE isbn = $1")
            .bind(&book.isbn)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn ping(&self) -> AppResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
