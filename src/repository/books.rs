//! Books repository for database operations

use async_trait::async_trait;
use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::{Book, BookDraft},
    repository::BookRepository,
};

#[derive(Clone)]
pub struct PgBooksRepository {
    pool: Pool<Postgres>,
}

impl PgBooksRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BookRepository for PgBooksRepository {
    async fn create(&self, book: &BookDraft) -> AppResult<Book> {
        let created = sqlx::query_as::<_, Book>(
            r#"
            INSERT INTO books (title, author, isbn, published_at, is_available, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, NOW(), NOW())
            RETURNING id, title, author, isbn, published_at, is_available, created_at, updated_at
            "#,
        )
        .bind(&book.title)
        .bind(&book.author)
        .bind(&book.isbn)
        .bind(book.published_at)
        .bind(book.is_available)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    async fn get_by_id(&self, id: i32) -> AppResult<Book> {
        sqlx::query_as::<_, Book>(
            r#"
            SELECT id, title, author, isbn, published_at, is_available, created_at, updated_at
            FROM books
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Book with id {} not found", id)))
    }

    async fn get_all(&self) -> AppResult<Vec<Book>> {
        let books = sqlx::query_as::<_, Book>(
            r#"
            SELECT id, title, author, isbn, published_at, is_available, created_at, updated_at
            FROM books
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(books)
    }

    async fn update(&self, book: &Book) -> AppResult<Book> {
        sqlx::query_as::<_, Book>(
            r#"
            UPDATE books
            SET title = $1, author = $2, isbn = $3, published_at = $4, is_available = $5, updated_at = NOW()
            WHERE id = $6
            RETURNING id, title, author, isbn, published_at, is_available, created_at, updated_at
            "#,
        )
        .bind(&book.title)
        .bind(&book.author)
        .bind(&book.isbn)
        .bind(book.published_at)
        .bind(book.is_available)
        .bind(book.id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Book with id {} not found", book.id)))
    }

    async fn delete(&self, id: i32) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM books WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Book with id {} not found", id)));
        }

        Ok(())
    }

    async fn get_by_isbn(&self, isbn: &str) -> AppResult<Option<Book>> {
        let book = sqlx::query_as::<_, Book>(
            r#"
            SELECT id, title, author, isbn, published_at, is_available, created_at, updated_at
            FROM books
            WHERE isbn = $1
            "#,
        )
        .bind(isbn)
        .fetch_optional(&self.pool)
        .await?;

        Ok(book)
    }
}
