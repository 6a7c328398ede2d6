//! Repository layer for database operations

pub mod books;

pub use books::PgBooksRepository;

use async_trait::async_trait;

use crate::{
    error::AppResult,
    models::{Book, BookDraft},
};

/// Persistence contract the business layer depends on.
///
/// Every operation that targets a specific record fails with
/// `AppError::NotFound` when the record does not exist. The one exception is
/// [`get_by_isbn`](BookRepository::get_by_isbn): a miss there is the
/// expected outcome of a uniqueness probe, so it returns `None` instead.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookRepository: Send + Sync {
    /// Insert a new book; the store assigns the id and both timestamps.
    async fn create(&self, book: &BookDraft) -> AppResult<Book>;

    async fn get_by_id(&self, id: i32) -> AppResult<Book>;

    /// All books, newest first.
    async fn get_all(&self) -> AppResult<Vec<Book>>;

    /// Full replacement of the mutable fields; the store refreshes
    /// `updated_at`.
    async fn update(&self, book: &Book) -> AppResult<Book>;

    /// Permanent removal; there is no soft delete.
    async fn delete(&self, id: i32) -> AppResult<()>;

    async fn get_by_isbn(&self, isbn: &str) -> AppResult<Option<Book>>;
}
