//! Book entity and its availability state machine.
//!
//! Identifier and both timestamps are assigned by the store; `updated_at`
//! is refreshed by the store on every mutation. Availability changes only
//! through [`Book::checkout`] and [`Book::make_available`], initial creation
//! (forced available) or a full replace-update.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use crate::error::{AppError, AppResult};

/// A book in the inventory
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Book {
    pub id: i32,
    pub title: String,
    pub author: String,
    pub isbn: String,
    /// Publication date (calendar date, no time-of-day)
    pub published_at: NaiveDate,
    pub is_available: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Caller-supplied book fields, used for create and full replace-update.
/// Carries no identifier or timestamps; the store owns those.
#[derive(Debug, Clone)]
pub struct BookDraft {
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub published_at: NaiveDate,
    pub is_available: bool,
}

impl BookDraft {
    /// Required fields must be non-empty at every persisted state.
    pub fn validate(&self) -> AppResult<()> {
        if self.title.is_empty() {
            return Err(AppError::Validation("title is required".to_string()));
        }
        if self.author.is_empty() {
            return Err(AppError::Validation("author is required".to_string()));
        }
        if self.isbn.is_empty() {
            return Err(AppError::Validation("isbn is required".to_string()));
        }
        Ok(())
    }
}

impl Book {
    /// Mark the book as checked out.
    ///
    /// Checking out a book that is already checked out is an error, not a
    /// no-op.
    pub fn checkout(&mut self) -> AppResult<()> {
        if !self.is_available {
            return Err(AppError::NotAvailable(
                "book is not available".to_string(),
            ));
        }
        self.is_available = false;
        Ok(())
    }

    /// Mark the book as available again after a return.
    ///
    /// Returning a book that is already available is likewise rejected.
    pub fn make_available(&mut self) -> AppResult<()> {
        if self.is_available {
            return Err(AppError::AlreadyAvailable(
                "book is already available".to_string(),
            ));
        }
        self.is_available = true;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn book(is_available: bool) -> Book {
        Book {
            id: 1,
            title: "Dune".to_string(),
            author: "Herbert".to_string(),
            isbn: "123".to_string(),
            published_at: NaiveDate::from_ymd_opt(1965, 8, 1).unwrap(),
            is_available,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn checkout_flips_available_to_checked_out() {
        let mut b = book(true);
        b.checkout().unwrap();
        assert!(!b.is_available);
    }

    #[test]
    fn checkout_of_checked_out_book_is_rejected() {
        let mut b = book(false);
        let err = b.checkout().unwrap_err();
        assert!(matches!(err, AppError::NotAvailable(_)));
        assert!(!b.is_available);
    }

    #[test]
    fn return_flips_checked_out_to_available() {
        let mut b = book(false);
        b.make_available().unwrap();
        assert!(b.is_available);
    }

    #[test]
    fn return_of_available_book_is_rejected() {
        let mut b = book(true);
        let err = b.make_available().unwrap_err();
        assert!(matches!(err, AppError::AlreadyAvailable(_)));
        assert!(b.is_available);
    }

    #[test]
    fn draft_validation_requires_non_empty_fields() {
        let draft = BookDraft {
            title: "Dune".to_string(),
            author: "Herbert".to_string(),
            isbn: "123".to_string(),
            published_at: NaiveDate::from_ymd_opt(1965, 8, 1).unwrap(),
            is_available: true,
        };
        assert!(draft.validate().is_ok());

        for field in ["title", "author", "isbn"] {
            let mut bad = draft.clone();
            match field {
                "title" => bad.title.clear(),
                "author" => bad.author.clear(),
                _ => bad.isbn.clear(),
            }
            let err = bad.validate().unwrap_err();
            assert!(matches!(err, AppError::Validation(_)), "{field}");
        }
    }
}
