//! Business logic services

pub mod books;

use std::sync::Arc;

use crate::repository::BookRepository;

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub books: books::BooksService,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(repository: Arc<dyn BookRepository>) -> Self {
        Self {
            books: books::BooksService::new(repository),
        }
    }
}
