//! Domain models

pub mod book;

pub use book::{Book, BookDraft};
