//! Book inventory endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::{Book, BookDraft},
};

use super::ValidatedJson;

/// Create book request
#[derive(Deserialize, Validate, ToSchema)]
pub struct CreateBookRequest {
    #[validate(length(min = 1, message = "title is required"))]
    pub title: String,
    #[validate(length(min = 1, message = "author is required"))]
    pub author: String,
    #[validate(length(min = 1, message = "isbn is required"))]
    pub isbn: String,
    /// Publication date, YYYY-MM-DD
    pub published_at: String,
}

/// Update book request (full replacement of mutable fields)
#[derive(Deserialize, Validate, ToSchema)]
pub struct UpdateBookRequest {
    #[validate(length(min = 1, message = "title is required"))]
    pub title: String,
    #[validate(length(min = 1, message = "author is required"))]
    pub author: String,
    #[validate(length(min = 1, message = "isbn is required"))]
    pub isbn: String,
    /// Publication date, YYYY-MM-DD
    pub published_at: String,
    #[serde(default)]
    pub is_available: bool,
}

/// Confirmation message for state-transition actions
#[derive(Serialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

fn parse_published_at(value: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|_| AppError::BadRequest("invalid date format".to_string()))
}

/// Create a new book
#[utoipa::path(
    post,
    path = "/books",
    tag = "books",
    request_body = CreateBookRequest,
    responses(
        (status = 201, description = "Book created", body = Book),
        (status = 400, description = "Invalid input or date format"),
        (status = 409, description = "A book with this ISBN already exists")
    )
)]
pub async fn create_book(
    State(state): State<crate::AppState>,
    ValidatedJson(request): ValidatedJson<CreateBookRequest>,
) -> AppResult<(StatusCode, Json<Book>)> {
    let draft = BookDraft {
        title: request.title,
        author: request.author,
        isbn: request.isbn,
        published_at: parse_published_at(&request.published_at)?,
        is_available: false,
    };

    let created = state.services.books.create_book(draft).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// List all books, newest first
#[utoipa::path(
    get,
    path = "/books",
    tag = "books",
    responses(
        (status = 200, description = "List of books", body = Vec<Book>)
    )
)]
pub async fn get_all_books(
    State(state): State<crate::AppState>,
) -> AppResult<Json<Vec<Book>>> {
    let books = state.services.books.get_all_books().await?;
    Ok(Json(books))
}

/// Get a book by id
#[utoipa::path(
    get,
    path = "/books/{id}",
    tag = "books",
    params(
        ("id" = i32, Path, description = "Book ID")
    ),
    responses(
        (status = 200, description = "Book details", body = Book),
        (status = 400, description = "Invalid ID"),
        (status = 404, description = "Book not found")
    )
)]
pub async fn get_book(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Book>> {
    let book = state.services.books.get_book(id).await?;
    Ok(Json(book))
}

/// Replace a book's fields
#[utoipa::path(
    put,
    path = "/books/{id}",
    tag = "books",
    params(
        ("id" = i32, Path, description = "Book ID")
    ),
    request_body = UpdateBookRequest,
    responses(
        (status = 200, description = "Book updated", body = Book),
        (status = 400, description = "Invalid input or date format"),
        (status = 404, description = "Book not found"),
        (status = 409, description = "Another book already holds this ISBN")
    )
)]
pub async fn update_book(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
    ValidatedJson(request): ValidatedJson<UpdateBookRequest>,
) -> AppResult<Json<Book>> {
    let draft = BookDraft {
        title: request.title,
        author: request.author,
        isbn: request.isbn,
        published_at: parse_published_at(&request.published_at)?,
        is_available: request.is_available,
    };

    let updated = state.services.books.update_book(id, draft).await?;
    Ok(Json(updated))
}

/// Delete a book permanently
#[utoipa::path(
    delete,
    path = "/books/{id}",
    tag = "books",
    params(
        ("id" = i32, Path, description = "Book ID")
    ),
    responses(
        (status = 204, description = "Book deleted"),
        (status = 400, description = "Invalid ID"),
        (status = 404, description = "Book not found")
    )
)]
pub async fn delete_book(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    state.services.books.delete_book(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Check a book out
#[utoipa::path(
    post,
    path = "/books/{id}/checkout",
    tag = "books",
    params(
        ("id" = i32, Path, description = "Book ID")
    ),
    responses(
        (status = 200, description = "Book checked out", body = MessageResponse),
        (status = 400, description = "Invalid ID"),
        (status = 404, description = "Book not found"),
        (status = 409, description = "Book is not available")
    )
)]
pub async fn checkout_book(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<MessageResponse>> {
    state.services.books.checkout_book(id).await?;
    Ok(Json(MessageResponse {
        message: "book checked out successfully".to_string(),
    }))
}

/// Return a checked-out book
#[utoipa::path(
    post,
    path = "/books/{id}/return",
    tag = "books",
    params(
        ("id" = i32, Path, description = "Book ID")
    ),
    responses(
        (status = 200, description = "Book returned", body = MessageResponse),
        (status = 400, description = "Invalid ID"),
        (status = 404, description = "Book not found")
    )
)]
pub async fn return_book(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<MessageResponse>> {
    state.services.books.return_book(id).await?;
    Ok(Json(MessageResponse {
        message: "book returned successfully".to_string(),
    }))
}
