//! API handlers for Libris REST endpoints

pub mod books;
pub mod health;
pub mod openapi;

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    routing::{delete, get, post, put},
    Json, Router,
};
use serde::de::DeserializeOwned;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use validator::Validate;

use crate::{error::AppError, AppState};

/// JSON extractor that rejects malformed bodies with 400 and runs the
/// request-shape validation before the payload reaches a handler.
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e: JsonRejection| AppError::BadRequest(e.body_text()))?;

        value
            .validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        Ok(ValidatedJson(value))
    }
}

/// Create the application router with all routes
pub fn router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // API v1 routes
    let api_v1 = Router::new()
        .route("/books", post(books::create_book))
        .route("/books", get(books::get_all_books))
        .route("/books/:id", get(books::get_book))
        .route("/books/:id", put(books::update_book))
        .route("/books/:id", delete(books::delete_book))
        .route("/books/:id/checkout", post(books::checkout_book))
        .route("/books/:id/return", post(books::return_book))
        .with_state(state);

    // OpenAPI documentation
    let openapi = openapi::create_openapi_router();

    Router::new()
        .route("/health", get(health::health_check))
        .nest("/api/v1", api_v1)
        .merge(openapi)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
