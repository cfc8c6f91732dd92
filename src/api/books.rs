//! Book catalog endpoints
//!
//! Transport-shape failures (malformed JSON body, non-integer path id)
//! are caught here through the extractor rejections so that even those
//! replies carry the standard envelope.

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, Query, State,
    },
    http::StatusCode,
    Json,
};

use crate::{
    error::{AppError, AppResult},
    models::{
        book::{Book, BookQuery, CreateBook},
        response::{ApiResponse, MetaData},
    },
};

/// List books, optionally filtered by author and published-year range
#[utoipa::path(
    get,
    path = "/books",
    tag = "books",
    params(
        ("author" = Option<String>, Query, description = "Exact author match"),
        ("startYear" = Option<String>, Query, description = "Inclusive lower bound on published year"),
        ("endYear" = Option<String>, Query, description = "Inclusive upper bound on published year")
    ),
    responses(
        (status = 200, description = "Matching books wrapped in the response envelope", body = Vec<Book>),
        (status = 400, description = "Invalid year filter")
    )
)]
pub async fn list_books(
    State(state): State<crate::AppState>,
    Query(query): Query<BookQuery>,
) -> AppResult<ApiResponse<Vec<Book>>> {
    let books = state.services.books.query(&query).await?;
    let meta = MetaData::for_collection(books.len());
    Ok(ApiResponse::success_with_meta(StatusCode::OK, books, meta))
}

/// Get a book by ID
#[utoipa::path(
    get,
    path = "/books/{id}",
    tag = "books",
    params(("id" = i32, Path, description = "Book ID")),
    responses(
        (status = 200, description = "Book details wrapped in the response envelope", body = Book),
        (status = 400, description = "Non-integer id"),
        (status = 404, description = "Book not found")
    )
)]
pub async fn get_book(
    State(state): State<crate::AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> AppResult<ApiResponse<Book>> {
    let Path(id) = id.map_err(|_| AppError::BadRequest("Invalid book ID".to_string()))?;
    let book = state.services.books.get_book_by_id(id).await?;
    Ok(ApiResponse::success(StatusCode::OK, book))
}

/// Create a book
#[utoipa::path(
    post,
    path = "/books",
    tag = "books",
    request_body = CreateBook,
    responses(
        (status = 201, description = "Book created, wrapped in the response envelope", body = Book),
        (status = 400, description = "Malformed body or invalid book data")
    )
)]
pub async fn create_book(
    State(state): State<crate::AppState>,
    payload: Result<Json<CreateBook>, JsonRejection>,
) -> AppResult<ApiResponse<Book>> {
    let Json(data) = payload.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
    let book = state.services.books.add_book(&data).await?;
    Ok(ApiResponse::success(StatusCode::CREATED, book))
}

/// Delete a book by ID
#[utoipa::path(
    delete,
    path = "/books/{id}",
    tag = "books",
    params(("id" = i32, Path, description = "Book ID")),
    responses(
        (status = 204, description = "Book deleted"),
        (status = 400, description = "Non-integer id"),
        (status = 404, description = "Book not found")
    )
)]
pub async fn delete_book(
    State(state): State<crate::AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> AppResult<StatusCode> {
    let Path(id) = id.map_err(|_| AppError::BadRequest("Invalid book ID".to_string()))?;
    state.services.books.delete_by_id(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
