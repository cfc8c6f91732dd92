//! Error types for Bookshelf server

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::models::response::{ApiResponse, ErrorInfo};

/// Machine-readable error codes surfaced in the envelope `error.code` field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    InvalidRequestBody,
    InvalidBookData,
    InvalidFilter,
    NotFound,
    InternalFailure,
}

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid filter: {0}")]
    InvalidFilter(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message, details) = match self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, ErrorCode::NotFound, msg, None),
            AppError::Validation(msg) => (
                StatusCode::BAD_REQUEST,
                ErrorCode::InvalidBookData,
                "Invalid book data".to_string(),
                Some(msg),
            ),
            AppError::InvalidFilter(msg) => {
                (StatusCode::BAD_REQUEST, ErrorCode::InvalidFilter, msg, None)
            }
            AppError::BadRequest(msg) => (
                StatusCode::BAD_REQUEST,
                ErrorCode::InvalidRequestBody,
                msg,
                None,
            ),
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorCode::InternalFailure,
                    "Internal server error".to_string(),
                    None,
                )
            }
        };

        ApiResponse::<()>::error(
            status,
            ErrorInfo {
                code: format!("{:?}", code),
                message,
                details,
            },
        )
        .into_response()
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
