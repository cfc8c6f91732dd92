//! Uniform response envelope
//!
//! Every endpoint wraps its outcome in [`ApiResponse`]: a success flag,
//! a mirror of the HTTP status line, the typed payload or an error
//! record (never both), optional collection metadata, a per-response
//! request id and a timestamp. The mirrored status is also the status
//! the transport layer emits.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

/// Mirror of the HTTP status line carried inside the body
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct StatusInfo {
    pub code: u16,
    pub message: String,
}

/// Detailed error information
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ErrorInfo {
    /// Machine-readable error code
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Additional error details if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// Additional information about the response
#[derive(Debug, Clone, Default, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MetaData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_page: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_pages: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_page: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prev_page: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub processed_at: Option<DateTime<Utc>>,
}

impl MetaData {
    /// Metadata for an unpaged collection reply. `total` and `count`
    /// both equal the returned sequence length, including zero.
    pub fn for_collection(len: usize) -> Self {
        Self {
            total: Some(len),
            count: Some(len),
            ..Default::default()
        }
    }
}

/// Standard response structure for all API endpoints
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    pub status: StatusInfo,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<MetaData>,
    pub request_id: String,
    pub timestamp: DateTime<Utc>,
}

impl<T: Serialize> ApiResponse<T> {
    fn new(status: StatusCode, success: bool) -> Self {
        Self {
            success,
            status: StatusInfo {
                code: status.as_u16(),
                message: status.canonical_reason().unwrap_or("").to_string(),
            },
            data: None,
            error: None,
            meta: None,
            request_id: Uuid::new_v4().to_string(),
            timestamp: Utc::now(),
        }
    }

    /// Success reply carrying a payload
    pub fn success(status: StatusCode, data: T) -> Self {
        let mut response = Self::new(status, true);
        response.data = Some(data);
        response
    }

    /// Success reply carrying a payload and collection metadata
    pub fn success_with_meta(status: StatusCode, data: T, meta: MetaData) -> Self {
        let mut response = Self::success(status, data);
        response.meta = Some(meta);
        response
    }

    /// Error reply. Carries no data and no meta.
    pub fn error(status: StatusCode, error: ErrorInfo) -> Self {
        let mut response = Self::new(status, false);
        response.error = Some(error);
        response
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        // The mirrored status is the single source of truth for the
        // transport status.
        let status = StatusCode::from_u16(self.status.code)
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self)).into_response()
    }
}
