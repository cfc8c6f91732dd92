//! Book model

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Book record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    /// Identity assigned by the repository on creation, never reused
    pub id: i32,
    pub title: String,
    pub author: String,
    pub published_year: i32,
}

/// Create book request. Carries no id; the repository assigns one.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateBook {
    pub title: String,
    pub author: String,
    pub published_year: i32,
}

/// Raw query parameters accepted by the listing endpoint.
/// Year bounds arrive as strings and are parsed by the service layer.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookQuery {
    pub author: Option<String>,
    pub start_year: Option<String>,
    pub end_year: Option<String>,
}

/// Typed filter applied by the repository. Absent fields impose no
/// constraint; supplied fields combine with logical AND.
#[derive(Debug, Clone, Default)]
pub struct BookFilter {
    pub author: Option<String>,
    pub start_year: Option<i32>,
    pub end_year: Option<i32>,
}

impl BookFilter {
    /// Whether the book satisfies every supplied bound. Author matching
    /// is exact and case-sensitive; year bounds are inclusive.
    pub fn matches(&self, book: &Book) -> bool {
        if let Some(ref author) = self.author {
            if &book.author != author {
                return false;
            }
        }
        if let Some(start) = self.start_year {
            if book.published_year < start {
                return false;
            }
        }
        if let Some(end) = self.end_year {
            if book.published_year > end {
                return false;
            }
        }
        true
    }
}
