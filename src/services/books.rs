//! Book catalog service
//!
//! Gatekeeper for domain invariants. Invalid input is rejected here and
//! never reaches the repository; repository errors pass through
//! unchanged.

use crate::{
    error::{AppError, AppResult},
    models::book::{Book, BookFilter, BookQuery, CreateBook},
    repository::Repository,
};

#[derive(Clone)]
pub struct BookService {
    repository: Repository,
}

impl BookService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Validate and add a book. The repository assigns the identity.
    pub async fn add_book(&self, data: &CreateBook) -> AppResult<Book> {
        if data.title.is_empty() {
            return Err(AppError::Validation("Book title cannot be empty".to_string()));
        }
        if data.author.is_empty() {
            return Err(AppError::Validation("Book author cannot be empty".to_string()));
        }
        if data.published_year <= 0 {
            return Err(AppError::Validation(
                "Published year must be a positive integer".to_string(),
            ));
        }
        self.repository.books.add(data)
    }

    /// Get a book by ID
    pub async fn get_book_by_id(&self, id: i32) -> AppResult<Book> {
        self.repository.books.get_by_id(id)
    }

    /// Delete a book by ID
    pub async fn delete_by_id(&self, id: i32) -> AppResult<()> {
        self.repository.books.delete_by_id(id)
    }

    /// Filtered listing. Parses the raw year bounds, then delegates.
    pub async fn query(&self, query: &BookQuery) -> AppResult<Vec<Book>> {
        let filter = BookFilter {
            // An empty author parameter imposes no constraint
            author: query.author.clone().filter(|author| !author.is_empty()),
            start_year: parse_year(query.start_year.as_deref(), "startYear")?,
            end_year: parse_year(query.end_year.as_deref(), "endYear")?,
        };
        self.repository.books.find(&filter)
    }
}

/// Empty strings count as absent; anything else must parse as an integer
fn parse_year(raw: Option<&str>, field: &str) -> AppResult<Option<i32>> {
    match raw {
        None | Some("") => Ok(None),
        Some(value) => value
            .parse::<i32>()
            .map(Some)
            .map_err(|_| AppError::InvalidFilter(format!("Invalid {} format", field))),
    }
}
