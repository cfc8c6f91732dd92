//! Bookshelf Book Catalog Server
//!
//! A Rust REST JSON API for managing a book catalog backed by an
//! in-process, thread-safe store. Every reply is wrapped in a uniform
//! response envelope carrying a request id and timestamp.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
}
