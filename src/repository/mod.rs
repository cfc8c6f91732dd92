//! Repository layer owning the in-process data stores

pub mod books;

/// Main repository struct aggregating the per-resource stores
#[derive(Clone)]
pub struct Repository {
    pub books: books::BooksRepository,
}

impl Repository {
    /// Create a repository with a fresh, empty book store
    pub fn new() -> Self {
        Self {
            books: books::BooksRepository::new(),
        }
    }
}

impl Default for Repository {
    fn default() -> Self {
        Self::new()
    }
}
