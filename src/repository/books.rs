//! In-memory book store
//!
//! All reads and writes serialize through a single mutex so no request
//! ever observes a partial mutation. Reads hand out snapshot copies;
//! the lock is held only for the map access itself.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use crate::{
    error::{AppError, AppResult},
    models::book::{Book, BookFilter, CreateBook},
};

/// State behind the lock: the id -> book map plus the next identity to
/// hand out. Identities strictly increase and are never reissued, even
/// after deletion.
#[derive(Debug)]
struct BookStore {
    books: HashMap<i32, Book>,
    next_id: i32,
}

impl BookStore {
    fn new() -> Self {
        Self {
            books: HashMap::new(),
            next_id: 1,
        }
    }
}

/// Cloneable handle to the shared book store
#[derive(Clone)]
pub struct BooksRepository {
    store: Arc<Mutex<BookStore>>,
}

impl BooksRepository {
    pub fn new() -> Self {
        Self {
            store: Arc::new(Mutex::new(BookStore::new())),
        }
    }

    fn lock(&self) -> AppResult<MutexGuard<'_, BookStore>> {
        self.store
            .lock()
            .map_err(|_| AppError::Internal("book store lock poisoned".to_string()))
    }

    /// Insert a new book under the next identity and return the stored copy
    pub fn add(&self, data: &CreateBook) -> AppResult<Book> {
        let mut store = self.lock()?;
        let book = Book {
            id: store.next_id,
            title: data.title.clone(),
            author: data.author.clone(),
            published_year: data.published_year,
        };
        store.books.insert(book.id, book.clone());
        store.next_id += 1;
        Ok(book)
    }

    /// Snapshot of the whole collection, in no particular order
    pub fn list(&self) -> AppResult<Vec<Book>> {
        let store = self.lock()?;
        Ok(store.books.values().cloned().collect())
    }

    /// Get a book by its ID
    pub fn get_by_id(&self, id: i32) -> AppResult<Book> {
        let store = self.lock()?;
        store
            .books
            .get(&id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("Book {} not found", id)))
    }

    /// Remove a book by its ID
    pub fn delete_by_id(&self, id: i32) -> AppResult<()> {
        let mut store = self.lock()?;
        store
            .books
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| AppError::NotFound(format!("Book {} not found", id)))
    }

    /// All books satisfying every supplied filter. An empty result is a
    /// valid success outcome, never an error.
    pub fn find(&self, filter: &BookFilter) -> AppResult<Vec<Book>> {
        let store = self.lock()?;
        Ok(store
            .books
            .values()
            .filter(|book| filter.matches(book))
            .cloned()
            .collect())
    }
}

impl Default for BooksRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::thread;

    fn book(title: &str, author: &str, year: i32) -> CreateBook {
        CreateBook {
            title: title.to_string(),
            author: author.to_string(),
            published_year: year,
        }
    }

    #[test]
    fn add_then_get_returns_equal_book() {
        let repo = BooksRepository::new();
        let added = repo.add(&book("Dune", "Frank Herbert", 1965)).unwrap();

        assert_eq!(added.id, 1);
        let fetched = repo.get_by_id(added.id).unwrap();
        assert_eq!(fetched, added);
        assert_eq!(fetched.title, "Dune");
        assert_eq!(fetched.author, "Frank Herbert");
        assert_eq!(fetched.published_year, 1965);
    }

    #[test]
    fn ids_are_sequential_and_never_reused_after_delete() {
        let repo = BooksRepository::new();
        let first = repo.add(&book("Dune", "Frank Herbert", 1965)).unwrap();
        let second = repo.add(&book("Foundation", "Isaac Asimov", 1951)).unwrap();
        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);

        repo.delete_by_id(second.id).unwrap();
        let third = repo.add(&book("Hyperion", "Dan Simmons", 1989)).unwrap();
        assert_eq!(third.id, 3);
    }

    #[test]
    fn get_missing_book_is_not_found() {
        let repo = BooksRepository::new();
        assert!(matches!(repo.get_by_id(42), Err(AppError::NotFound(_))));
    }

    #[test]
    fn delete_missing_book_leaves_collection_unchanged() {
        let repo = BooksRepository::new();
        repo.add(&book("Dune", "Frank Herbert", 1965)).unwrap();

        let before = repo.list().unwrap();
        assert!(matches!(repo.delete_by_id(42), Err(AppError::NotFound(_))));
        let after = repo.list().unwrap();

        assert_eq!(before.len(), after.len());
        assert_eq!(before, after);
    }

    #[test]
    fn find_without_filters_returns_full_collection() {
        let repo = BooksRepository::new();
        repo.add(&book("Dune", "Frank Herbert", 1965)).unwrap();
        repo.add(&book("Foundation", "Isaac Asimov", 1951)).unwrap();

        let mut all = repo.find(&BookFilter::default()).unwrap();
        all.sort_by_key(|b| b.id);
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].title, "Dune");
        assert_eq!(all[1].title, "Foundation");
    }

    #[test]
    fn find_by_author_is_disjoint_from_rest() {
        let repo = BooksRepository::new();
        repo.add(&book("Dune", "Frank Herbert", 1965)).unwrap();
        repo.add(&book("Dune Messiah", "Frank Herbert", 1969)).unwrap();
        repo.add(&book("Foundation", "Isaac Asimov", 1951)).unwrap();

        let filter = BookFilter {
            author: Some("Frank Herbert".to_string()),
            ..Default::default()
        };
        let herbert = repo.find(&filter).unwrap();
        assert_eq!(herbert.len(), 2);
        assert!(herbert.iter().all(|b| b.author == "Frank Herbert"));
    }

    #[test]
    fn find_by_year_range_is_inclusive() {
        let repo = BooksRepository::new();
        repo.add(&book("Dune", "Frank Herbert", 1965)).unwrap();
        repo.add(&book("Foundation", "Isaac Asimov", 1951)).unwrap();
        repo.add(&book("Hyperion", "Dan Simmons", 1989)).unwrap();

        let filter = BookFilter {
            start_year: Some(1951),
            end_year: Some(1965),
            ..Default::default()
        };
        let mut matched = repo.find(&filter).unwrap();
        matched.sort_by_key(|b| b.id);
        assert_eq!(matched.len(), 2);
        assert_eq!(matched[0].title, "Dune");
        assert_eq!(matched[1].title, "Foundation");
    }

    #[test]
    fn find_with_no_matches_returns_empty_not_error() {
        let repo = BooksRepository::new();
        repo.add(&book("Dune", "Frank Herbert", 1965)).unwrap();

        let filter = BookFilter {
            start_year: Some(2000),
            ..Default::default()
        };
        assert!(repo.find(&filter).unwrap().is_empty());
    }

    #[test]
    fn concurrent_adds_lose_no_updates() {
        let repo = BooksRepository::new();

        let handles: Vec<_> = (0..100)
            .map(|i| {
                let repo = repo.clone();
                thread::spawn(move || {
                    repo.add(&CreateBook {
                        title: format!("Book {}", i),
                        author: "Author".to_string(),
                        published_year: 2000,
                    })
                    .unwrap()
                    .id
                })
            })
            .collect();

        let ids: HashSet<i32> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert_eq!(ids.len(), 100);

        let all = repo.list().unwrap();
        assert_eq!(all.len(), 100);
        for id in ids {
            assert!(repo.get_by_id(id).is_ok());
        }
    }
}
