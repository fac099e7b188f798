//! In-memory book store seeded from a JSON snapshot.

use std::collections::HashSet;
use std::path::Path;

use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::debug;
use uuid::Uuid;

use super::BookStore;
use crate::error::{StoreError, StoreResult};
use crate::models::{Book, BookPayload};

/// Snapshot compiled into the binary for `--memory` without `--snapshot`.
const BUILTIN_SNAPSHOT: &str = include_str!("../../assets/books.json");

/// [`BookStore`] holding its records in a vector.
///
/// Ids of created records are random UUIDs. Nothing is written back to the
/// snapshot file.
#[derive(Debug, Default)]
pub struct InMemoryBookStore {
    books: Mutex<Vec<Book>>,
}

impl InMemoryBookStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_books(books: Vec<Book>) -> Self {
        Self {
            books: Mutex::new(books),
        }
    }

    /// Parse a JSON array of books. Ids must be unique.
    pub fn from_snapshot_json(json: &str) -> StoreResult<Self> {
        let books: Vec<Book> = serde_json::from_str(json).map_err(|e| StoreError::Configuration {
            message: format!("Invalid book snapshot: {}", e),
        })?;
        let mut seen = HashSet::with_capacity(books.len());
        if let Some(dup) = books.iter().find(|b| !seen.insert(b.id.as_str())) {
            return Err(StoreError::Configuration {
                message: format!("Duplicate book id '{}' in snapshot", dup.id),
            });
        }
        Ok(Self::with_books(books))
    }

    /// Load a JSON array of books from `path`.
    pub fn from_snapshot_file(path: impl AsRef<Path>) -> StoreResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| StoreError::Configuration {
            message: format!("Cannot read snapshot {}: {}", path.display(), e),
        })?;
        debug!(path = %path.display(), "Loaded book snapshot");
        Self::from_snapshot_json(&json)
    }

    /// Store seeded with the bundled sample catalog.
    pub fn builtin() -> StoreResult<Self> {
        Self::from_snapshot_json(BUILTIN_SNAPSHOT)
    }

    /// Current contents, in store order.
    pub async fn snapshot(&self) -> Vec<Book> {
        self.books.lock().await.clone()
    }
}

#[async_trait]
impl BookStore for InMemoryBookStore {
    async fn list(&self) -> StoreResult<Vec<Book>> {
        Ok(self.books.lock().await.clone())
    }

    async fn create(&self, payload: &BookPayload) -> StoreResult<Book> {
        let book = Book::from_payload(Uuid::new_v4().to_string(), payload.clone());
        self.books.lock().await.push(book.clone());
        debug!(id = %book.id, "Created book in memory");
        Ok(book)
    }

    async fn update(&self, id: &str, payload: &BookPayload) -> StoreResult<Book> {
        let mut books = self.books.lock().await;
        let slot = books
            .iter_mut()
            .find(|b| b.id == id)
            .ok_or_else(|| StoreError::NotFound { id: id.to_string() })?;
        *slot = Book::from_payload(id, payload.clone());
        Ok(slot.clone())
    }

    async fn delete(&self, id: &str) -> StoreResult<()> {
        let mut books = self.books.lock().await;
        let index = books
            .iter()
            .position(|b| b.id == id)
            .ok_or_else(|| StoreError::NotFound { id: id.to_string() })?;
        books.remove(index);
        Ok(())
    }

    fn describe(&self) -> String {
        "in-memory".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::BookStatus;

    fn payload(title: &str) -> BookPayload {
        BookPayload {
            title: title.to_string(),
            author: "Author".to_string(),
            genre: "Fiction".to_string(),
            published_year: 2001,
            status: BookStatus::Available,
            isbn: None,
            description: None,
        }
    }

    #[test]
    fn test_builtin_snapshot_parses() {
        let store = InMemoryBookStore::builtin().unwrap();
        let books = store.books.try_lock().unwrap();
        assert!(books.len() > 9, "sample catalog should span more than one page");
        let mut ids: Vec<&str> = books.iter().map(|b| b.id.as_str()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), books.len());
    }

    #[test]
    fn test_invalid_snapshot() {
        let result = InMemoryBookStore::from_snapshot_json("{\"not\": \"an array\"}");
        assert!(matches!(result, Err(StoreError::Configuration { .. })));
    }

    #[tokio::test]
    async fn test_create_assigns_unique_ids() {
        let store = InMemoryBookStore::new();
        let a = store.create(&payload("A")).await.unwrap();
        let b = store.create(&payload("B")).await.unwrap();
        assert_ne!(a.id, b.id);
        assert_eq!(store.list().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_update_replaces_in_place() {
        let store = InMemoryBookStore::new();
        let first = store.create(&payload("First")).await.unwrap();
        store.create(&payload("Second")).await.unwrap();

        let updated = store.update(&first.id, &payload("Renamed")).await.unwrap();
        assert_eq!(updated.id, first.id);

        let books = store.list().await.unwrap();
        assert_eq!(books[0].title, "Renamed");
        assert_eq!(books[1].title, "Second");
    }

    #[tokio::test]
    async fn test_missing_ids_are_not_found() {
        let store = InMemoryBookStore::new();
        assert_eq!(
            store.update("nope", &payload("X")).await,
            Err(StoreError::NotFound { id: "nope".to_string() })
        );
        assert_eq!(
            store.delete("nope").await,
            Err(StoreError::NotFound { id: "nope".to_string() })
        );
    }

    #[tokio::test]
    async fn test_delete_removes_record() {
        let store = InMemoryBookStore::new();
        let book = store.create(&payload("Gone")).await.unwrap();
        store.delete(&book.id).await.unwrap();
        assert!(store.snapshot().await.is_empty());
    }
}
