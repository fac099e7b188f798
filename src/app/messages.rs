//! AppMessage enum for async communication within the application.

use crate::error::StoreError;
use crate::models::Book;

/// Results of store calls, posted back to the event loop by spawned tasks.
///
/// Every variant carries the operation id the call was issued with, so late
/// completions can be told apart from the current one.
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// `list()` returned the full record set
    BooksLoaded { op_id: u64, books: Vec<Book> },
    /// `list()` failed
    BooksLoadFailed { op_id: u64, error: StoreError },
    /// `create()` or `update()` succeeded with the stored record
    BookSaved { op_id: u64, book: Book, created: bool },
    /// `create()` or `update()` failed
    SaveFailed { op_id: u64, error: StoreError },
    /// `delete()` succeeded
    BookDeleted { op_id: u64, id: String },
    /// `delete()` failed
    DeleteFailed { op_id: u64, error: StoreError },
}

impl AppMessage {
    pub fn op_id(&self) -> u64 {
        match self {
            AppMessage::BooksLoaded { op_id, .. }
            | AppMessage::BooksLoadFailed { op_id, .. }
            | AppMessage::BookSaved { op_id, .. }
            | AppMessage::SaveFailed { op_id, .. }
            | AppMessage::BookDeleted { op_id, .. }
            | AppMessage::DeleteFailed { op_id, .. } => *op_id,
        }
    }
}
