//! Message handling for the App.

use tracing::{debug, info, warn};

use super::{App, AppMessage, Mode, Toast};
use crate::error::StoreError;
use crate::models::Book;

impl App {
    /// Handle an incoming store result.
    ///
    /// Successful mutations always patch the record set, since the store has
    /// already changed, even if the modal that issued them was cancelled.
    /// Failures never touch the record set.
    pub fn handle_message(&mut self, msg: AppMessage) {
        // All messages result in state changes that require a redraw
        self.mark_dirty();
        match msg {
            AppMessage::BooksLoaded { op_id, books } => {
                if self.latest_load_op != Some(op_id) {
                    debug!(op_id, "Ignoring superseded load");
                    return;
                }
                info!(count = books.len(), "Books loaded");
                self.books = books;
                self.loading = false;
                self.has_loaded = true;
                self.load_error = None;
                self.clamp_view();
            }
            AppMessage::BooksLoadFailed { op_id, error } => {
                if self.latest_load_op != Some(op_id) {
                    return;
                }
                warn!(
                    code = error.error_code(),
                    category = %error.category(),
                    retryable = error.is_retryable(),
                    error = %error,
                    "Loading books failed"
                );
                self.loading = false;
                self.load_error = Some(error.user_message());
                self.toasts.push(failure_toast("Failed to load books", &error));
            }
            AppMessage::BookSaved {
                op_id,
                book,
                created,
            } => {
                info!(op_id, id = %book.id, created, "Book saved");
                if created {
                    self.insert_book(book);
                    self.toasts.push(Toast::success("Book added successfully!"));
                } else {
                    self.replace_book(book);
                    self.toasts.push(Toast::success("Book updated successfully!"));
                }
                self.close_modal_for(op_id);
                self.clamp_view();
                self.after_mutation();
            }
            AppMessage::SaveFailed { op_id, error } => {
                self.report_failure(op_id, "Failed to save book", &error);
            }
            AppMessage::BookDeleted { op_id, id } => {
                info!(op_id, id = %id, "Book deleted");
                self.books.retain(|b| b.id != id);
                self.toasts.push(Toast::success("Book deleted!"));
                self.close_modal_for(op_id);
                self.clamp_view();
                self.after_mutation();
            }
            AppMessage::DeleteFailed { op_id, error } => {
                self.report_failure(op_id, "Failed to delete book", &error);
            }
        }
    }

    /// Append a created record, unless a reload already brought it in.
    fn insert_book(&mut self, book: Book) {
        if let Some(existing) = self.books.iter_mut().find(|b| b.id == book.id) {
            *existing = book;
        } else {
            self.books.push(book);
        }
    }

    /// Replace the record with the same id in place.
    fn replace_book(&mut self, book: Book) {
        match self.books.iter_mut().find(|b| b.id == book.id) {
            Some(existing) => *existing = book,
            None => debug!(id = %book.id, "Updated book no longer in the list"),
        }
    }

    fn close_modal_for(&mut self, op_id: u64) {
        if self.mode.owns_op(op_id) {
            self.mode = Mode::Idle;
        }
    }

    fn after_mutation(&mut self) {
        // A list call issued before the mutation would overwrite it.
        if self.refresh_after_mutation || self.loading {
            self.load_books();
        }
    }

    /// Notify and re-enable the modal that issued `op_id`, if still open.
    fn report_failure(&mut self, op_id: u64, headline: &str, error: &StoreError) {
        warn!(
            op_id,
            code = error.error_code(),
            category = %error.category(),
            retryable = error.is_retryable(),
            error = %error,
            "{}",
            headline
        );
        self.toasts.push(failure_toast(headline, error));
        if self.mode.owns_op(op_id) {
            match &mut self.mode {
                Mode::Editing(form) => form.pending_op = None,
                Mode::ConfirmingDelete(target) => target.pending_op = None,
                Mode::Idle => {}
            }
        }
    }
}

/// Error toast carrying the store's message and a next step for its category.
fn failure_toast(headline: &str, error: &StoreError) -> Toast {
    Toast::error(headline)
        .with_detail(error.user_message())
        .with_hint(error.category().recovery_hint())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{DeleteTarget, ToastKind};
    use crate::models::{BookForm, BookStatus, PAGE_SIZE};
    use crate::store::InMemoryBookStore;
    use std::sync::Arc;

    fn book(id: usize) -> Book {
        Book {
            id: id.to_string(),
            title: format!("Book {}", id),
            author: "Author".to_string(),
            genre: "Fiction".to_string(),
            published_year: 2000,
            status: BookStatus::Available,
            isbn: None,
            description: None,
        }
    }

    fn app_with(count: usize) -> App {
        let mut app = App::new(Arc::new(InMemoryBookStore::new()));
        app.books = (1..=count).map(book).collect();
        app
    }

    #[test]
    fn test_stale_load_is_ignored() {
        let mut app = app_with(2);
        app.latest_load_op = Some(5);
        app.loading = true;

        app.handle_message(AppMessage::BooksLoaded {
            op_id: 4,
            books: Vec::new(),
        });
        assert_eq!(app.books.len(), 2);
        assert!(app.loading);

        app.handle_message(AppMessage::BooksLoaded {
            op_id: 5,
            books: vec![book(9)],
        });
        assert_eq!(app.books.len(), 1);
        assert!(!app.loading);
        assert!(app.has_loaded);
    }

    #[test]
    fn test_load_failure_keeps_books() {
        let mut app = app_with(2);
        app.latest_load_op = Some(1);
        app.loading = true;

        app.handle_message(AppMessage::BooksLoadFailed {
            op_id: 1,
            error: StoreError::Network {
                message: "refused".to_string(),
            },
        });
        assert_eq!(app.books.len(), 2);
        assert!(!app.loading);
        assert!(app.load_error.is_some());
        assert_eq!(app.toasts.latest().unwrap().message, "Failed to load books");
    }

    #[test]
    fn test_created_book_is_appended_once() {
        let mut app = app_with(1);
        let mut form = BookForm::create();
        form.pending_op = Some(3);
        app.mode = Mode::Editing(form);

        app.handle_message(AppMessage::BookSaved {
            op_id: 3,
            book: book(2),
            created: true,
        });
        app.handle_message(AppMessage::BookSaved {
            op_id: 4,
            book: book(2),
            created: true,
        });

        assert_eq!(app.books.len(), 2);
        assert!(app.mode.is_idle());
        assert_eq!(app.toasts.latest().unwrap().message, "Book added successfully!");
    }

    #[test]
    fn test_update_replaces_in_place() {
        let mut app = app_with(3);
        let mut updated = book(2);
        updated.title = "Renamed".to_string();

        app.handle_message(AppMessage::BookSaved {
            op_id: 1,
            book: updated,
            created: false,
        });

        assert_eq!(app.books[1].title, "Renamed");
        assert_eq!(app.books.len(), 3);
        assert_eq!(app.toasts.latest().unwrap().message, "Book updated successfully!");
    }

    #[test]
    fn test_late_result_does_not_close_other_modal() {
        let mut app = app_with(3);
        let mut form = BookForm::create();
        form.pending_op = Some(8);
        app.mode = Mode::Editing(form);

        app.handle_message(AppMessage::BookDeleted {
            op_id: 2,
            id: "1".to_string(),
        });

        assert_eq!(app.books.len(), 2);
        assert!(app.mode.form().is_some());
    }

    #[test]
    fn test_delete_last_record_on_last_page_moves_back() {
        let mut app = app_with(PAGE_SIZE + 1);
        app.page = 2;
        app.mode = Mode::ConfirmingDelete(DeleteTarget {
            id: (PAGE_SIZE + 1).to_string(),
            title: "last".to_string(),
            pending_op: Some(1),
        });

        app.handle_message(AppMessage::BookDeleted {
            op_id: 1,
            id: (PAGE_SIZE + 1).to_string(),
        });

        assert_eq!(app.page, 1);
        assert!(app.mode.is_idle());
        assert_eq!(app.toasts.latest().unwrap().message, "Book deleted!");
    }

    #[test]
    fn test_failure_reenables_modal() {
        let mut app = app_with(1);
        app.mode = Mode::ConfirmingDelete(DeleteTarget {
            id: "1".to_string(),
            title: "Book 1".to_string(),
            pending_op: Some(6),
        });

        app.handle_message(AppMessage::DeleteFailed {
            op_id: 6,
            error: StoreError::Server {
                status: 500,
                message: String::new(),
            },
        });

        assert_eq!(app.books.len(), 1);
        let target = app.mode.delete_target().unwrap();
        assert!(!target.is_pending());
        let toast = app.toasts.latest().unwrap();
        assert_eq!(toast.kind, ToastKind::Error);
        assert_eq!(toast.message, "Failed to delete book");
    }

    #[test]
    fn test_save_failure_after_cancel_only_notifies() {
        let mut app = app_with(1);
        app.handle_message(AppMessage::SaveFailed {
            op_id: 2,
            error: StoreError::NotFound { id: "1".to_string() },
        });
        assert!(app.mode.is_idle());
        assert_eq!(app.books.len(), 1);
        assert_eq!(app.toasts.latest().unwrap().message, "Failed to save book");
    }

    #[test]
    fn test_failure_toast_suggests_next_step() {
        let mut app = app_with(1);
        app.handle_message(AppMessage::DeleteFailed {
            op_id: 3,
            error: StoreError::NotFound { id: "1".to_string() },
        });
        let toast = app.toasts.latest().unwrap();
        assert_eq!(toast.detail.as_deref(), Some("That book no longer exists."));
        assert_eq!(
            toast.hint.as_deref(),
            Some("The book was removed elsewhere. Press r to reload.")
        );
    }

    #[test]
    fn test_load_failure_hint_follows_category() {
        let mut app = app_with(0);
        app.latest_load_op = Some(4);
        app.handle_message(AppMessage::BooksLoadFailed {
            op_id: 4,
            error: StoreError::Network {
                message: "connection refused".to_string(),
            },
        });
        let toast = app.toasts.latest().unwrap();
        assert_eq!(toast.message, "Failed to load books");
        assert_eq!(toast.hint.as_deref(), Some("Check your connection and try again."));
    }
}
