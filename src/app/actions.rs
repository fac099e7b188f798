//! User intents: loading, modals, submit/confirm, filters, paging and selection.
//!
//! Store calls are spawned onto the runtime and answer through
//! [`AppMessage`](super::AppMessage); nothing here mutates the record set.

use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, info};

use super::{App, AppMessage, DeleteTarget, Focus, Mode};
use crate::error::ValidationError;
use crate::models::{cycle_option, BookForm, BookStatus};

impl App {
    // ------------------------------------------------------------------------
    // Loading
    // ------------------------------------------------------------------------

    /// List the store into the record set.
    ///
    /// Supersedes any list call still in flight.
    pub fn load_books(&mut self) {
        let op_id = self.allocate_op_id();
        self.latest_load_op = Some(op_id);
        self.loading = true;
        self.mark_dirty();

        let store = Arc::clone(&self.store);
        let tx = self.message_tx.clone();
        debug!(op_id, "Loading books");
        tokio::spawn(async move {
            let msg = match store.list().await {
                Ok(books) => AppMessage::BooksLoaded { op_id, books },
                Err(error) => AppMessage::BooksLoadFailed { op_id, error },
            };
            let _ = tx.send(msg);
        });
    }

    /// User-requested reload.
    pub fn reload(&mut self) {
        info!("Reload requested");
        self.load_books();
    }

    // ------------------------------------------------------------------------
    // Modals
    // ------------------------------------------------------------------------

    /// Open an empty record form.
    pub fn request_add(&mut self) {
        if !self.mode.is_idle() {
            return;
        }
        self.focus = Focus::List;
        self.mode = Mode::Editing(BookForm::create());
        self.mark_dirty();
    }

    /// Open the record form prefilled from record `id`.
    ///
    /// Ignored when `id` is not in the record set.
    pub fn request_edit(&mut self, id: &str) {
        if !self.mode.is_idle() {
            return;
        }
        let Some(book) = self.find_book(id) else {
            debug!(id, "Edit requested for unknown book");
            return;
        };
        let form = BookForm::edit(book);
        self.focus = Focus::List;
        self.mode = Mode::Editing(form);
        self.mark_dirty();
    }

    pub fn request_edit_selected(&mut self) {
        if let Some(id) = self.selected_book().map(|b| b.id.clone()) {
            self.request_edit(&id);
        }
    }

    /// Ask for confirmation before deleting record `id`.
    ///
    /// Ignored when `id` is not in the record set.
    pub fn request_delete(&mut self, id: &str) {
        if !self.mode.is_idle() {
            return;
        }
        let Some(book) = self.find_book(id) else {
            debug!(id, "Delete requested for unknown book");
            return;
        };
        let target = DeleteTarget::new(book.id.clone(), book.title.clone());
        self.focus = Focus::List;
        self.mode = Mode::ConfirmingDelete(target);
        self.mark_dirty();
    }

    pub fn request_delete_selected(&mut self) {
        if let Some(id) = self.selected_book().map(|b| b.id.clone()) {
            self.request_delete(&id);
        }
    }

    /// Close the open modal.
    ///
    /// Allowed while a call is in flight; its result still reaches the
    /// record set but no longer touches the UI.
    pub fn cancel(&mut self) {
        if self.mode.is_idle() {
            return;
        }
        self.mode = Mode::Idle;
        self.mark_dirty();
    }

    /// Validate the form and, if it passes, send it to the store.
    ///
    /// A submit while one is pending is ignored. On validation failure
    /// nothing is sent and the form keeps its per-field errors.
    pub fn submit_form(&mut self) -> Result<(), ValidationError> {
        let Mode::Editing(form) = &mut self.mode else {
            return Ok(());
        };
        if form.is_pending() {
            debug!("Submit ignored while a save is pending");
            return Ok(());
        }

        let payload = match form.validate(self.current_year) {
            Ok(payload) => payload,
            Err(errors) => {
                self.needs_redraw = true;
                return Err(ValidationError::new(errors));
            }
        };

        self.next_op_id += 1;
        let op_id = self.next_op_id;
        form.pending_op = Some(op_id);
        let target_id = form.target.as_ref().map(|b| b.id.clone());

        let store = Arc::clone(&self.store);
        let tx = self.message_tx.clone();
        match target_id {
            Some(id) => {
                debug!(op_id, id = %id, "Submitting update");
                tokio::spawn(async move {
                    let msg = match store.update(&id, &payload).await {
                        Ok(book) => AppMessage::BookSaved {
                            op_id,
                            book,
                            created: false,
                        },
                        Err(error) => AppMessage::SaveFailed { op_id, error },
                    };
                    let _ = tx.send(msg);
                });
            }
            None => {
                debug!(op_id, title = %payload.title, "Submitting create");
                tokio::spawn(async move {
                    let msg = match store.create(&payload).await {
                        Ok(book) => AppMessage::BookSaved {
                            op_id,
                            book,
                            created: true,
                        },
                        Err(error) => AppMessage::SaveFailed { op_id, error },
                    };
                    let _ = tx.send(msg);
                });
            }
        }

        self.mark_dirty();
        Ok(())
    }

    /// Delete the record named in the confirmation.
    ///
    /// A confirm while the delete is pending is ignored.
    pub fn confirm_delete(&mut self) {
        let Mode::ConfirmingDelete(target) = &mut self.mode else {
            return;
        };
        if target.is_pending() {
            return;
        }

        self.next_op_id += 1;
        let op_id = self.next_op_id;
        target.pending_op = Some(op_id);
        let id = target.id.clone();

        let store = Arc::clone(&self.store);
        let tx = self.message_tx.clone();
        debug!(op_id, id = %id, "Deleting book");
        tokio::spawn(async move {
            let msg = match store.delete(&id).await {
                Ok(()) => AppMessage::BookDeleted { op_id, id },
                Err(error) => AppMessage::DeleteFailed { op_id, error },
            };
            let _ = tx.send(msg);
        });

        self.mark_dirty();
    }

    // ------------------------------------------------------------------------
    // Filters
    // ------------------------------------------------------------------------

    /// Every criterion change lands back on page 1.
    fn criteria_changed(&mut self) {
        self.page = 1;
        self.selected = 0;
        self.mark_dirty();
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.criteria.search = search.into();
        self.criteria_changed();
    }

    pub fn push_search_char(&mut self, c: char) {
        self.criteria.search.push(c);
        self.criteria_changed();
    }

    pub fn pop_search_char(&mut self) {
        self.criteria.search.pop();
        self.criteria_changed();
    }

    pub fn set_genre(&mut self, genre: Option<String>) {
        self.criteria.genre = genre;
        self.criteria_changed();
    }

    /// All genres, then each present genre in turn.
    pub fn cycle_genre(&mut self) {
        let genres = self.genres();
        self.criteria.genre = cycle_option(&self.criteria.genre, &genres);
        self.criteria_changed();
    }

    pub fn set_status(&mut self, status: Option<BookStatus>) {
        self.criteria.status = status;
        self.criteria_changed();
    }

    /// All statuses, Available, Issued.
    pub fn cycle_status(&mut self) {
        self.criteria.status = cycle_option(&self.criteria.status, &BookStatus::ALL);
        self.criteria_changed();
    }

    pub fn clear_filters(&mut self) {
        self.criteria = Default::default();
        self.criteria_changed();
    }

    pub fn focus_search(&mut self) {
        self.focus = Focus::Search;
        self.mark_dirty();
    }

    pub fn blur_search(&mut self) {
        self.focus = Focus::List;
        self.mark_dirty();
    }

    // ------------------------------------------------------------------------
    // Paging and selection
    // ------------------------------------------------------------------------

    /// Jump to `page`, clamped into the existing pages.
    pub fn go_to_page(&mut self, page: usize) {
        let page = crate::models::clamp_page(page, self.total_pages());
        if page != self.page {
            self.page = page;
            self.selected = 0;
            self.mark_dirty();
        }
    }

    pub fn next_page(&mut self) {
        self.go_to_page(self.page + 1);
    }

    pub fn prev_page(&mut self) {
        self.go_to_page(self.page.saturating_sub(1));
    }

    pub fn select_next(&mut self) {
        let visible = self.visible_books().len();
        if self.selected + 1 < visible {
            self.selected += 1;
            self.mark_dirty();
        }
    }

    pub fn select_prev(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
            self.mark_dirty();
        }
    }

    // ------------------------------------------------------------------------
    // Lifecycle
    // ------------------------------------------------------------------------

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Advance the spinner and drop expired toasts.
    pub fn tick(&mut self) {
        self.tick_count = self.tick_count.wrapping_add(1);
        if self.toasts.expire(Instant::now()) {
            self.mark_dirty();
        }
        if self.loading {
            self.mark_dirty();
        }
    }
}
