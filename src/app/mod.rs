//! Application state and logic for the dashboard.
//!
//! This module contains the core [`App`] struct and related types:
//! - [`Mode`] - Which modal is open
//! - [`Focus`] - Which UI component has focus
//! - [`AppMessage`] - Store results posted back from spawned tasks
//! - [`Toast`] - Transient notifications
//!
//! `App` is the single writer of dashboard state. Store calls run in spawned
//! tasks and report through `message_tx`; the event loop feeds the results to
//! [`App::handle_message`].

mod actions;
mod handlers;
mod messages;
mod toast;
mod types;
mod view;

pub use messages::AppMessage;
pub use toast::{Toast, ToastKind, Toasts, TOAST_DURATION};
pub use types::{DeleteTarget, Focus, Mode};

use std::sync::Arc;

use chrono::Datelike;
use tokio::sync::mpsc;

use crate::config::DashboardConfig;
use crate::models::{Book, FilterCriteria};
use crate::store::BookStore;

/// Main application state
pub struct App {
    /// Last record set received from the store, in store order
    pub books: Vec<Book>,
    pub criteria: FilterCriteria,
    /// Current page, 1-based
    pub page: usize,
    /// Selection cursor within the visible page
    pub selected: usize,
    pub focus: Focus,
    pub mode: Mode,
    /// A list call is in flight
    pub loading: bool,
    /// At least one list call has succeeded
    pub has_loaded: bool,
    /// Message of the last failed load, cleared by a successful one
    pub load_error: Option<String>,
    pub toasts: Toasts,
    /// Flag to track if the app should quit
    pub should_quit: bool,
    /// Set by every state change; the event loop redraws and clears it
    pub needs_redraw: bool,
    /// Tick counter for the loading spinner
    pub tick_count: u64,
    /// Upper bound of the published year field
    pub current_year: i32,
    /// Reload the list after each successful mutation
    pub refresh_after_mutation: bool,
    /// Receiver taken by the event loop
    pub message_rx: Option<mpsc::UnboundedReceiver<AppMessage>>,
    pub message_tx: mpsc::UnboundedSender<AppMessage>,
    store: Arc<dyn BookStore>,
    next_op_id: u64,
    /// Only the most recent list call may replace the record set
    latest_load_op: Option<u64>,
}

impl App {
    /// Create an app over `store`. Nothing is fetched until [`App::load_books`].
    pub fn new(store: Arc<dyn BookStore>) -> Self {
        let (message_tx, message_rx) = mpsc::unbounded_channel();

        Self {
            books: Vec::new(),
            criteria: FilterCriteria::default(),
            page: 1,
            selected: 0,
            focus: Focus::default(),
            mode: Mode::default(),
            loading: false,
            has_loaded: false,
            load_error: None,
            toasts: Toasts::new(),
            should_quit: false,
            needs_redraw: true, // Start with redraw needed
            tick_count: 0,
            current_year: chrono::Local::now().year(),
            refresh_after_mutation: false,
            message_rx: Some(message_rx),
            message_tx,
            store,
            next_op_id: 0,
            latest_load_op: None,
        }
    }

    /// Create an app configured from `config`.
    pub fn from_config(store: Arc<dyn BookStore>, config: &DashboardConfig) -> Self {
        Self::new(store).with_refresh_after_mutation(config.refresh_after_mutation())
    }

    pub fn with_refresh_after_mutation(mut self, refresh: bool) -> Self {
        self.refresh_after_mutation = refresh;
        self
    }

    /// Override the year used to validate the published year field.
    pub fn with_current_year(mut self, year: i32) -> Self {
        self.current_year = year;
        self
    }

    pub fn store(&self) -> &Arc<dyn BookStore> {
        &self.store
    }

    /// Get a clone of the message sender for passing to async tasks
    pub fn message_sender(&self) -> mpsc::UnboundedSender<AppMessage> {
        self.message_tx.clone()
    }

    /// Mark the UI as needing a redraw.
    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    /// Reset the redraw flag after drawing.
    pub fn clear_dirty(&mut self) {
        self.needs_redraw = false;
    }

    fn allocate_op_id(&mut self) -> u64 {
        self.next_op_id += 1;
        self.next_op_id
    }

    /// Wait for the next store result and apply it.
    ///
    /// Returns false when the receiver was taken or every sender is gone.
    pub async fn process_next_message(&mut self) -> bool {
        let Some(rx) = self.message_rx.as_mut() else {
            return false;
        };
        match rx.recv().await {
            Some(msg) => {
                self.handle_message(msg);
                true
            }
            None => false,
        }
    }

    /// Apply every store result already queued, without waiting.
    pub fn drain_messages(&mut self) -> usize {
        let mut handled = 0;
        while let Some(msg) = self.message_rx.as_mut().and_then(|rx| rx.try_recv().ok()) {
            self.handle_message(msg);
            handled += 1;
        }
        handled
    }
}
