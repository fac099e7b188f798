//! View state for decoupling UI rendering from application state.
//!
//! UI rendering is a pure function of [`DashboardView`]: the UI never imports
//! [`App`](crate::app::App), and tests can build a view by hand.
//!
//! ```text
//! App --view_state()--> DashboardView (borrows) --> ui::render
//! ```

use crate::app::{Focus, Mode, Toasts};
use crate::models::{Book, FilterCriteria, PageMarker};

/// Everything drawn in one frame.
#[derive(Debug, Clone)]
pub struct DashboardView<'a> {
    /// Records on the current page
    pub books: Vec<&'a Book>,
    pub page: usize,
    pub total_pages: usize,
    /// Pagination control entries; empty when there is at most one page
    pub page_markers: Vec<PageMarker>,
    pub filtered_count: usize,
    pub total_count: usize,
    /// Selection cursor within `books`
    pub selected: usize,
    pub criteria: &'a FilterCriteria,
    pub genres: Vec<String>,
    pub focus: Focus,
    pub mode: &'a Mode,
    pub loading: bool,
    pub has_loaded: bool,
    pub load_error: Option<&'a str>,
    /// "Showing N of M books ..." line
    pub summary: Option<String>,
    pub toasts: &'a Toasts,
    /// Store description for the header
    pub store_label: String,
    pub tick_count: u64,
}

impl<'a> DashboardView<'a> {
    /// Whether the list area should show the empty-state message.
    pub fn is_empty(&self) -> bool {
        !self.loading && self.books.is_empty()
    }

    /// Whether any filter is narrowing the list.
    pub fn is_filtered(&self) -> bool {
        !self.criteria.is_empty()
    }

    pub fn selected_book(&self) -> Option<&'a Book> {
        self.books.get(self.selected).copied()
    }
}
