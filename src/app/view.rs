//! Derived views of the record set, and view state construction for rendering.

use super::App;
use crate::models::{
    apply_filters, available_genres, clamp_page, page_markers, paginate, total_pages, Book,
    PAGE_SIZE,
};
use crate::view_state::DashboardView;

impl App {
    /// Records matching the current criteria, in store order.
    pub fn filtered_books(&self) -> Vec<&Book> {
        apply_filters(&self.books, &self.criteria)
    }

    pub fn total_pages(&self) -> usize {
        total_pages(self.filtered_books().len(), PAGE_SIZE)
    }

    /// Records on the current page.
    pub fn visible_books(&self) -> Vec<&Book> {
        let filtered = self.filtered_books();
        paginate(&filtered, PAGE_SIZE, self.page).items.to_vec()
    }

    /// Record under the selection cursor.
    pub fn selected_book(&self) -> Option<&Book> {
        self.visible_books().get(self.selected).copied()
    }

    pub fn find_book(&self, id: &str) -> Option<&Book> {
        self.books.iter().find(|b| b.id == id)
    }

    /// Genres offered by the filter bar.
    pub fn genres(&self) -> Vec<String> {
        available_genres(&self.books)
    }

    /// "Showing N of M books ..." line, or `None` while loading or when
    /// nothing matches.
    pub fn summary(&self) -> Option<String> {
        if self.loading {
            return None;
        }
        let filtered = self.filtered_books();
        if filtered.is_empty() {
            return None;
        }
        let shown = paginate(&filtered, PAGE_SIZE, self.page).items.len();
        Some(format!(
            "Showing {} of {} books{}",
            shown,
            filtered.len(),
            self.criteria.describe()
        ))
    }

    /// Pull the page and selection back into range after the record set or
    /// criteria changed.
    pub(crate) fn clamp_view(&mut self) {
        self.page = clamp_page(self.page, self.total_pages());
        let visible = self.visible_books().len();
        self.selected = self.selected.min(visible.saturating_sub(1));
    }

    /// Build everything the UI needs for one frame.
    pub fn view_state(&self) -> DashboardView<'_> {
        let filtered = self.filtered_books();
        let total_pages = total_pages(filtered.len(), PAGE_SIZE);
        let page = paginate(&filtered, PAGE_SIZE, self.page);

        DashboardView {
            books: page.items.to_vec(),
            page: page.page,
            total_pages,
            page_markers: page_markers(page.page, total_pages),
            filtered_count: filtered.len(),
            total_count: self.books.len(),
            selected: self.selected,
            criteria: &self.criteria,
            genres: self.genres(),
            focus: self.focus,
            mode: &self.mode,
            loading: self.loading,
            has_loaded: self.has_loaded,
            load_error: self.load_error.as_deref(),
            summary: self.summary(),
            toasts: &self.toasts,
            store_label: self.store.describe(),
            tick_count: self.tick_count,
        }
    }
}
