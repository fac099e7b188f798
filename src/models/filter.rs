//! Filter engine for the book list.
//!
//! Filtering is a pure function of the record set and the active criteria and
//! is recomputed on every render.

use super::book::{Book, BookStatus};

/// Active search/genre/status filter tuple.
///
/// All criteria apply together; an unset criterion matches every record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    /// Case-insensitive substring matched against title and author
    pub search: String,
    /// Exact genre, or `None` for any
    pub genre: Option<String>,
    /// Exact status, or `None` for any
    pub status: Option<BookStatus>,
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    pub fn with_genre(mut self, genre: impl Into<String>) -> Self {
        self.genre = Some(genre.into());
        self
    }

    pub fn with_status(mut self, status: BookStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// True when no criterion is set.
    pub fn is_empty(&self) -> bool {
        self.search.is_empty() && self.genre.is_none() && self.status.is_none()
    }

    /// Whether a single record satisfies all criteria.
    pub fn matches(&self, book: &Book) -> bool {
        self.matches_search(book) && self.matches_genre(book) && self.matches_status(book)
    }

    fn matches_search(&self, book: &Book) -> bool {
        if self.search.is_empty() {
            return true;
        }
        let needle = self.search.to_lowercase();
        book.title.to_lowercase().contains(&needle) || book.author.to_lowercase().contains(&needle)
    }

    fn matches_genre(&self, book: &Book) -> bool {
        self.genre.as_deref().map_or(true, |genre| book.genre == genre)
    }

    fn matches_status(&self, book: &Book) -> bool {
        self.status.map_or(true, |status| book.status == status)
    }

    /// Summary suffix for the "Showing N of M books" line.
    ///
    /// Returns an empty string when no criterion is set.
    pub fn describe(&self) -> String {
        let mut out = String::new();
        if !self.search.is_empty() {
            out.push_str(&format!(" matching \"{}\"", self.search));
        }
        if let Some(genre) = &self.genre {
            out.push_str(&format!(" in {}", genre));
        }
        if let Some(status) = self.status {
            out.push_str(&format!(" with status \"{}\"", status));
        }
        out
    }
}

/// Return the records matching `criteria`, preserving their relative order.
pub fn apply_filters<'a>(books: &'a [Book], criteria: &FilterCriteria) -> Vec<&'a Book> {
    books.iter().filter(|book| criteria.matches(book)).collect()
}

/// Distinct genres present in the record set, in first-seen order.
pub fn available_genres(books: &[Book]) -> Vec<String> {
    let mut genres: Vec<String> = Vec::new();
    for book in books {
        if !genres.iter().any(|g| g == &book.genre) {
            genres.push(book.genre.clone());
        }
    }
    genres
}

/// Step through `options` starting from `current`, with `None` ("any") before the first.
///
/// Used by the filter bar to cycle the genre and status selectors.
pub fn cycle_option<T: Clone + PartialEq>(current: &Option<T>, options: &[T]) -> Option<T> {
    match current {
        None => options.first().cloned(),
        Some(value) => match options.iter().position(|o| o == value) {
            Some(idx) if idx + 1 < options.len() => Some(options[idx + 1].clone()),
            Some(_) => None,
            // The selected value vanished from the options; start over.
            None => options.first().cloned(),
        },
    }
}
