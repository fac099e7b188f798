//! Record form state and client-side validation.
//!
//! The form holds raw text as typed. It is only converted into a
//! [`BookPayload`] by [`BookForm::validate`], which is the gate in front of
//! every create/update call.

use super::book::{Book, BookPayload, BookStatus, GENRES, MIN_PUBLISHED_YEAR};
use std::fmt;

/// Fields of the record form, in focus order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    Title,
    Author,
    Genre,
    PublishedYear,
    Status,
    Isbn,
    Description,
}

impl FormField {
    pub const ALL: [FormField; 7] = [
        FormField::Title,
        FormField::Author,
        FormField::Genre,
        FormField::PublishedYear,
        FormField::Status,
        FormField::Isbn,
        FormField::Description,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            FormField::Title => "Title",
            FormField::Author => "Author",
            FormField::Genre => "Genre",
            FormField::PublishedYear => "Published Year",
            FormField::Status => "Status",
            FormField::Isbn => "ISBN",
            FormField::Description => "Description",
        }
    }

    pub fn is_required(&self) -> bool {
        !matches!(self, FormField::Isbn | FormField::Description)
    }

    /// Select fields cycle through fixed options instead of accepting text.
    pub fn is_select(&self) -> bool {
        matches!(self, FormField::Genre | FormField::Status)
    }

    fn index(&self) -> usize {
        Self::ALL.iter().position(|f| f == self).unwrap_or(0)
    }

    pub fn next(&self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(&self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A validation failure attached to one form field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: FormField,
    pub message: String,
}

impl FieldError {
    pub fn new(field: FormField, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// State of the create/edit modal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookForm {
    /// Record being edited; `None` in create mode
    pub target: Option<Book>,
    pub title: String,
    pub author: String,
    /// Empty until a genre is selected
    pub genre: String,
    pub published_year: String,
    pub status: Option<BookStatus>,
    pub isbn: String,
    pub description: String,
    /// Field receiving keyboard input
    pub focus: FormField,
    /// Errors from the last validation attempt
    pub errors: Vec<FieldError>,
    /// Operation id of an in-flight submit, if any
    pub pending_op: Option<u64>,
}

impl BookForm {
    /// Empty form for creating a record.
    pub fn create() -> Self {
        Self {
            target: None,
            title: String::new(),
            author: String::new(),
            genre: String::new(),
            published_year: String::new(),
            status: None,
            isbn: String::new(),
            description: String::new(),
            focus: FormField::Title,
            errors: Vec::new(),
            pending_op: None,
        }
    }

    /// Form prefilled from an existing record.
    pub fn edit(book: &Book) -> Self {
        Self {
            target: Some(book.clone()),
            title: book.title.clone(),
            author: book.author.clone(),
            genre: book.genre.clone(),
            published_year: book.published_year.to_string(),
            status: Some(book.status),
            isbn: book.isbn.clone().unwrap_or_default(),
            description: book.description.clone().unwrap_or_default(),
            focus: FormField::Title,
            errors: Vec::new(),
            pending_op: None,
        }
    }

    pub fn is_edit(&self) -> bool {
        self.target.is_some()
    }

    pub fn is_pending(&self) -> bool {
        self.pending_op.is_some()
    }

    pub fn heading(&self) -> &'static str {
        if self.is_edit() {
            "Edit Book"
        } else {
            "Add New Book"
        }
    }

    pub fn submit_label(&self) -> &'static str {
        match (self.is_pending(), self.is_edit()) {
            (true, _) => "Saving...",
            (false, true) => "Update Book",
            (false, false) => "Add Book",
        }
    }

    /// Display value of a field.
    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::Title => &self.title,
            FormField::Author => &self.author,
            FormField::Genre => &self.genre,
            FormField::PublishedYear => &self.published_year,
            FormField::Status => self.status.map(|s| s.as_str()).unwrap_or(""),
            FormField::Isbn => &self.isbn,
            FormField::Description => &self.description,
        }
    }

    fn text_mut(&mut self, field: FormField) -> Option<&mut String> {
        match field {
            FormField::Title => Some(&mut self.title),
            FormField::Author => Some(&mut self.author),
            FormField::PublishedYear => Some(&mut self.published_year),
            FormField::Isbn => Some(&mut self.isbn),
            FormField::Description => Some(&mut self.description),
            FormField::Genre | FormField::Status => None,
        }
    }

    /// First error recorded for `field`.
    pub fn error_for(&self, field: FormField) -> Option<&str> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    /// Type a character into the focused text field. Ignored on select fields.
    pub fn insert_char(&mut self, c: char) {
        let focus = self.focus;
        if focus == FormField::PublishedYear && !(c.is_ascii_digit() || c == '-') {
            return;
        }
        if let Some(text) = self.text_mut(focus) {
            text.push(c);
            self.clear_error(focus);
        }
    }

    pub fn backspace(&mut self) {
        let focus = self.focus;
        if let Some(text) = self.text_mut(focus) {
            text.pop();
            self.clear_error(focus);
        }
    }

    /// Advance the focused select field to its next option.
    pub fn select_next(&mut self) {
        match self.focus {
            FormField::Genre => {
                self.genre = match GENRES.iter().position(|g| *g == self.genre) {
                    Some(idx) => GENRES[(idx + 1) % GENRES.len()].to_string(),
                    None => GENRES[0].to_string(),
                };
                self.clear_error(FormField::Genre);
            }
            FormField::Status => {
                self.status = Some(self.status.map_or(BookStatus::Available, |s| s.toggled()));
                self.clear_error(FormField::Status);
            }
            _ => {}
        }
    }

    /// Step the focused select field back to its previous option.
    pub fn select_prev(&mut self) {
        match self.focus {
            FormField::Genre => {
                self.genre = match GENRES.iter().position(|g| *g == self.genre) {
                    Some(idx) => GENRES[(idx + GENRES.len() - 1) % GENRES.len()].to_string(),
                    None => GENRES[GENRES.len() - 1].to_string(),
                };
                self.clear_error(FormField::Genre);
            }
            FormField::Status => self.select_next(),
            _ => {}
        }
    }

    fn clear_error(&mut self, field: FormField) {
        self.errors.retain(|e| e.field != field);
    }

    /// Check required fields and the year range, producing the payload to send.
    ///
    /// On failure every offending field gets an error and focus moves to the
    /// first of them.
    pub fn validate(&mut self, current_year: i32) -> Result<BookPayload, Vec<FieldError>> {
        let mut errors = Vec::new();

        let title = self.title.trim();
        if title.is_empty() {
            errors.push(required(FormField::Title));
        }
        let author = self.author.trim();
        if author.is_empty() {
            errors.push(required(FormField::Author));
        }

        let genre = self.genre.trim();
        if genre.is_empty() {
            errors.push(required(FormField::Genre));
        } else if !GENRES.contains(&genre) {
            errors.push(FieldError::new(
                FormField::Genre,
                "Genre must be one of the listed genres",
            ));
        }

        let year = match parse_year(&self.published_year, current_year) {
            Ok(year) => Some(year),
            Err(err) => {
                errors.push(err);
                None
            }
        };

        if self.status.is_none() {
            errors.push(required(FormField::Status));
        }

        if let Some(first) = errors.first() {
            self.focus = first.field;
            self.errors = errors.clone();
            return Err(errors);
        }
        self.errors.clear();

        Ok(BookPayload {
            title: title.to_string(),
            author: author.to_string(),
            genre: genre.to_string(),
            published_year: year.unwrap_or(current_year),
            status: self.status.unwrap_or_default(),
            isbn: non_empty(&self.isbn),
            description: non_empty(&self.description),
        })
    }
}

fn required(field: FormField) -> FieldError {
    FieldError::new(field, format!("{} is required", field.label()))
}

fn parse_year(raw: &str, current_year: i32) -> Result<i32, FieldError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(required(FormField::PublishedYear));
    }
    let year: i32 = raw.parse().map_err(|_| {
        FieldError::new(FormField::PublishedYear, "Published Year must be a number")
    })?;
    if year < MIN_PUBLISHED_YEAR {
        return Err(FieldError::new(
            FormField::PublishedYear,
            format!("Year must be after {}", MIN_PUBLISHED_YEAR),
        ));
    }
    if year > current_year {
        return Err(FieldError::new(
            FormField::PublishedYear,
            format!("Year cannot exceed {}", current_year),
        ));
    }
    Ok(year)
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
