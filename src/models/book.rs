//! Book record types shared by the store, the controller and the UI.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Genres offered by the record form, in display order.
pub const GENRES: [&str; 10] = [
    "Fiction",
    "Non-Fiction",
    "Science Fiction",
    "Fantasy",
    "Romance",
    "Mystery",
    "Thriller",
    "Biography",
    "History",
    "Self-Help",
];

/// Earliest publication year accepted by the form.
pub const MIN_PUBLISHED_YEAR: i32 = 1000;

/// Circulation status of a book.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum BookStatus {
    #[default]
    Available,
    Issued,
}

impl BookStatus {
    /// All statuses, in the order the UI cycles through them.
    pub const ALL: [BookStatus; 2] = [BookStatus::Available, BookStatus::Issued];

    pub fn as_str(&self) -> &'static str {
        match self {
            BookStatus::Available => "Available",
            BookStatus::Issued => "Issued",
        }
    }

    /// The other status.
    pub fn toggled(self) -> Self {
        match self {
            BookStatus::Available => BookStatus::Issued,
            BookStatus::Issued => BookStatus::Available,
        }
    }
}

impl fmt::Display for BookStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A book as held by the store.
///
/// `id` is assigned by the store on creation and never changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub id: String,
    pub title: String,
    pub author: String,
    pub genre: String,
    pub published_year: i32,
    pub status: BookStatus,
    #[serde(default, deserialize_with = "empty_as_none", skip_serializing_if = "Option::is_none")]
    pub isbn: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Book {
    /// Build a record from a payload and a store-assigned id.
    pub fn from_payload(id: impl Into<String>, payload: BookPayload) -> Self {
        Self {
            id: id.into(),
            title: payload.title,
            author: payload.author,
            genre: payload.genre,
            published_year: payload.published_year,
            status: payload.status,
            isbn: payload.isbn,
            description: payload.description,
        }
    }

    /// The record's fields without its id.
    pub fn to_payload(&self) -> BookPayload {
        BookPayload {
            title: self.title.clone(),
            author: self.author.clone(),
            genre: self.genre.clone(),
            published_year: self.published_year,
            status: self.status,
            isbn: self.isbn.clone(),
            description: self.description.clone(),
        }
    }
}

/// Body of create and update calls: every field except the id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookPayload {
    pub title: String,
    pub author: String,
    pub genre: String,
    pub published_year: i32,
    pub status: BookStatus,
    #[serde(default, deserialize_with = "empty_as_none", skip_serializing_if = "Option::is_none")]
    pub isbn: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Optional text fields arrive as missing, `null` or `""` depending on who wrote them.
fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.trim().is_empty()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_book_decodes_camel_case() {
        let json = r#"{
            "id": "7",
            "title": "Dune",
            "author": "Frank Herbert",
            "genre": "Science Fiction",
            "publishedYear": 1965,
            "status": "Available",
            "isbn": "978-0441013593"
        }"#;
        let book: Book = serde_json::from_str(json).unwrap();
        assert_eq!(book.id, "7");
        assert_eq!(book.published_year, 1965);
        assert_eq!(book.status, BookStatus::Available);
        assert_eq!(book.isbn.as_deref(), Some("978-0441013593"));
        assert!(book.description.is_none());
    }

    #[test]
    fn test_empty_optional_fields_decode_as_none() {
        let json = r#"{
            "id": "1", "title": "T", "author": "A", "genre": "Fiction",
            "publishedYear": 2000, "status": "Issued", "isbn": "", "description": null
        }"#;
        let book: Book = serde_json::from_str(json).unwrap();
        assert!(book.isbn.is_none());
        assert!(book.description.is_none());
        assert_eq!(book.status, BookStatus::Issued);
    }

    #[test]
    fn test_payload_omits_absent_optionals() {
        let payload = BookPayload {
            title: "Emma".to_string(),
            author: "Jane Austen".to_string(),
            genre: "Romance".to_string(),
            published_year: 1815,
            status: BookStatus::Issued,
            isbn: None,
            description: None,
        };
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value["publishedYear"], 1815);
        assert_eq!(value["status"], "Issued");
        assert!(value.get("isbn").is_none());
        assert!(value.get("id").is_none());
    }

    #[test]
    fn test_payload_conversion_keeps_fields() {
        let book = Book {
            id: "42".to_string(),
            title: "Hobbit".to_string(),
            author: "Tolkien".to_string(),
            genre: "Fantasy".to_string(),
            published_year: 1937,
            status: BookStatus::Issued,
            isbn: None,
            description: Some("There and back again".to_string()),
        };
        let rebuilt = Book::from_payload("42", book.to_payload());
        assert_eq!(rebuilt, book);
    }

    #[test]
    fn test_status_toggle_and_display() {
        assert_eq!(BookStatus::Available.toggled(), BookStatus::Issued);
        assert_eq!(BookStatus::Issued.toggled(), BookStatus::Available);
        assert_eq!(BookStatus::Issued.to_string(), "Issued");
    }
}
