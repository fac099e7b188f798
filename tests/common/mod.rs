//! Common test utilities for integration tests.
//!
//! ```ignore
//! mod common;
//! use common::{book, TestAppBuilder};
//!
//! let app = TestAppBuilder::new().with_books(vec![book("1", "Dune")]).build();
//! ```

#![allow(dead_code)]

use std::sync::Arc;

use bookdeck::app::App;
use bookdeck::models::{Book, BookStatus};
use bookdeck::store::{BookStore, InMemoryBookStore};

/// Year used by the form validator in tests.
pub const TEST_YEAR: i32 = 2026;

pub fn book(id: &str, title: &str) -> Book {
    Book {
        id: id.to_string(),
        title: title.to_string(),
        author: "Test Author".to_string(),
        genre: "Fiction".to_string(),
        published_year: 2000,
        status: BookStatus::Available,
        isbn: None,
        description: None,
    }
}

/// `count` books with ids "1".."count" and titles "Book N".
pub fn numbered_books(count: usize) -> Vec<Book> {
    (1..=count)
        .map(|i| book(&i.to_string(), &format!("Book {}", i)))
        .collect()
}

/// A small catalog spanning genres, statuses and authors.
pub fn sample_catalog() -> Vec<Book> {
    let mut dune = book("1", "Dune");
    dune.author = "Frank Herbert".to_string();
    dune.genre = "Science Fiction".to_string();
    dune.published_year = 1965;

    let mut hobbit = book("2", "The Hobbit");
    hobbit.author = "J.R.R. Tolkien".to_string();
    hobbit.genre = "Fantasy".to_string();
    hobbit.status = BookStatus::Issued;

    let mut emma = book("3", "Emma");
    emma.author = "Jane Austen".to_string();
    emma.genre = "Romance".to_string();

    let mut earthsea = book("4", "A Wizard of Earthsea");
    earthsea.author = "Ursula K. Le Guin".to_string();
    earthsea.genre = "Fantasy".to_string();

    vec![dune, hobbit, emma, earthsea]
}

/// Builder for test `App` instances.
#[derive(Default)]
pub struct TestAppBuilder {
    books: Vec<Book>,
    store: Option<Arc<dyn BookStore>>,
    refresh_after_mutation: bool,
}

impl TestAppBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records both in the store and already loaded into the app.
    pub fn with_books(mut self, books: Vec<Book>) -> Self {
        self.books = books;
        self
    }

    /// Use `store` instead of an in-memory store seeded with the books.
    pub fn with_store(mut self, store: Arc<dyn BookStore>) -> Self {
        self.store = Some(store);
        self
    }

    pub fn with_refresh_after_mutation(mut self, refresh: bool) -> Self {
        self.refresh_after_mutation = refresh;
        self
    }

    pub fn build(self) -> App {
        let store = self
            .store
            .unwrap_or_else(|| Arc::new(InMemoryBookStore::with_books(self.books.clone())));
        let mut app = App::new(store)
            .with_refresh_after_mutation(self.refresh_after_mutation)
            .with_current_year(TEST_YEAR);
        app.books = self.books;
        app.has_loaded = true;
        app
    }
}

/// Type `text` into the open form's focused field.
pub fn type_into_form(app: &mut App, text: &str) {
    let form = app.mode.form_mut().expect("form should be open");
    for c in text.chars() {
        form.insert_char(c);
    }
}

/// Fill every required field of the open form with valid values.
pub fn fill_valid_form(app: &mut App, title: &str) {
    let form = app.mode.form_mut().expect("form should be open");
    form.title = title.to_string();
    form.author = "Octavia E. Butler".to_string();
    form.genre = "Science Fiction".to_string();
    form.published_year = "1993".to_string();
    form.status = Some(BookStatus::Available);
}
