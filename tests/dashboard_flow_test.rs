//! End-to-end dashboard flows: user intents through the store and back.

mod common;

use std::sync::Arc;

use bookdeck::adapters::mock::{MockHttpClient, MockResponse};
use bookdeck::app::{Mode, ToastKind};
use bookdeck::models::{BookStatus, FormField, PAGE_SIZE};
use bookdeck::store::{BookStore, InMemoryBookStore, RemoteBookStore};
use bookdeck::traits::Method;

use common::{book, fill_valid_form, numbered_books, sample_catalog, type_into_form, TestAppBuilder};

const BASE: &str = "https://api.test/books";

fn remote_store(client: &MockHttpClient) -> Arc<dyn BookStore> {
    Arc::new(RemoteBookStore::new(client.clone(), BASE).unwrap())
}

#[tokio::test]
async fn test_initial_load_fills_record_set() {
    let store = Arc::new(InMemoryBookStore::with_books(sample_catalog()));
    let mut app = bookdeck::app::App::new(store);
    assert!(!app.has_loaded);

    app.load_books();
    assert!(app.loading);
    assert!(app.summary().is_none());

    assert!(app.process_next_message().await);
    assert!(!app.loading);
    assert!(app.has_loaded);
    assert_eq!(app.books.len(), 4);
    assert_eq!(app.summary().unwrap(), "Showing 4 of 4 books");
}

#[tokio::test]
async fn test_failed_load_shows_error_state() {
    let client = MockHttpClient::new();
    client.set_response(Method::Get, BASE, MockResponse::status(500, "boom"));
    let mut app = TestAppBuilder::new()
        .with_store(remote_store(&client))
        .build();
    app.has_loaded = false;

    app.load_books();
    assert!(app.process_next_message().await);

    assert!(app.books.is_empty());
    assert!(app.load_error.is_some());
    let toast = app.toasts.latest().unwrap();
    assert_eq!(toast.kind, ToastKind::Error);
    assert_eq!(toast.message, "Failed to load books");
}

#[test]
fn test_search_is_case_insensitive_over_title_and_author() {
    let mut app = TestAppBuilder::new().with_books(sample_catalog()).build();

    app.set_search("dun");
    let titles: Vec<_> = app.filtered_books().iter().map(|b| b.title.clone()).collect();
    assert_eq!(titles, vec!["Dune"]);

    app.set_search("TOLKIEN");
    let titles: Vec<_> = app.filtered_books().iter().map(|b| b.title.clone()).collect();
    assert_eq!(titles, vec!["The Hobbit"]);
}

#[test]
fn test_genre_and_status_filters_combine() {
    let mut app = TestAppBuilder::new().with_books(sample_catalog()).build();

    app.set_genre(Some("Fantasy".to_string()));
    assert_eq!(app.filtered_books().len(), 2);

    app.set_status(Some(BookStatus::Available));
    let titles: Vec<_> = app.filtered_books().iter().map(|b| b.title.clone()).collect();
    assert_eq!(titles, vec!["A Wizard of Earthsea"]);
    assert_eq!(
        app.summary().unwrap(),
        "Showing 1 of 1 books in Fantasy with status \"Available\""
    );

    app.clear_filters();
    assert_eq!(app.filtered_books().len(), 4);
}

#[test]
fn test_second_page_holds_the_remainder() {
    let mut app = TestAppBuilder::new()
        .with_books(numbered_books(PAGE_SIZE + 1))
        .build();

    assert_eq!(app.visible_books().len(), PAGE_SIZE);
    app.next_page();
    assert_eq!(app.page, 2);
    let visible = app.visible_books();
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].title, format!("Book {}", PAGE_SIZE + 1));

    // Past the last page stays put
    app.next_page();
    assert_eq!(app.page, 2);
}

#[test]
fn test_filter_change_resets_page() {
    let mut app = TestAppBuilder::new()
        .with_books(numbered_books(PAGE_SIZE * 3))
        .build();
    app.go_to_page(3);
    assert_eq!(app.page, 3);

    app.push_search_char('1');
    assert_eq!(app.page, 1);

    app.go_to_page(2);
    app.cycle_status();
    assert_eq!(app.page, 1);
}

#[tokio::test]
async fn test_create_appends_and_closes_form() {
    let mut app = TestAppBuilder::new().with_books(sample_catalog()).build();

    app.request_add();
    fill_valid_form(&mut app, "Parable of the Talents");
    app.submit_form().unwrap();
    assert!(app.mode.form().unwrap().is_pending());

    assert!(app.process_next_message().await);
    assert!(app.mode.is_idle());
    assert_eq!(app.books.len(), 5);
    let created = app.books.last().unwrap();
    assert_eq!(created.title, "Parable of the Talents");
    assert!(!created.id.is_empty());
    assert_eq!(app.toasts.latest().unwrap().message, "Book added successfully!");
}

#[tokio::test]
async fn test_invalid_create_sends_nothing() {
    let client = MockHttpClient::new();
    let mut app = TestAppBuilder::new()
        .with_books(sample_catalog())
        .with_store(remote_store(&client))
        .build();

    app.request_add();
    fill_valid_form(&mut app, "");
    let err = app.submit_form().unwrap_err();
    assert_eq!(err.errors.len(), 1);

    let form = app.mode.form().unwrap();
    assert_eq!(form.error_for(FormField::Title), Some("Title is required"));
    assert_eq!(form.focus, FormField::Title);
    assert!(!form.is_pending());
    assert_eq!(app.drain_messages(), 0);
    assert!(client.requests_with_method(Method::Post).is_empty());
    assert_eq!(app.books.len(), 4);
}

#[tokio::test]
async fn test_year_in_future_is_rejected() {
    let mut app = TestAppBuilder::new().build();
    app.request_add();
    fill_valid_form(&mut app, "Tomorrow");
    app.mode.form_mut().unwrap().published_year = (common::TEST_YEAR + 1).to_string();

    assert!(app.submit_form().is_err());
    let form = app.mode.form().unwrap();
    assert!(form.error_for(FormField::PublishedYear).is_some());
    assert_eq!(form.focus, FormField::PublishedYear);
}

#[tokio::test]
async fn test_edit_sends_put_and_patches_in_place() {
    let client = MockHttpClient::new();
    let mut updated = sample_catalog()[0].clone();
    updated.title = "Dune Messiah".to_string();
    updated.published_year = 1969;
    client.set_response(
        Method::Put,
        &format!("{}/1", BASE),
        MockResponse::json(200, &updated),
    );
    let mut app = TestAppBuilder::new()
        .with_books(sample_catalog())
        .with_store(remote_store(&client))
        .build();

    app.request_edit("1");
    {
        let form = app.mode.form_mut().unwrap();
        form.title.clear();
        form.published_year = "1969".to_string();
    }
    type_into_form(&mut app, "Dune Messiah");
    app.submit_form().unwrap();
    assert!(app.process_next_message().await);

    let puts = client.requests_with_method(Method::Put);
    assert_eq!(puts.len(), 1);
    let body = puts[0].json_body().unwrap();
    assert_eq!(body["title"], "Dune Messiah");
    assert_eq!(body["publishedYear"], 1969);
    assert!(body.get("id").is_none());

    assert!(app.mode.is_idle());
    assert_eq!(app.books[0].title, "Dune Messiah");
    assert_eq!(app.books.len(), 4);
    assert_eq!(app.toasts.latest().unwrap().message, "Book updated successfully!");
}

#[tokio::test]
async fn test_update_of_vanished_record_keeps_form_open() {
    let client = MockHttpClient::new();
    client.set_response(
        Method::Put,
        &format!("{}/1", BASE),
        MockResponse::status(404, "Not found"),
    );
    let mut app = TestAppBuilder::new()
        .with_books(sample_catalog())
        .with_store(remote_store(&client))
        .build();
    let before = app.books.clone();

    app.request_edit("1");
    app.submit_form().unwrap();
    assert!(app.process_next_message().await);

    assert_eq!(app.books, before);
    let form = app.mode.form().unwrap();
    assert!(!form.is_pending());
    let toast = app.toasts.latest().unwrap();
    assert_eq!(toast.kind, ToastKind::Error);
    assert_eq!(toast.message, "Failed to save book");
}

#[tokio::test]
async fn test_double_submit_sends_once() {
    let client = MockHttpClient::new();
    client.set_response(
        Method::Post,
        BASE,
        MockResponse::json(201, &book("99", "Kindred")),
    );
    let mut app = TestAppBuilder::new()
        .with_books(sample_catalog())
        .with_store(remote_store(&client))
        .build();

    app.request_add();
    fill_valid_form(&mut app, "Kindred");
    app.submit_form().unwrap();
    app.submit_form().unwrap();

    assert!(app.process_next_message().await);
    tokio::task::yield_now().await;
    assert_eq!(app.drain_messages(), 0);
    assert_eq!(client.requests_with_method(Method::Post).len(), 1);
    assert_eq!(app.books.iter().filter(|b| b.id == "99").count(), 1);
}

#[tokio::test]
async fn test_cancel_while_saving_still_applies_result() {
    let mut app = TestAppBuilder::new().with_books(sample_catalog()).build();

    app.request_add();
    fill_valid_form(&mut app, "Kindred");
    app.submit_form().unwrap();
    app.cancel();
    assert!(app.mode.is_idle());

    assert!(app.process_next_message().await);
    assert!(app.mode.is_idle());
    assert!(app.books.iter().any(|b| b.title == "Kindred"));
}

#[tokio::test]
async fn test_delete_last_record_on_page_moves_back() {
    let books = numbered_books(PAGE_SIZE + 1);
    let store = Arc::new(InMemoryBookStore::with_books(books.clone()));
    let mut app = TestAppBuilder::new()
        .with_books(books)
        .with_store(store.clone())
        .build();

    app.go_to_page(2);
    app.request_delete_selected();
    let target = app.mode.delete_target().unwrap();
    assert_eq!(target.id, (PAGE_SIZE + 1).to_string());

    app.confirm_delete();
    assert!(app.mode.delete_target().unwrap().is_pending());
    assert!(app.process_next_message().await);

    assert!(app.mode.is_idle());
    assert_eq!(app.page, 1);
    assert_eq!(app.books.len(), PAGE_SIZE);
    assert_eq!(store.snapshot().await.len(), PAGE_SIZE);
    assert_eq!(app.toasts.latest().unwrap().message, "Book deleted!");
}

#[tokio::test]
async fn test_failed_delete_keeps_record_and_dialog() {
    let client = MockHttpClient::new();
    client.set_response(
        Method::Delete,
        &format!("{}/2", BASE),
        MockResponse::status(500, "boom"),
    );
    let mut app = TestAppBuilder::new()
        .with_books(sample_catalog())
        .with_store(remote_store(&client))
        .build();

    app.request_delete("2");
    app.confirm_delete();
    assert!(app.process_next_message().await);

    assert_eq!(app.books.len(), 4);
    assert!(matches!(app.mode, Mode::ConfirmingDelete(_)));
    assert!(!app.mode.delete_target().unwrap().is_pending());
    assert_eq!(app.toasts.latest().unwrap().message, "Failed to delete book");
}

#[tokio::test]
async fn test_refresh_after_mutation_reloads_from_store() {
    let store = Arc::new(InMemoryBookStore::with_books(sample_catalog()));
    let mut app = TestAppBuilder::new()
        .with_books(sample_catalog())
        .with_store(store)
        .with_refresh_after_mutation(true)
        .build();

    app.request_delete("3");
    app.confirm_delete();
    assert!(app.process_next_message().await);
    assert!(app.loading);

    assert!(app.process_next_message().await);
    assert!(!app.loading);
    assert_eq!(app.books.len(), 3);
    assert!(app.books.iter().all(|b| b.id != "3"));
}

#[test]
fn test_modal_requests_for_unknown_ids_are_ignored() {
    let mut app = TestAppBuilder::new().with_books(sample_catalog()).build();
    app.request_edit("missing");
    assert!(app.mode.is_idle());
    app.request_delete("missing");
    assert!(app.mode.is_idle());
}
