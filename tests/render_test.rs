//! Keyboard-driven dashboard sessions rendered to a TestBackend.

mod common;

use bookdeck::app::App;
use bookdeck::input::CommandRegistry;
use bookdeck::models::PAGE_SIZE;
use bookdeck::ui;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{backend::TestBackend, Terminal};

use common::{numbered_books, sample_catalog, TestAppBuilder};

fn screen(app: &App, width: u16, height: u16) -> String {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(|f| ui::render(f, &app.view_state())).unwrap();
    let buffer = terminal.backend().buffer();
    (0..height)
        .map(|y| {
            (0..width)
                .map(|x| buffer[(x, y)].symbol().to_string())
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn press(app: &mut App, registry: &CommandRegistry, code: KeyCode) {
    app.handle_key_event(registry, KeyEvent::new(code, KeyModifiers::NONE));
}

fn type_text(app: &mut App, registry: &CommandRegistry, text: &str) {
    for c in text.chars() {
        press(app, registry, KeyCode::Char(c));
    }
}

#[test]
fn test_search_from_keyboard_narrows_the_table() {
    let registry = CommandRegistry::new();
    let mut app = TestAppBuilder::new().with_books(sample_catalog()).build();

    press(&mut app, &registry, KeyCode::Char('/'));
    type_text(&mut app, &registry, "dun");
    press(&mut app, &registry, KeyCode::Enter);

    let out = screen(&app, 120, 30);
    assert!(out.contains("Dune"));
    assert!(!out.contains("The Hobbit"));
    assert!(out.contains("Showing 1 of 1 books matching \"dun\""));
}

#[test]
fn test_paging_from_keyboard() {
    let registry = CommandRegistry::new();
    let mut app = TestAppBuilder::new()
        .with_books(numbered_books(PAGE_SIZE + 1))
        .build();

    press(&mut app, &registry, KeyCode::Right);
    assert_eq!(app.page, 2);

    let out = screen(&app, 120, 30);
    assert!(out.contains(&format!("Book {}", PAGE_SIZE + 1)));
    assert!(out.contains("Showing 1 of 10 books"));
    assert!(out.contains("‹ Prev"));
}

#[test]
fn test_filter_with_no_matches_shows_hint() {
    let registry = CommandRegistry::new();
    let mut app = TestAppBuilder::new().with_books(sample_catalog()).build();

    press(&mut app, &registry, KeyCode::Char('/'));
    type_text(&mut app, &registry, "zzz");

    let out = screen(&app, 100, 30);
    assert!(out.contains("No books found"));
    assert!(!out.contains("Showing"));
}

#[tokio::test]
async fn test_add_book_through_the_form() {
    let registry = CommandRegistry::new();
    let mut app = TestAppBuilder::new().with_books(sample_catalog()).build();

    press(&mut app, &registry, KeyCode::Char('a'));
    assert!(screen(&app, 100, 40).contains("Add New Book"));

    // Submitting empty keeps the form open with errors
    press(&mut app, &registry, KeyCode::Enter);
    let out = screen(&app, 100, 40);
    assert!(out.contains("Title is required"));
    assert!(app.mode.form().is_some());

    type_text(&mut app, &registry, "Kindred");
    press(&mut app, &registry, KeyCode::Tab);
    type_text(&mut app, &registry, "Octavia E. Butler");
    press(&mut app, &registry, KeyCode::Tab);
    press(&mut app, &registry, KeyCode::Right);
    press(&mut app, &registry, KeyCode::Tab);
    type_text(&mut app, &registry, "1979");
    press(&mut app, &registry, KeyCode::Tab);
    press(&mut app, &registry, KeyCode::Right);
    press(&mut app, &registry, KeyCode::Enter);

    assert!(app.mode.form().unwrap().is_pending());
    assert!(app.process_next_message().await);

    assert!(app.mode.is_idle());
    let out = screen(&app, 120, 30);
    assert!(out.contains("Kindred"));
    assert!(out.contains("Book added successfully!"));
}

#[tokio::test]
async fn test_delete_through_the_dialog() {
    let registry = CommandRegistry::new();
    let mut app = TestAppBuilder::new().with_books(sample_catalog()).build();

    press(&mut app, &registry, KeyCode::Char('d'));
    let out = screen(&app, 100, 30);
    assert!(out.contains("Delete Book"));
    assert!(out.contains("Dune"));

    press(&mut app, &registry, KeyCode::Char('y'));
    assert!(app.process_next_message().await);

    let out = screen(&app, 120, 30);
    assert!(!out.contains("Dune"));
    assert!(out.contains("Book deleted!"));
    assert!(out.contains("Showing 3 of 3 books"));
}

#[test]
fn test_escape_cancels_dialog() {
    let registry = CommandRegistry::new();
    let mut app = TestAppBuilder::new().with_books(sample_catalog()).build();

    press(&mut app, &registry, KeyCode::Char('e'));
    assert!(screen(&app, 100, 40).contains("Edit Book"));

    press(&mut app, &registry, KeyCode::Esc);
    assert!(app.mode.is_idle());
    assert!(!screen(&app, 100, 40).contains("Edit Book"));
}

#[test]
fn test_narrow_terminal_still_renders_titles() {
    let app = TestAppBuilder::new().with_books(sample_catalog()).build();
    let out = screen(&app, 50, 20);
    assert!(out.contains("Dune"));
    assert!(!out.contains("Frank Herbert"));
}

#[test]
fn test_quit_from_list() {
    let registry = CommandRegistry::new();
    let mut app = TestAppBuilder::new().build();
    press(&mut app, &registry, KeyCode::Char('q'));
    assert!(app.should_quit);
}
