//! Book list: the current page of records as a table.
//!
//! Falls back to a spinner while loading, an error block when the first
//! load failed, and an empty-state message when nothing matches.

use ratatui::{
    layout::{Alignment, Constraint, Rect},
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, BorderType, Borders, Cell, Paragraph, Row, Table, Wrap},
    Frame,
};

use crate::models::Book;
use crate::ui::components::{
    calculate_status_height, render_status_indicator, status_badge, StatusIndicatorType,
};
use crate::ui::layout::LayoutContext;
use crate::ui::theme::{COLOR_BORDER, COLOR_DIM, COLOR_SELECTED_BG};
use crate::view_state::DashboardView;

/// Rows reserved under the table for the selected record's details.
const DETAIL_HEIGHT: u16 = 2;

/// What the list area shows this frame.
pub fn list_state(view: &DashboardView) -> Option<StatusIndicatorType> {
    if view.loading {
        return Some(StatusIndicatorType::spinner(
            "Loading books...",
            view.tick_count as usize,
        ));
    }
    if !view.books.is_empty() {
        return None;
    }
    if let (Some(error), 0) = (view.load_error, view.total_count) {
        return Some(StatusIndicatorType::error(
            "Failed to load books",
            Some(format!("{} Press r to retry.", error)),
        ));
    }
    if view.is_filtered() {
        Some(StatusIndicatorType::empty(
            "No books found",
            "Try adjusting your search or filters (c clears them)",
        ))
    } else {
        Some(StatusIndicatorType::empty(
            "No books found",
            "Press a to add your first book",
        ))
    }
}

/// Cut `text` to `max` characters, marking the cut with an ellipsis.
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let kept: String = text.chars().take(max.saturating_sub(1)).collect();
    format!("{}…", kept)
}

fn header_row(ctx: &LayoutContext) -> Row<'static> {
    let mut cells = vec![Cell::from(""), Cell::from("Title")];
    if ctx.show_author_column() {
        cells.push(Cell::from("Author"));
    }
    if ctx.show_genre_column() {
        cells.push(Cell::from("Genre"));
    }
    if ctx.show_year_column() {
        cells.push(Cell::from("Year"));
    }
    cells.push(Cell::from("Status"));
    Row::new(cells).style(Style::default().fg(COLOR_DIM).add_modifier(Modifier::BOLD))
}

fn column_widths(ctx: &LayoutContext) -> Vec<Constraint> {
    let mut widths = vec![Constraint::Length(2), Constraint::Fill(3)];
    if ctx.show_author_column() {
        widths.push(Constraint::Fill(2));
    }
    if ctx.show_genre_column() {
        widths.push(Constraint::Length(16));
    }
    if ctx.show_year_column() {
        widths.push(Constraint::Length(6));
    }
    widths.push(Constraint::Length(12));
    widths
}

fn book_row<'a>(book: &'a Book, selected: bool, ctx: &LayoutContext) -> Row<'a> {
    let marker = if selected { "▶" } else { " " };
    let mut cells = vec![
        Cell::from(marker),
        Cell::from(Span::styled(
            truncate(&book.title, ctx.max_title_length()),
            Style::default().add_modifier(Modifier::BOLD),
        )),
    ];
    if ctx.show_author_column() {
        cells.push(Cell::from(book.author.as_str()));
    }
    if ctx.show_genre_column() {
        cells.push(Cell::from(Span::styled(
            book.genre.as_str(),
            Style::default().fg(COLOR_DIM),
        )));
    }
    if ctx.show_year_column() {
        cells.push(Cell::from(book.published_year.to_string()));
    }
    cells.push(Cell::from(status_badge(book.status)));

    let row = Row::new(cells);
    if selected {
        row.style(Style::default().bg(COLOR_SELECTED_BG))
    } else {
        row
    }
}

fn detail_text(book: &Book) -> Text<'_> {
    let mut meta = vec![Span::styled(
        format!("{} · {} · {}", book.author, book.genre, book.published_year),
        Style::default().fg(COLOR_DIM),
    )];
    if let Some(isbn) = &book.isbn {
        meta.push(Span::styled(
            format!(" · ISBN {}", isbn),
            Style::default().fg(COLOR_DIM),
        ));
    }
    let mut lines = vec![Line::from(meta)];
    if let Some(description) = &book.description {
        lines.push(Line::from(description.as_str()));
    }
    Text::from(lines)
}

pub fn render(frame: &mut Frame, area: Rect, view: &DashboardView, ctx: &LayoutContext) {
    let block = Block::default()
        .title(Span::styled(" Books ", Style::default().fg(COLOR_DIM)))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.height == 0 || inner.width == 0 {
        return;
    }

    if let Some(indicator) = list_state(view) {
        let height = calculate_status_height(&indicator).min(inner.height);
        let y = inner.y + inner.height.saturating_sub(height) / 2;
        frame.render_widget(
            Paragraph::new(render_status_indicator(&indicator))
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true }),
            Rect::new(inner.x, y, inner.width, height),
        );
        return;
    }

    let selected = view.selected_book();
    // Header, every row, a spacer and the detail strip
    let wanted = view.books.len() as u16 + 2 + DETAIL_HEIGHT;
    let show_detail = ctx.show_description() && selected.is_some() && inner.height >= wanted;
    let table_height = if show_detail {
        inner.height - DETAIL_HEIGHT - 1
    } else {
        inner.height
    };

    let rows: Vec<Row> = view
        .books
        .iter()
        .enumerate()
        .map(|(idx, book)| book_row(book, idx == view.selected, ctx))
        .collect();
    let table = Table::new(rows, column_widths(ctx))
        .header(header_row(ctx))
        .column_spacing(2);
    frame.render_widget(table, Rect::new(inner.x, inner.y, inner.width, table_height));

    if let (true, Some(book)) = (show_detail, selected) {
        let detail_area = Rect::new(
            inner.x + 2,
            inner.y + inner.height - DETAIL_HEIGHT,
            inner.width.saturating_sub(4),
            DETAIL_HEIGHT,
        );
        frame.render_widget(
            Paragraph::new(detail_text(book)).wrap(Wrap { trim: true }),
            detail_area,
        );
    }
}
