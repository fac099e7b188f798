//! Filter bar: search box, genre and status selectors.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::app::Focus;
use crate::models::FilterCriteria;
use crate::ui::layout::LayoutContext;
use crate::ui::theme::{COLOR_ACTIVE, COLOR_BORDER, COLOR_BORDER_FOCUSED, COLOR_DIM};
use crate::view_state::DashboardView;

pub const SEARCH_PLACEHOLDER: &str = "Search books...";
pub const ALL_GENRES: &str = "All Genres";
pub const ALL_STATUSES: &str = "All Statuses";

pub fn genre_label(criteria: &FilterCriteria) -> &str {
    criteria.genre.as_deref().unwrap_or(ALL_GENRES)
}

pub fn status_label(criteria: &FilterCriteria) -> &'static str {
    criteria.status.map(|s| s.as_str()).unwrap_or(ALL_STATUSES)
}

fn search_spans<'a>(criteria: &'a FilterCriteria, focused: bool) -> Vec<Span<'a>> {
    let mut spans = vec![Span::styled("⌕ ", Style::default().fg(COLOR_DIM))];
    if criteria.search.is_empty() && !focused {
        spans.push(Span::styled(SEARCH_PLACEHOLDER, Style::default().fg(COLOR_DIM)));
    } else {
        spans.push(Span::raw(criteria.search.as_str()));
    }
    if focused {
        spans.push(Span::raw("█"));
    }
    spans
}

fn selector_style(active: bool) -> Style {
    if active {
        Style::default()
            .fg(COLOR_ACTIVE)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    }
}

pub fn render(frame: &mut Frame, area: Rect, view: &DashboardView, ctx: &LayoutContext) {
    if area.height == 0 {
        return;
    }
    let search_focused = view.focus == Focus::Search && view.mode.is_idle();

    if area.height < 3 {
        render_inline(frame, area, view, search_focused);
        return;
    }

    let constraints = if ctx.is_narrow() {
        [
            Constraint::Percentage(40),
            Constraint::Percentage(30),
            Constraint::Percentage(30),
        ]
    } else {
        [
            Constraint::Percentage(50),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ]
    };
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area);

    let search_title = if ctx.is_narrow() {
        " Search (/) "
    } else {
        " Search by title or author (/) "
    };
    let search_block = boxed(search_title, search_focused);
    frame.render_widget(
        Paragraph::new(Line::from(search_spans(view.criteria, search_focused)))
            .block(search_block),
        chunks[0],
    );

    frame.render_widget(
        Paragraph::new(Span::styled(
            format!("‹ {} ›", genre_label(view.criteria)),
            selector_style(view.criteria.genre.is_some()),
        ))
        .block(boxed(" Genre (g) ", false)),
        chunks[1],
    );

    frame.render_widget(
        Paragraph::new(Span::styled(
            format!("‹ {} ›", status_label(view.criteria)),
            selector_style(view.criteria.status.is_some()),
        ))
        .block(boxed(" Status (s) ", false)),
        chunks[2],
    );
}

fn boxed(title: &str, focused: bool) -> Block<'_> {
    let border = if focused {
        COLOR_BORDER_FOCUSED
    } else {
        COLOR_BORDER
    };
    Block::default()
        .title(Span::styled(title, Style::default().fg(COLOR_DIM)))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border))
}

/// Single-line rendition for short terminals.
fn render_inline(frame: &mut Frame, area: Rect, view: &DashboardView, search_focused: bool) {
    let mut spans = search_spans(view.criteria, search_focused);
    spans.push(Span::styled("  │  ", Style::default().fg(COLOR_BORDER)));
    spans.push(Span::styled(
        genre_label(view.criteria),
        selector_style(view.criteria.genre.is_some()),
    ));
    spans.push(Span::styled("  │  ", Style::default().fg(COLOR_BORDER)));
    spans.push(Span::styled(
        status_label(view.criteria),
        selector_style(view.criteria.status.is_some()),
    ));
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
