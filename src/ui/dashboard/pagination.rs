//! Pagination control.
//!
//! ```text
//!  ‹ Prev   1  …  4  [5]  6  …  12   Next ›
//! ```

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::models::PageMarker;
use crate::ui::theme::{COLOR_ACTIVE, COLOR_DIM};

/// Build the control line, or `None` when there is nothing to page through.
pub fn pagination_line(markers: &[PageMarker], current: usize, total: usize) -> Option<Line<'static>> {
    if markers.is_empty() {
        return None;
    }

    let enabled = Style::default();
    let disabled = Style::default().fg(COLOR_DIM);

    let mut spans = vec![Span::styled(
        "‹ Prev",
        if current > 1 { enabled } else { disabled },
    )];
    spans.push(Span::raw("  "));
    for marker in markers {
        match marker {
            PageMarker::Page(page) if *page == current => spans.push(Span::styled(
                format!(" [{}] ", page),
                Style::default()
                    .fg(COLOR_ACTIVE)
                    .add_modifier(Modifier::BOLD),
            )),
            PageMarker::Page(page) => spans.push(Span::raw(format!("  {}  ", page))),
            PageMarker::Gap => spans.push(Span::styled("  …  ", disabled)),
        }
    }
    spans.push(Span::raw("  "));
    spans.push(Span::styled(
        "Next ›",
        if current < total { enabled } else { disabled },
    ));
    Some(Line::from(spans))
}

pub fn render(frame: &mut Frame, area: Rect, markers: &[PageMarker], current: usize, total: usize) {
    if let Some(line) = pagination_line(markers, current, total) {
        frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
    }
}
