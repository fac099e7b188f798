//! Dashboard header component
//!
//! Title on the left, record counts and the store in use on the right.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::ui::theme::{COLOR_BORDER, COLOR_DIM, COLOR_HEADER};
use crate::view_state::DashboardView;

pub const TITLE: &str = "BookManager Dashboard";

/// Header height: title row plus the bottom rule.
pub const HEADER_HEIGHT: u16 = 2;

/// Right-hand text, e.g. `12 books · https://host/books`.
pub fn status_text(view: &DashboardView) -> String {
    let noun = if view.total_count == 1 { "book" } else { "books" };
    format!("{} {} · {}", view.total_count, noun, view.store_label)
}

/// Render the header
///
/// ```text
///   ◆ BookManager Dashboard                    12 books · in-memory
/// ─────────────────────────────────────────────────────────────────
/// ```
pub fn render(frame: &mut Frame, area: Rect, view: &DashboardView) {
    if area.height == 0 {
        return;
    }

    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(COLOR_BORDER));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let title = Line::from(vec![
        Span::styled(" ◆ ", Style::default().fg(COLOR_DIM)),
        Span::styled(
            TITLE,
            Style::default()
                .fg(COLOR_HEADER)
                .add_modifier(Modifier::BOLD),
        ),
    ]);
    let title_width = title.width() as u16;
    frame.render_widget(Paragraph::new(title), inner);

    // Only when it fits next to the title
    let status = status_text(view);
    let status_width = status.width() as u16 + 1;
    if title_width + status_width + 2 <= inner.width {
        let status_area = Rect::new(
            inner.x + inner.width - status_width,
            inner.y,
            status_width,
            1,
        );
        frame.render_widget(
            Paragraph::new(Span::styled(status, Style::default().fg(COLOR_DIM))),
            status_area,
        );
    }
}
