//! Dashboard UI module
//!
//! Composes the single dashboard screen from its components.

pub mod book_list;
pub mod filter_bar;
pub mod footer;
pub mod header;
pub mod overlay;
pub mod pagination;
pub mod states;
pub mod toasts;

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::Span,
    widgets::Paragraph,
    Frame,
};

use crate::ui::layout::LayoutContext;
use crate::ui::theme::COLOR_DIM;
use crate::view_state::DashboardView;

/// Render the complete dashboard
///
/// # Layout
/// ```text
/// +------------------------------------------+
/// | HEADER: BookManager Dashboard    n books |
/// +------------------------------------------+
/// | FILTERS: [search      ] [genre] [status] |
/// | Showing 9 of 12 books                    |
/// +------------------------------------------+
/// | LIST: ▶ Title  Author  Genre  Year  ●    |
/// +------------------------------------------+
/// |        ‹ Prev  [1]  2  Next ›            |
/// | a add  e edit  d delete ...              |
/// +------------------------------------------+
/// ```
///
/// Modals draw over everything; toasts draw over the modal.
pub fn render_dashboard(frame: &mut Frame, area: Rect, view: &DashboardView) {
    if area.width < states::MIN_WIDTH || area.height < states::MIN_HEIGHT {
        states::render_too_small(frame, area);
        return;
    }

    let ctx = LayoutContext::from_rect(area);
    let show_pagination = !view.loading && !view.page_markers.is_empty();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(header::HEADER_HEIGHT),
            Constraint::Length(ctx.filter_bar_height()),
            Constraint::Length(1), // Summary
            Constraint::Min(3),    // List
            Constraint::Length(u16::from(show_pagination)),
            Constraint::Length(u16::from(ctx.show_footer())),
        ])
        .split(area);

    header::render(frame, chunks[0], view);
    filter_bar::render(frame, chunks[1], view, &ctx);
    if let Some(summary) = &view.summary {
        frame.render_widget(
            Paragraph::new(Span::styled(
                format!(" {}", summary),
                Style::default().fg(COLOR_DIM),
            )),
            chunks[2],
        );
    }
    book_list::render(frame, chunks[3], view, &ctx);
    if show_pagination {
        pagination::render(
            frame,
            chunks[4],
            &view.page_markers,
            view.page,
            view.total_pages,
        );
    }
    if ctx.show_footer() {
        footer::render(frame, chunks[5], view);
    }

    overlay::render(frame, area, view.mode, &ctx);

    // Keep toasts clear of the footer
    let toast_area = Rect::new(
        area.x,
        area.y,
        area.width,
        area.height.saturating_sub(chunks[5].height),
    );
    toasts::render(frame, toast_area, view.toasts, &ctx);
}
