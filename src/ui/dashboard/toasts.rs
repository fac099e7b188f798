//! Toast stack in the bottom-right corner, newest at the bottom.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::app::{Toast, ToastKind, Toasts};
use crate::ui::layout::LayoutContext;
use crate::ui::theme::{toast_color, COLOR_DIALOG_BG, COLOR_DIM};

fn toast_lines(toast: &Toast) -> Vec<Line<'_>> {
    let icon = match toast.kind {
        ToastKind::Success => "✓",
        ToastKind::Error => "✗",
    };
    let color = toast_color(toast.kind);
    let mut lines = vec![Line::from(vec![
        Span::styled(format!("{} ", icon), Style::default().fg(color)),
        Span::styled(
            toast.message.as_str(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
    ])];
    if let Some(detail) = &toast.detail {
        lines.push(Line::from(Span::styled(
            detail.as_str(),
            Style::default().fg(COLOR_DIM),
        )));
    }
    if let Some(hint) = &toast.hint {
        lines.push(Line::from(Span::styled(
            hint.as_str(),
            Style::default()
                .fg(COLOR_DIM)
                .add_modifier(Modifier::ITALIC),
        )));
    }
    lines
}

/// Bordered height of one toast.
pub fn toast_height(toast: &Toast) -> u16 {
    3 + toast.detail.is_some() as u16 + toast.hint.is_some() as u16
}

/// Draw the stack above `area`'s bottom edge.
pub fn render(frame: &mut Frame, area: Rect, toasts: &Toasts, ctx: &LayoutContext) {
    if toasts.is_empty() {
        return;
    }
    let width = ctx.toast_width().min(area.width);
    let x = area.x + area.width - width;
    let mut bottom = area.y + area.height;

    for toast in toasts.iter().collect::<Vec<_>>().into_iter().rev() {
        let height = toast_height(toast);
        if bottom < area.y + height {
            break;
        }
        bottom -= height;
        let rect = Rect::new(x, bottom, width, height);

        frame.render_widget(Clear, rect);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(toast_color(toast.kind)))
            .style(Style::default().bg(COLOR_DIALOG_BG));
        frame.render_widget(
            Paragraph::new(toast_lines(toast))
                .block(block)
                .wrap(Wrap { trim: true }),
            rect,
        );
    }
}
