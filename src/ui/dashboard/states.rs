//! Special state rendering for the dashboard.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Text},
    widgets::{Paragraph, Wrap},
    Frame,
};

use crate::ui::theme::COLOR_WARNING;

/// Smallest frame the dashboard lays out in.
pub const MIN_WIDTH: u16 = 30;
pub const MIN_HEIGHT: u16 = 10;

/// Shown instead of the dashboard when the frame is too small.
pub fn render_too_small(frame: &mut Frame, area: Rect) {
    let text = Text::from(vec![
        Line::styled(
            "⚠ terminal too small",
            Style::default()
                .fg(COLOR_WARNING)
                .add_modifier(Modifier::BOLD),
        ),
        Line::raw(format!("need {}x{}", MIN_WIDTH, MIN_HEIGHT)),
    ]);

    let y_offset = area.height.saturating_sub(2) / 2;
    let centered = Rect::new(area.x, area.y + y_offset, area.width, area.height.min(2));
    frame.render_widget(
        Paragraph::new(text)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        centered,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    #[test]
    fn test_too_small_message() {
        let backend = TestBackend::new(24, 6);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                let area = f.area();
                render_too_small(f, area);
            })
            .unwrap();
        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(text.contains("too small"));
    }
}
