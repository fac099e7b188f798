//! Footer key hints, chosen by the open modal and the focus.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::input::{KeybindingConfig, ModalType};
use crate::ui::theme::{COLOR_ACCENT, COLOR_DIM};
use crate::view_state::DashboardView;

pub fn hint_line(view: &DashboardView) -> Line<'static> {
    let hints = KeybindingConfig::footer_hints(ModalType::from_mode(view.mode), view.focus);
    let mut spans = vec![Span::raw(" ")];
    for (idx, (key, action)) in hints.iter().enumerate() {
        if idx > 0 {
            spans.push(Span::styled("  ", Style::default().fg(COLOR_DIM)));
        }
        spans.push(Span::styled(
            *key,
            Style::default()
                .fg(COLOR_ACCENT)
                .add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled(format!(" {}", action), Style::default().fg(COLOR_DIM)));
    }
    Line::from(spans)
}

pub fn render(frame: &mut Frame, area: Rect, view: &DashboardView) {
    frame.render_widget(Paragraph::new(hint_line(view)), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{Focus, Mode, Toasts};
    use crate::models::FilterCriteria;

    #[test]
    fn test_hint_line_for_list() {
        let criteria = FilterCriteria::new();
        let toasts = Toasts::new();
        let mode = Mode::Idle;
        let view = DashboardView {
            books: Vec::new(),
            page: 1,
            total_pages: 0,
            page_markers: Vec::new(),
            filtered_count: 0,
            total_count: 0,
            selected: 0,
            criteria: &criteria,
            genres: Vec::new(),
            focus: Focus::List,
            mode: &mode,
            loading: false,
            has_loaded: true,
            load_error: None,
            summary: None,
            toasts: &toasts,
            store_label: "in-memory".to_string(),
            tick_count: 0,
        };
        let text: String = hint_line(&view)
            .spans
            .iter()
            .map(|s| s.content.as_ref())
            .collect();
        assert!(text.contains("a add"));
        assert!(text.contains("q quit"));
    }
}
