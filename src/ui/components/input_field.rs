//! Input Field Component
//!
//! A labelled form field with focus handling and an inline error line.
//! Text fields draw a cursor when focused; select fields draw their value
//! between arrow markers. Two styles exist: a boxed field (label above a
//! rounded box) and a compact single-line field for short terminals.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::ui::theme::{COLOR_BORDER, COLOR_DIM, COLOR_ERROR, COLOR_INPUT_BG};

/// Width of the label column in compact style
const COMPACT_LABEL_WIDTH: u16 = 16;

/// Configuration for rendering an input field
#[derive(Debug, Clone)]
pub struct InputFieldConfig<'a> {
    pub label: &'a str,
    pub value: &'a str,
    pub focused: bool,
    /// Appends a `*` to the label
    pub required: bool,
    /// Draw as a select: `‹ value ›`, no cursor
    pub is_select: bool,
    /// Shown below the field
    pub error: Option<&'a str>,
    /// Shown dimmed when the value is empty
    pub placeholder: Option<&'a str>,
    /// Single-line style
    pub compact: bool,
}

impl<'a> InputFieldConfig<'a> {
    pub fn new(label: &'a str, value: &'a str) -> Self {
        Self {
            label,
            value,
            focused: false,
            required: false,
            is_select: false,
            error: None,
            placeholder: None,
            compact: false,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    pub fn select(mut self, is_select: bool) -> Self {
        self.is_select = is_select;
        self
    }

    pub fn error(mut self, error: Option<&'a str>) -> Self {
        self.error = error;
        self
    }

    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = Some(placeholder);
        self
    }

    pub fn compact(mut self, compact: bool) -> Self {
        self.compact = compact;
        self
    }

    fn label_text(&self) -> String {
        if self.required {
            format!("{} *", self.label)
        } else {
            self.label.to_string()
        }
    }

    /// Spans for the field's value, cursor or select markers included.
    fn value_spans(&self) -> Vec<Span<'a>> {
        let text_style = Style::default().fg(Color::White);

        if self.value.is_empty() {
            if let Some(placeholder) = self.placeholder {
                let mut spans = Vec::new();
                if self.focused && !self.is_select {
                    spans.push(Span::styled("█", text_style));
                }
                spans.push(Span::styled(placeholder, Style::default().fg(COLOR_DIM)));
                return spans;
            }
        }

        if self.is_select {
            let marker = if self.focused {
                Style::default().fg(Color::White)
            } else {
                Style::default().fg(COLOR_DIM)
            };
            let value = if self.value.is_empty() {
                Span::styled("Select", Style::default().fg(COLOR_DIM))
            } else {
                Span::styled(self.value, text_style)
            };
            return vec![Span::styled("‹ ", marker), value, Span::styled(" ›", marker)];
        }

        let mut spans = vec![Span::styled(self.value, text_style)];
        if self.focused {
            spans.push(Span::styled("█", text_style));
        }
        spans
    }
}

/// Rows needed by a field: 4 boxed or 1 compact, plus 1 for an error.
pub fn calculate_input_field_height(config: &InputFieldConfig) -> u16 {
    let base = if config.compact { 1 } else { 4 };
    if config.error.is_some() {
        base + 1
    } else {
        base
    }
}

/// Keep the tail of the value visible when it outgrows the box.
fn tail_fit<'a>(spans: Vec<Span<'a>>, width: u16) -> Line<'a> {
    let total: usize = spans.iter().map(|s| s.content.width()).sum();
    let width = width as usize;
    if total <= width || width == 0 {
        return Line::from(spans);
    }

    let mut skip = total - width;
    let mut fitted = Vec::with_capacity(spans.len());
    for span in spans {
        if skip == 0 {
            fitted.push(span);
            continue;
        }
        let span_width = span.content.width();
        if span_width <= skip {
            skip -= span_width;
            continue;
        }
        let kept: String = span.content.chars().skip(skip).collect();
        skip = 0;
        fitted.push(Span::styled(kept, span.style));
    }
    Line::from(fitted)
}

/// Render the field and return the rows it consumed.
pub fn render_input_field(frame: &mut Frame, area: Rect, config: &InputFieldConfig) -> u16 {
    let height = calculate_input_field_height(config).min(area.height);
    if height == 0 || area.width < 4 {
        return 0;
    }

    let label_style = if config.focused {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(COLOR_DIM)
    };

    let mut y = area.y;
    if config.compact {
        let label_width = COMPACT_LABEL_WIDTH.min(area.width / 2);
        let label_area = Rect::new(area.x, y, label_width, 1);
        frame.render_widget(
            Paragraph::new(Span::styled(config.label_text(), label_style)),
            label_area,
        );

        let value_area = Rect::new(
            area.x + label_width,
            y,
            area.width.saturating_sub(label_width),
            1,
        );
        frame.render_widget(
            Paragraph::new(tail_fit(config.value_spans(), value_area.width))
                .style(Style::default().bg(COLOR_INPUT_BG)),
            value_area,
        );
        y += 1;
    } else {
        let label_area = Rect::new(area.x, y, area.width, 1);
        frame.render_widget(
            Paragraph::new(Span::styled(config.label_text(), label_style)),
            label_area,
        );
        y += 1;

        if y + 3 <= area.y + area.height {
            let border_color = if config.error.is_some() {
                COLOR_ERROR
            } else if config.focused {
                Color::White
            } else {
                COLOR_BORDER
            };
            let block = Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(border_color))
                .style(Style::default().bg(COLOR_INPUT_BG));
            let box_area = Rect::new(area.x, y, area.width, 3);
            let inner = block.inner(box_area);
            frame.render_widget(block, box_area);
            frame.render_widget(
                Paragraph::new(tail_fit(config.value_spans(), inner.width)),
                inner,
            );
        }
        y += 3;
    }

    if let Some(error) = config.error {
        if y < area.y + area.height {
            let error_line = Line::from(Span::styled(
                format!("✗ {}", error),
                Style::default().fg(COLOR_ERROR),
            ));
            frame.render_widget(Paragraph::new(error_line), Rect::new(area.x, y, area.width, 1));
        }
    }

    height
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    fn render_to_string(config: &InputFieldConfig, width: u16, height: u16) -> String {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                render_input_field(f, f.area(), config);
            })
            .unwrap();
        let buffer = terminal.backend().buffer();
        buffer.content().iter().map(|c| c.symbol()).collect()
    }

    #[test]
    fn test_field_height() {
        let boxed = InputFieldConfig::new("Title", "");
        assert_eq!(calculate_input_field_height(&boxed), 4);
        let boxed_error = InputFieldConfig::new("Title", "").error(Some("Title is required"));
        assert_eq!(calculate_input_field_height(&boxed_error), 5);
        let compact = InputFieldConfig::new("Title", "").compact(true);
        assert_eq!(calculate_input_field_height(&compact), 1);
    }

    #[test]
    fn test_required_label_and_error() {
        let config = InputFieldConfig::new("Title", "")
            .required(true)
            .error(Some("Title is required"));
        let text = render_to_string(&config, 40, 5);
        assert!(text.contains("Title *"));
        assert!(text.contains("✗ Title is required"));
    }

    #[test]
    fn test_select_shows_markers() {
        let config = InputFieldConfig::new("Genre", "Fantasy").select(true).compact(true);
        let text = render_to_string(&config, 50, 1);
        assert!(text.contains("‹ Fantasy ›"));
    }

    #[test]
    fn test_placeholder_when_empty() {
        let config = InputFieldConfig::new("Description", "")
            .placeholder("Brief description of the book");
        let text = render_to_string(&config, 50, 4);
        assert!(text.contains("Brief description"));
    }

    #[test]
    fn test_tail_fit_keeps_cursor_visible() {
        let spans = vec![Span::raw("abcdefghij"), Span::raw("█")];
        let line = tail_fit(spans, 5);
        let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(text, "ghij█");
    }
}
