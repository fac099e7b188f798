//! Modal overlays: the record form and the delete confirmation.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use crate::app::{DeleteTarget, Mode};
use crate::models::{BookForm, FormField};
use crate::ui::components::{
    calculate_input_field_height, render_dialog_frame, render_input_field, DialogFrameConfig,
    InputFieldConfig,
};
use crate::ui::layout::LayoutContext;
use crate::ui::theme::{COLOR_ACCENT, COLOR_DIM, COLOR_ERROR, COLOR_WARNING};

const DESCRIPTION_PLACEHOLDER: &str = "Brief description of the book";

pub fn render(frame: &mut Frame, area: Rect, mode: &Mode, ctx: &LayoutContext) {
    match mode {
        Mode::Idle => {}
        Mode::Editing(form) => render_form(frame, area, form, ctx),
        Mode::ConfirmingDelete(target) => render_delete(frame, area, target, ctx),
    }
}

// ============================================================================
// Record Form
// ============================================================================

fn field_config<'a>(form: &'a BookForm, field: FormField, compact: bool) -> InputFieldConfig<'a> {
    let mut config = InputFieldConfig::new(field.label(), form.value(field))
        .focused(form.focus == field)
        .required(field.is_required())
        .select(field.is_select())
        .error(form.error_for(field))
        .compact(compact);
    if field == FormField::Description {
        config = config.placeholder(DESCRIPTION_PLACEHOLDER);
    }
    config
}

/// Height of all fields in one style.
fn fields_height(form: &BookForm, compact: bool) -> u16 {
    FormField::ALL
        .iter()
        .map(|field| calculate_input_field_height(&field_config(form, *field, compact)))
        .sum()
}

/// Cancel and submit buttons; submit is dimmed while pending.
pub fn form_buttons(form: &BookForm) -> Line<'static> {
    let submit_style = if form.is_pending() {
        Style::default().fg(COLOR_DIM)
    } else {
        Style::default()
            .fg(COLOR_ACCENT)
            .add_modifier(Modifier::BOLD)
    };
    Line::from(vec![
        Span::styled("[ Cancel ]", Style::default().fg(COLOR_DIM)),
        Span::raw("   "),
        Span::styled(format!("[ {} ]", form.submit_label()), submit_style),
    ])
}

fn render_form(frame: &mut Frame, area: Rect, form: &BookForm, ctx: &LayoutContext) {
    // Buttons row plus a spacer above it
    const BUTTON_ROWS: u16 = 2;
    let boxed = fields_height(form, false);
    let compact = boxed + BUTTON_ROWS + 2 > area.height;
    let content_height = fields_height(form, compact) + BUTTON_ROWS;

    let config = DialogFrameConfig::new(form.heading(), content_height)
        .min_width(40)
        .max_width(72);
    let inner = render_dialog_frame(frame, area, ctx, &config);
    let inner = Rect::new(
        inner.x + 1,
        inner.y,
        inner.width.saturating_sub(2),
        inner.height,
    );

    let bottom = inner.y + inner.height;
    let fields_bottom = bottom.saturating_sub(BUTTON_ROWS);
    let mut y = inner.y;
    for field in FormField::ALL {
        if y >= fields_bottom {
            break;
        }
        let config = field_config(form, field, compact);
        let field_area = Rect::new(inner.x, y, inner.width, fields_bottom - y);
        y += render_input_field(frame, field_area, &config);
    }

    if inner.height > 0 {
        frame.render_widget(
            Paragraph::new(form_buttons(form)).alignment(Alignment::Right),
            Rect::new(inner.x, bottom - 1, inner.width, 1),
        );
    }
}

// ============================================================================
// Delete Confirmation
// ============================================================================

pub fn delete_buttons(target: &DeleteTarget) -> Line<'static> {
    let confirm_style = if target.is_pending() {
        Style::default().fg(COLOR_DIM)
    } else {
        Style::default()
            .fg(COLOR_ERROR)
            .add_modifier(Modifier::BOLD)
    };
    Line::from(vec![
        Span::styled("[ Cancel ]", Style::default().fg(COLOR_DIM)),
        Span::raw("   "),
        Span::styled(format!("[ {} ]", target.confirm_label()), confirm_style),
    ])
}

fn render_delete(frame: &mut Frame, area: Rect, target: &DeleteTarget, ctx: &LayoutContext) {
    let config = DialogFrameConfig::new("Delete Book", 6)
        .max_width(56)
        .border_color(COLOR_WARNING);
    let inner = render_dialog_frame(frame, area, ctx, &config);
    if inner.height == 0 {
        return;
    }

    let body = Rect::new(
        inner.x + 1,
        inner.y + 1,
        inner.width.saturating_sub(2),
        inner.height.saturating_sub(3),
    );
    frame.render_widget(
        Paragraph::new(target.prompt()).wrap(Wrap { trim: true }),
        body,
    );
    frame.render_widget(
        Paragraph::new(delete_buttons(target)).alignment(Alignment::Right),
        Rect::new(
            inner.x + 1,
            inner.y + inner.height - 1,
            inner.width.saturating_sub(2),
            1,
        ),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_form_buttons_follow_pending() {
        let mut form = BookForm::create();
        assert!(text(&form_buttons(&form)).contains("[ Add Book ]"));
        form.pending_op = Some(1);
        let line = form_buttons(&form);
        assert!(text(&line).contains("[ Saving... ]"));
        assert_eq!(line.spans[2].style.fg, Some(COLOR_DIM));
    }

    #[test]
    fn test_delete_buttons_follow_pending() {
        let mut target = DeleteTarget::new("1", "Dune");
        assert!(text(&delete_buttons(&target)).contains("[ Delete Book ]"));
        target.pending_op = Some(2);
        assert!(text(&delete_buttons(&target)).contains("[ Deleting... ]"));
    }

    #[test]
    fn test_compact_fields_are_shorter() {
        let form = BookForm::create();
        assert!(fields_height(&form, true) < fields_height(&form, false));
        assert_eq!(fields_height(&form, true), FormField::ALL.len() as u16);
    }
}
