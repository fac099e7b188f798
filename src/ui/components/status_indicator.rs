//! Status Indicator Component
//!
//! Spinner, empty-state and error blocks for the list area, plus the
//! availability badge drawn on every record row.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use crate::models::BookStatus;
use crate::ui::theme::{status_color, COLOR_DIM, COLOR_ERROR, COLOR_WARNING};

/// Spinner animation frames
const SPINNER_FRAMES: [char; 4] = ['◐', '◓', '◑', '◒'];

/// Status indicator types
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusIndicatorType {
    /// Spinning indicator with a message
    Spinner { message: String, frame: usize },
    /// Nothing to show, with a hint underneath
    Empty { message: String, hint: String },
    /// Failure header with optional details
    Error {
        header: String,
        details: Option<String>,
    },
}

impl StatusIndicatorType {
    pub fn spinner(message: impl Into<String>, frame: usize) -> Self {
        Self::Spinner {
            message: message.into(),
            frame,
        }
    }

    pub fn empty(message: impl Into<String>, hint: impl Into<String>) -> Self {
        Self::Empty {
            message: message.into(),
            hint: hint.into(),
        }
    }

    pub fn error(header: impl Into<String>, details: Option<String>) -> Self {
        Self::Error {
            header: header.into(),
            details,
        }
    }
}

pub fn get_spinner_char(frame: usize) -> char {
    SPINNER_FRAMES[frame % SPINNER_FRAMES.len()]
}

/// Render a status indicator as centered-ready lines.
pub fn render_status_indicator(indicator: &StatusIndicatorType) -> Vec<Line<'static>> {
    match indicator {
        StatusIndicatorType::Spinner { message, frame } => vec![Line::from(vec![
            Span::styled(
                format!("{} ", get_spinner_char(*frame)),
                Style::default().fg(COLOR_WARNING),
            ),
            Span::styled(
                message.clone(),
                Style::default()
                    .fg(COLOR_WARNING)
                    .add_modifier(Modifier::BOLD),
            ),
        ])],

        StatusIndicatorType::Empty { message, hint } => vec![
            Line::from(Span::styled(
                message.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled(hint.clone(), Style::default().fg(COLOR_DIM))),
        ],

        StatusIndicatorType::Error { header, details } => {
            let mut lines = vec![Line::from(vec![
                Span::styled("\u{2717} ", Style::default().fg(COLOR_ERROR)),
                Span::styled(
                    header.clone(),
                    Style::default()
                        .fg(COLOR_ERROR)
                        .add_modifier(Modifier::BOLD),
                ),
            ])];
            if let Some(detail) = details {
                lines.push(Line::from(""));
                lines.push(Line::from(Span::raw(detail.clone())));
            }
            lines
        }
    }
}

pub fn calculate_status_height(indicator: &StatusIndicatorType) -> u16 {
    match indicator {
        StatusIndicatorType::Spinner { .. } => 1,
        StatusIndicatorType::Empty { .. } => 3,
        StatusIndicatorType::Error { details, .. } => {
            if details.is_some() {
                3
            } else {
                1
            }
        }
    }
}

/// Availability badge, e.g. `● Available`.
pub fn status_badge(status: BookStatus) -> Span<'static> {
    let icon = match status {
        BookStatus::Available => '●',
        BookStatus::Issued => '◷',
    };
    Span::styled(
        format!("{} {}", icon, status.as_str()),
        Style::default()
            .fg(status_color(status))
            .add_modifier(Modifier::BOLD),
    )
}
