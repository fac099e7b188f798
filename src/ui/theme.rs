//! Color theme constants for the dashboard.
//!
//! Defines the minimal dark color palette used throughout the UI.

use ratatui::style::Color;

use crate::app::ToastKind;
use crate::models::BookStatus;

// ============================================================================
// Minimal Dark Color Theme
// ============================================================================

/// Primary border color - dark gray for minimal aesthetic
pub const COLOR_BORDER: Color = Color::DarkGray;

/// Border of the focused widget
pub const COLOR_BORDER_FOCUSED: Color = Color::White;

/// Accent color - white for highlights and important elements
pub const COLOR_ACCENT: Color = Color::White;

/// Header text color
pub const COLOR_HEADER: Color = Color::White;

/// Active filters and the current page
pub const COLOR_ACTIVE: Color = Color::LightGreen;

/// Dim text for less important info
pub const COLOR_DIM: Color = Color::DarkGray;

/// Background for input areas
pub const COLOR_INPUT_BG: Color = Color::Rgb(20, 20, 30);

/// Background for modal dialogs
pub const COLOR_DIALOG_BG: Color = Color::Rgb(10, 15, 35);

/// Background of the selected list row
pub const COLOR_SELECTED_BG: Color = Color::Rgb(35, 40, 60);

// ============================================================================
// Status Colors
// ============================================================================

pub const COLOR_SUCCESS: Color = Color::Rgb(4, 181, 117); // green #04B575

pub const COLOR_ERROR: Color = Color::Red;

/// Destructive confirmations
pub const COLOR_WARNING: Color = Color::Yellow;

/// Available badge
pub const COLOR_AVAILABLE: Color = Color::Rgb(4, 181, 117);

/// Issued badge
pub const COLOR_ISSUED: Color = Color::Rgb(255, 140, 40); // orange

pub fn status_color(status: BookStatus) -> Color {
    match status {
        BookStatus::Available => COLOR_AVAILABLE,
        BookStatus::Issued => COLOR_ISSUED,
    }
}

pub fn toast_color(kind: ToastKind) -> Color {
    match kind {
        ToastKind::Success => COLOR_SUCCESS,
        ToastKind::Error => COLOR_ERROR,
    }
}
