//! UI rendering for the dashboard
//!
//! Rendering is a pure function of [`DashboardView`]: nothing in this module
//! touches [`App`](crate::app::App) state.
//!
//! ## Responsive Layout System
//!
//! Every component receives a [`LayoutContext`] built from the frame size and
//! asks it which columns fit, whether the footer is shown, and how wide
//! dialogs and toasts get.

pub mod components;
pub mod dashboard;
mod layout;
mod theme;

// Re-export theme colors for external use
pub use theme::{
    status_color, toast_color, COLOR_ACCENT, COLOR_ACTIVE, COLOR_AVAILABLE, COLOR_BORDER,
    COLOR_DIM, COLOR_ERROR, COLOR_HEADER, COLOR_ISSUED, COLOR_SUCCESS,
};

// Re-export layout system for external use
pub use layout::{breakpoints, LayoutContext, SizeCategory};

use ratatui::Frame;

use crate::view_state::DashboardView;

/// Render one frame of the dashboard
pub fn render(frame: &mut Frame, view: &DashboardView) {
    let area = frame.area();
    dashboard::render_dashboard(frame, area, view);
}
