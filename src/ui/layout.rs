//! Responsive layout helpers.
//!
//! [`LayoutContext`] wraps the frame dimensions and answers the sizing
//! questions the dashboard asks while rendering: which list columns fit,
//! how wide dialogs and toasts get, and whether optional chrome is shown.

use ratatui::layout::Rect;

/// Breakpoints for responsive design decisions
pub mod breakpoints {
    /// Below this the list drops to title and status only
    pub const XS_WIDTH: u16 = 60;
    /// Below this the year and genre columns are hidden
    pub const SM_WIDTH: u16 = 80;
    /// Below this the description preview is hidden
    pub const MD_WIDTH: u16 = 120;

    /// Below this the footer is hidden
    pub const XS_HEIGHT: u16 = 16;
    /// Below this the filter bar collapses to a single line
    pub const SM_HEIGHT: u16 = 24;
}

/// Size category for responsive design decisions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeCategory {
    /// Fewer than 60 columns
    ExtraSmall,
    /// Fewer than 80 columns
    Small,
    /// Fewer than 120 columns
    Medium,
    Large,
}

/// Layout context holding frame dimensions for responsive calculations.
///
/// ```ignore
/// let ctx = LayoutContext::new(120, 40);
/// if ctx.show_genre_column() {
///     // draw the genre column
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutContext {
    /// Width in columns
    pub width: u16,
    /// Height in rows
    pub height: u16,
}

impl LayoutContext {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    pub fn from_rect(area: Rect) -> Self {
        Self::new(area.width, area.height)
    }

    // ========================================================================
    // Percentage-Based Calculations
    // ========================================================================

    /// Width as a percentage of the frame width, minimum 1.
    pub fn percent_width(&self, percentage: u16) -> u16 {
        ((self.width as u32 * percentage as u32) / 100).max(1) as u16
    }

    /// Proportional width clamped to `[min, max]`.
    ///
    /// ```ignore
    /// let ctx = LayoutContext::new(200, 40);
    /// // 30% of 200 = 60, clamped to 50
    /// assert_eq!(ctx.bounded_width(30, 20, 50), 50);
    /// ```
    pub fn bounded_width(&self, percentage: u16, min: u16, max: u16) -> u16 {
        self.percent_width(percentage).clamp(min, max)
    }

    // ========================================================================
    // Size Category Detection
    // ========================================================================

    pub fn width_category(&self) -> SizeCategory {
        if self.width < breakpoints::XS_WIDTH {
            SizeCategory::ExtraSmall
        } else if self.width < breakpoints::SM_WIDTH {
            SizeCategory::Small
        } else if self.width < breakpoints::MD_WIDTH {
            SizeCategory::Medium
        } else {
            SizeCategory::Large
        }
    }

    /// Less than 80 columns.
    pub fn is_narrow(&self) -> bool {
        self.width < breakpoints::SM_WIDTH
    }

    /// Less than 24 rows.
    pub fn is_short(&self) -> bool {
        self.height < breakpoints::SM_HEIGHT
    }

    pub fn is_extra_small(&self) -> bool {
        self.width < breakpoints::XS_WIDTH || self.height < breakpoints::XS_HEIGHT
    }

    // ========================================================================
    // Dashboard Decisions
    // ========================================================================

    pub fn show_author_column(&self) -> bool {
        self.width >= breakpoints::XS_WIDTH
    }

    pub fn show_genre_column(&self) -> bool {
        !self.is_narrow()
    }

    pub fn show_year_column(&self) -> bool {
        !self.is_narrow()
    }

    /// Description preview under the selected record's row.
    pub fn show_description(&self) -> bool {
        self.width >= breakpoints::MD_WIDTH && !self.is_short()
    }

    pub fn show_footer(&self) -> bool {
        self.height >= breakpoints::XS_HEIGHT
    }

    /// Filter bar height: a bordered row, or a bare line when short.
    pub fn filter_bar_height(&self) -> u16 {
        if self.is_short() {
            1
        } else {
            3
        }
    }

    pub fn toast_width(&self) -> u16 {
        self.bounded_width(35, 24, 48).min(self.width)
    }

    /// Characters kept of a title in the list before truncation.
    pub fn max_title_length(&self) -> usize {
        match self.width_category() {
            SizeCategory::ExtraSmall => 24,
            SizeCategory::Small => 32,
            SizeCategory::Medium => 40,
            SizeCategory::Large => 56,
        }
    }
}

impl Default for LayoutContext {
    fn default() -> Self {
        Self::new(80, 24)
    }
}
