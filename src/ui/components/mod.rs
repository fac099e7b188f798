//! Reusable UI Components
//!
//! Building blocks shared by the dashboard screen and its modals.
//!
//! ## Components
//!
//! - `InputField` - Labelled text or select field with cursor and errors
//! - `StatusIndicator` - Spinner, empty-state and error blocks, status badge
//! - `DialogFrame` - Centered dialog overlay with rounded borders

mod dialog_frame;
mod input_field;
mod status_indicator;

pub use dialog_frame::{calculate_total_dialog_height, dialog_area, render_dialog_frame, DialogFrameConfig};
pub use input_field::{calculate_input_field_height, render_input_field, InputFieldConfig};
pub use status_indicator::{
    calculate_status_height, get_spinner_char, render_status_indicator, status_badge,
    StatusIndicatorType,
};
