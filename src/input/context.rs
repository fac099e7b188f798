//! Input context for determining which commands are available.

use crate::app::{App, Focus, Mode};
use crate::models::FormField;

/// The type of modal dialog currently active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ModalType {
    /// No modal dialog is active
    #[default]
    None,
    /// Record form (create or edit)
    Form,
    /// Delete confirmation
    DeleteConfirm,
}

impl ModalType {
    pub fn from_mode(mode: &Mode) -> Self {
        match mode {
            Mode::Idle => ModalType::None,
            Mode::Editing(_) => ModalType::Form,
            Mode::ConfirmingDelete(_) => ModalType::DeleteConfirm,
        }
    }
}

/// Context information for input handling.
#[derive(Debug, Clone, Default)]
pub struct InputContext {
    pub focus: Focus,
    pub modal: ModalType,
    /// Focused form field, when the form is open
    pub form_field: Option<FormField>,
}

impl InputContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an InputContext from the current App state.
    pub fn from_app(app: &App) -> Self {
        Self {
            focus: app.focus,
            modal: ModalType::from_mode(&app.mode),
            form_field: app.mode.form().map(|form| form.focus),
        }
    }

    pub fn with_focus(mut self, focus: Focus) -> Self {
        self.focus = focus;
        self
    }

    pub fn with_modal(mut self, modal: ModalType) -> Self {
        self.modal = modal;
        self
    }

    pub fn with_form_field(mut self, field: FormField) -> Self {
        self.form_field = Some(field);
        self
    }

    pub fn is_modal_active(&self) -> bool {
        self.modal != ModalType::None
    }

    pub fn is_search_focused(&self) -> bool {
        !self.is_modal_active() && self.focus == Focus::Search
    }

    /// Whether the focused form field is a select (genre, status).
    pub fn is_select_field(&self) -> bool {
        self.form_field.is_some_and(|f| f.is_select())
    }
}
