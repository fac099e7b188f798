//! Type definitions for the dashboard state.
//!
//! - [`Mode`] - Which modal, if any, is open
//! - [`Focus`] - Whether keys go to the list or the search box
//! - [`DeleteTarget`] - Record awaiting delete confirmation

use crate::models::BookForm;

/// Which UI component receives typed characters while no modal is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Focus {
    #[default]
    List,
    Search,
}

/// Record named in the delete confirmation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteTarget {
    pub id: String,
    pub title: String,
    /// Operation id of the in-flight delete, if confirmed
    pub pending_op: Option<u64>,
}

impl DeleteTarget {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            pending_op: None,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending_op.is_some()
    }

    /// Body text of the confirmation dialog.
    pub fn prompt(&self) -> String {
        format!(
            "Are you sure you want to delete \"{}\"? This action cannot be undone.",
            self.title
        )
    }

    pub fn confirm_label(&self) -> &'static str {
        if self.is_pending() {
            "Deleting..."
        } else {
            "Delete Book"
        }
    }
}

/// Dashboard state machine.
///
/// `Idle` shows the list. At most one modal is open at a time.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Idle,
    /// Record form open, for create (`target == None`) or edit
    Editing(BookForm),
    /// Delete confirmation open
    ConfirmingDelete(DeleteTarget),
}

impl Mode {
    pub fn is_idle(&self) -> bool {
        matches!(self, Mode::Idle)
    }

    pub fn form(&self) -> Option<&BookForm> {
        match self {
            Mode::Editing(form) => Some(form),
            _ => None,
        }
    }

    pub fn form_mut(&mut self) -> Option<&mut BookForm> {
        match self {
            Mode::Editing(form) => Some(form),
            _ => None,
        }
    }

    pub fn delete_target(&self) -> Option<&DeleteTarget> {
        match self {
            Mode::ConfirmingDelete(target) => Some(target),
            _ => None,
        }
    }

    /// Whether the open modal is waiting on operation `op_id`.
    pub fn owns_op(&self, op_id: u64) -> bool {
        match self {
            Mode::Editing(form) => form.pending_op == Some(op_id),
            Mode::ConfirmingDelete(target) => target.pending_op == Some(op_id),
            Mode::Idle => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        assert_eq!(Mode::default(), Mode::Idle);
        assert_eq!(Focus::default(), Focus::List);
    }

    #[test]
    fn test_delete_prompt() {
        let mut target = DeleteTarget::new("4", "Dune");
        assert_eq!(
            target.prompt(),
            "Are you sure you want to delete \"Dune\"? This action cannot be undone."
        );
        assert_eq!(target.confirm_label(), "Delete Book");
        target.pending_op = Some(3);
        assert_eq!(target.confirm_label(), "Deleting...");
    }

    #[test]
    fn test_owns_op() {
        let mut form = BookForm::create();
        form.pending_op = Some(7);
        let mode = Mode::Editing(form);
        assert!(mode.owns_op(7));
        assert!(!mode.owns_op(8));
        assert!(!Mode::Idle.owns_op(7));

        let mode = Mode::ConfirmingDelete(DeleteTarget::new("1", "A"));
        assert!(!mode.owns_op(1));
    }
}
