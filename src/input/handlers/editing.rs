//! Editing command handlers.
//!
//! Handles typing into the search box and the record form, and the form's
//! submit and the delete confirmation.

use tracing::debug;

use crate::app::App;
use crate::input::Command;

/// Handles search box commands.
pub fn handle_search_command(app: &mut App, cmd: &Command) -> bool {
    match cmd {
        Command::SearchChar(c) => app.push_search_char(*c),
        Command::SearchBackspace => app.pop_search_char(),
        Command::SearchClear => app.set_search(String::new()),
        _ => return false,
    }
    true
}

/// Handles record form commands. Does nothing unless the form is open.
pub fn handle_form_command(app: &mut App, cmd: &Command) -> bool {
    if let Command::SubmitForm = cmd {
        if let Err(err) = app.submit_form() {
            debug!(error = %err, "Form rejected");
        }
        return true;
    }

    let Some(form) = app.mode.form_mut() else {
        return false;
    };
    match cmd {
        Command::FormChar(c) => form.insert_char(*c),
        Command::FormBackspace => form.backspace(),
        Command::FormNextField => form.focus_next(),
        Command::FormPrevField => form.focus_prev(),
        Command::FormSelectNext => form.select_next(),
        Command::FormSelectPrev => form.select_prev(),
        _ => return false,
    }
    app.mark_dirty();
    true
}

/// Handles the delete confirmation and closing either modal.
pub fn handle_modal_command(app: &mut App, cmd: &Command) -> bool {
    match cmd {
        Command::ConfirmDelete => app.confirm_delete(),
        Command::CancelModal => app.cancel(),
        _ => return false,
    }
    true
}
