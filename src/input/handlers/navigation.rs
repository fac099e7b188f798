//! Navigation command handlers.
//!
//! Handles list movement, paging, filters and the record intents that open
//! modals.

use crate::app::App;
use crate::input::Command;

/// Handles navigation-related commands.
///
/// Returns `true` if the command was handled.
pub fn handle_navigation_command(app: &mut App, cmd: &Command) -> bool {
    match cmd {
        Command::Quit => app.quit(),
        Command::Reload => app.reload(),
        Command::MoveUp => app.select_prev(),
        Command::MoveDown => app.select_next(),
        Command::NextPage => app.next_page(),
        Command::PrevPage => app.prev_page(),
        Command::FirstPage => app.go_to_page(1),
        Command::LastPage => {
            let last = app.total_pages();
            app.go_to_page(last);
        }
        Command::AddBook => app.request_add(),
        Command::EditSelected => app.request_edit_selected(),
        Command::DeleteSelected => app.request_delete_selected(),
        Command::FocusSearch => app.focus_search(),
        Command::BlurSearch => app.blur_search(),
        Command::CycleGenre => app.cycle_genre(),
        Command::CycleStatus => app.cycle_status(),
        Command::ClearFilters => app.clear_filters(),
        _ => return false,
    }
    true
}
