//! Command definitions for keyboard input handling.
//!
//! The [`Command`] enum decouples key bindings from their effects.

/// Represents all possible commands that can be triggered by keyboard input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    // =========================================================================
    // Global Commands
    // =========================================================================
    /// Quit the application (q, Ctrl+C)
    Quit,
    /// Re-list the store (r, Ctrl+R)
    Reload,
    /// Key consumed without effect
    Noop,

    // =========================================================================
    // List Navigation
    // =========================================================================
    MoveUp,
    MoveDown,
    NextPage,
    PrevPage,
    FirstPage,
    LastPage,

    // =========================================================================
    // Record Intents
    // =========================================================================
    /// Open the empty record form
    AddBook,
    /// Open the record form for the selected record
    EditSelected,
    /// Ask to delete the selected record
    DeleteSelected,

    // =========================================================================
    // Filters
    // =========================================================================
    /// Move keyboard focus to the search box (/)
    FocusSearch,
    /// Return focus to the list
    BlurSearch,
    SearchChar(char),
    SearchBackspace,
    SearchClear,
    CycleGenre,
    CycleStatus,
    ClearFilters,

    // =========================================================================
    // Record Form
    // =========================================================================
    FormChar(char),
    FormBackspace,
    FormNextField,
    FormPrevField,
    /// Next option of a select field
    FormSelectNext,
    /// Previous option of a select field
    FormSelectPrev,
    SubmitForm,

    // =========================================================================
    // Modals
    // =========================================================================
    ConfirmDelete,
    /// Close the open modal (Esc)
    CancelModal,
}

impl Command {
    /// Whether this command only edits text.
    pub fn is_text_input(&self) -> bool {
        matches!(
            self,
            Command::SearchChar(_)
                | Command::SearchBackspace
                | Command::SearchClear
                | Command::FormChar(_)
                | Command::FormBackspace
        )
    }
}
