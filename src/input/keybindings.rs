//! Default keybindings for the dashboard.
//!
//! Maps key combinations to commands, per modal and per focus.

use crossterm::event::{KeyCode, KeyModifiers};
use std::collections::HashMap;

use super::command::Command;
use super::context::ModalType;
use crate::app::Focus;

/// Represents a key combination (key code + modifiers).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyCombo {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyCombo {
    pub const fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    /// Creates a key combo with no modifiers.
    pub const fn plain(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::NONE)
    }

    /// Creates a key combo with Control modifier.
    pub const fn ctrl(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::CONTROL)
    }

    /// Lookup key for an event.
    ///
    /// Shift is dropped from characters and BackTab, since terminals disagree
    /// on whether to report it.
    pub fn normalized(code: KeyCode, modifiers: KeyModifiers) -> Self {
        match code {
            KeyCode::Char(_) | KeyCode::BackTab => {
                Self::new(code, modifiers.difference(KeyModifiers::SHIFT))
            }
            _ => Self::new(code, modifiers),
        }
    }
}

/// Keybinding configuration for the application.
#[derive(Debug, Clone)]
pub struct KeybindingConfig {
    /// Global keybindings, active when no modal is open and the search box
    /// does not have focus
    pub global: HashMap<KeyCombo, Command>,
    /// Keybindings per modal type
    pub modal: HashMap<ModalType, HashMap<KeyCombo, Command>>,
    /// Keybindings per focus state
    pub focus: HashMap<Focus, HashMap<KeyCombo, Command>>,
}

impl Default for KeybindingConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl KeybindingConfig {
    /// Creates a new keybinding configuration with default bindings.
    pub fn new() -> Self {
        let mut config = Self {
            global: HashMap::new(),
            modal: HashMap::new(),
            focus: HashMap::new(),
        };
        config.setup_global_bindings();
        config.setup_modal_bindings();
        config.setup_focus_bindings();
        config
    }

    fn setup_global_bindings(&mut self) {
        self.global
            .insert(KeyCombo::ctrl(KeyCode::Char('r')), Command::Reload);
    }

    fn setup_modal_bindings(&mut self) {
        let mut form = HashMap::new();
        form.insert(KeyCombo::plain(KeyCode::Esc), Command::CancelModal);
        form.insert(KeyCombo::plain(KeyCode::Enter), Command::SubmitForm);
        form.insert(KeyCombo::ctrl(KeyCode::Char('s')), Command::SubmitForm);
        form.insert(KeyCombo::plain(KeyCode::Tab), Command::FormNextField);
        form.insert(KeyCombo::plain(KeyCode::Down), Command::FormNextField);
        form.insert(KeyCombo::plain(KeyCode::BackTab), Command::FormPrevField);
        form.insert(KeyCombo::plain(KeyCode::Up), Command::FormPrevField);
        form.insert(KeyCombo::plain(KeyCode::Right), Command::FormSelectNext);
        form.insert(KeyCombo::plain(KeyCode::Left), Command::FormSelectPrev);
        form.insert(KeyCombo::plain(KeyCode::Backspace), Command::FormBackspace);
        self.modal.insert(ModalType::Form, form);

        let mut delete = HashMap::new();
        delete.insert(KeyCombo::plain(KeyCode::Char('y')), Command::ConfirmDelete);
        delete.insert(KeyCombo::plain(KeyCode::Enter), Command::ConfirmDelete);
        delete.insert(KeyCombo::plain(KeyCode::Char('Y')), Command::ConfirmDelete);
        delete.insert(KeyCombo::plain(KeyCode::Char('n')), Command::CancelModal);
        delete.insert(KeyCombo::plain(KeyCode::Char('N')), Command::CancelModal);
        delete.insert(KeyCombo::plain(KeyCode::Esc), Command::CancelModal);
        self.modal.insert(ModalType::DeleteConfirm, delete);
    }

    fn setup_focus_bindings(&mut self) {
        let mut list = HashMap::new();
        list.insert(KeyCombo::plain(KeyCode::Char('q')), Command::Quit);
        list.insert(KeyCombo::plain(KeyCode::Char('r')), Command::Reload);
        list.insert(KeyCombo::plain(KeyCode::Up), Command::MoveUp);
        list.insert(KeyCombo::plain(KeyCode::Char('k')), Command::MoveUp);
        list.insert(KeyCombo::plain(KeyCode::Down), Command::MoveDown);
        list.insert(KeyCombo::plain(KeyCode::Char('j')), Command::MoveDown);
        list.insert(KeyCombo::plain(KeyCode::Right), Command::NextPage);
        list.insert(KeyCombo::plain(KeyCode::Char(']')), Command::NextPage);
        list.insert(KeyCombo::plain(KeyCode::PageDown), Command::NextPage);
        list.insert(KeyCombo::plain(KeyCode::Left), Command::PrevPage);
        list.insert(KeyCombo::plain(KeyCode::Char('[')), Command::PrevPage);
        list.insert(KeyCombo::plain(KeyCode::PageUp), Command::PrevPage);
        list.insert(KeyCombo::plain(KeyCode::Home), Command::FirstPage);
        list.insert(KeyCombo::plain(KeyCode::End), Command::LastPage);
        list.insert(KeyCombo::plain(KeyCode::Char('a')), Command::AddBook);
        list.insert(KeyCombo::plain(KeyCode::Char('e')), Command::EditSelected);
        list.insert(KeyCombo::plain(KeyCode::Enter), Command::EditSelected);
        list.insert(KeyCombo::plain(KeyCode::Char('d')), Command::DeleteSelected);
        list.insert(KeyCombo::plain(KeyCode::Delete), Command::DeleteSelected);
        list.insert(KeyCombo::plain(KeyCode::Char('/')), Command::FocusSearch);
        list.insert(KeyCombo::plain(KeyCode::Char('g')), Command::CycleGenre);
        list.insert(KeyCombo::plain(KeyCode::Char('s')), Command::CycleStatus);
        list.insert(KeyCombo::plain(KeyCode::Char('c')), Command::ClearFilters);
        self.focus.insert(Focus::List, list);

        let mut search = HashMap::new();
        search.insert(KeyCombo::plain(KeyCode::Esc), Command::BlurSearch);
        search.insert(KeyCombo::plain(KeyCode::Enter), Command::BlurSearch);
        search.insert(KeyCombo::plain(KeyCode::Down), Command::BlurSearch);
        search.insert(KeyCombo::plain(KeyCode::Backspace), Command::SearchBackspace);
        search.insert(KeyCombo::ctrl(KeyCode::Char('u')), Command::SearchClear);
        self.focus.insert(Focus::Search, search);
    }

    pub fn get_global(&self, combo: &KeyCombo) -> Option<&Command> {
        self.global.get(combo)
    }

    pub fn get_modal(&self, modal: ModalType, combo: &KeyCombo) -> Option<&Command> {
        self.modal.get(&modal).and_then(|m| m.get(combo))
    }

    pub fn get_focus(&self, focus: Focus, combo: &KeyCombo) -> Option<&Command> {
        self.focus.get(&focus).and_then(|m| m.get(combo))
    }

    /// Key hints for the footer, in display order.
    pub fn footer_hints(modal: ModalType, focus: Focus) -> &'static [(&'static str, &'static str)] {
        match (modal, focus) {
            (ModalType::Form, _) => &[
                ("Tab", "next field"),
                ("←/→", "choose"),
                ("Enter", "save"),
                ("Esc", "cancel"),
            ],
            (ModalType::DeleteConfirm, _) => &[("y", "delete"), ("n/Esc", "keep")],
            (ModalType::None, Focus::Search) => &[
                ("type", "search"),
                ("Ctrl+U", "clear"),
                ("Enter/Esc", "done"),
            ],
            (ModalType::None, Focus::List) => &[
                ("a", "add"),
                ("e", "edit"),
                ("d", "delete"),
                ("/", "search"),
                ("g", "genre"),
                ("s", "status"),
                ("c", "clear"),
                ("←/→", "page"),
                ("r", "reload"),
                ("q", "quit"),
            ],
        }
    }
}
