//! Command registry for dispatching keyboard input to commands.
//!
//! The [`CommandRegistry`] maps key events to commands based on the current
//! context, in priority order:
//! 1. Ctrl+C - always quits
//! 2. Modal bindings - an open modal takes all input
//! 3. Search box bindings and typing, while it has focus
//! 4. Global bindings
//! 5. List bindings

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::command::Command;
use super::context::{InputContext, ModalType};
use super::keybindings::{KeyCombo, KeybindingConfig};
use crate::app::Focus;

/// Registry for dispatching key events to commands.
#[derive(Debug, Clone)]
pub struct CommandRegistry {
    config: KeybindingConfig,
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandRegistry {
    /// Creates a new command registry with default keybindings.
    pub fn new() -> Self {
        Self {
            config: KeybindingConfig::new(),
        }
    }

    /// Creates a command registry with a custom keybinding configuration.
    pub fn with_config(config: KeybindingConfig) -> Self {
        Self { config }
    }

    /// Dispatches a key event to a command based on the current context.
    ///
    /// Returns `None` if the key should be ignored. Key release events are
    /// always ignored.
    pub fn dispatch(&self, key: KeyEvent, context: &InputContext) -> Option<Command> {
        if key.kind == KeyEventKind::Release {
            return None;
        }
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Some(Command::Quit);
        }

        let combo = KeyCombo::normalized(key.code, key.modifiers);

        if context.is_modal_active() {
            return Some(self.dispatch_modal(key, &combo, context));
        }

        if context.is_search_focused() {
            if let Some(cmd) = self.config.get_focus(Focus::Search, &combo) {
                return Some(cmd.clone());
            }
            return typed_char(&key).map(Command::SearchChar);
        }

        if let Some(cmd) = self.config.get_global(&combo) {
            return Some(cmd.clone());
        }

        self.config.get_focus(Focus::List, &combo).cloned()
    }

    fn dispatch_modal(&self, key: KeyEvent, combo: &KeyCombo, context: &InputContext) -> Command {
        if let Some(cmd) = self.config.get_modal(context.modal, combo) {
            return match cmd {
                // Arrows and space pick options only on select fields
                Command::FormSelectNext | Command::FormSelectPrev if !context.is_select_field() => {
                    Command::Noop
                }
                other => other.clone(),
            };
        }

        match context.modal {
            ModalType::Form => match typed_char(&key) {
                Some(' ') if context.is_select_field() => Command::FormSelectNext,
                Some(c) => Command::FormChar(c),
                None => Command::Noop,
            },
            // Modal swallows everything else
            _ => Command::Noop,
        }
    }
}

/// Printable character of a key typed without Ctrl/Alt/Super.
fn typed_char(key: &KeyEvent) -> Option<char> {
    match key.code {
        KeyCode::Char(c)
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SUPER) =>
        {
            Some(c)
        }
        _ => None,
    }
}
