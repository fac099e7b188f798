//! Input handling module for keyboard and command processing.
//!
//! All input is:
//!
//! 1. Translated to a [`Command`] by the [`CommandRegistry`]
//! 2. Dispatched to handlers in the [`handlers`] module
//!
//! ```text
//! KeyEvent -> CommandRegistry::dispatch() -> Command -> Handler -> App mutation
//! ```
//!
//! # Example
//!
//! ```ignore
//! use bookdeck::input::{CommandRegistry, InputContext};
//!
//! let registry = CommandRegistry::new();
//! let context = InputContext::from_app(&app);
//!
//! if let Some(cmd) = registry.dispatch(key_event, &context) {
//!     app.execute_command(cmd);
//! }
//! ```

pub mod command;
pub mod context;
pub mod handlers;
pub mod keybindings;
pub mod registry;

pub use command::Command;
pub use context::{InputContext, ModalType};
pub use keybindings::{KeyCombo, KeybindingConfig};
pub use registry::CommandRegistry;

use crossterm::event::KeyEvent;

use crate::app::App;

impl App {
    /// Build the input context from current app state.
    pub fn build_input_context(&self) -> InputContext {
        InputContext::from_app(self)
    }

    /// Executes a command, delegating to the appropriate handler.
    ///
    /// Returns `true` if the command was handled.
    pub fn execute_command(&mut self, cmd: Command) -> bool {
        if !cmd.is_text_input() {
            tracing::debug!(?cmd, "execute_command");
        }
        match cmd {
            Command::Noop => return false,
            // Ctrl+C quits from anywhere, including modals
            Command::Quit => {
                self.quit();
                return true;
            }
            _ => {}
        }

        match self.build_input_context().modal {
            ModalType::Form => {
                handlers::handle_form_command(self, &cmd) || handlers::handle_modal_command(self, &cmd)
            }
            ModalType::DeleteConfirm => handlers::handle_modal_command(self, &cmd),
            ModalType::None => {
                handlers::handle_search_command(self, &cmd)
                    || handlers::handle_navigation_command(self, &cmd)
            }
        }
    }

    /// Dispatch a key event through `registry` and execute the result.
    pub fn handle_key_event(&mut self, registry: &CommandRegistry, key: KeyEvent) -> bool {
        let context = self.build_input_context();
        match registry.dispatch(key, &context) {
            Some(cmd) => self.execute_command(cmd),
            None => false,
        }
    }

    /// Insert pasted text into the search box or the focused form field.
    ///
    /// Control characters, newlines included, are dropped.
    pub fn handle_paste(&mut self, text: &str) -> bool {
        let context = self.build_input_context();
        let to_command: fn(char) -> Command = match context.modal {
            ModalType::Form if !context.is_select_field() => Command::FormChar,
            ModalType::None if context.is_search_focused() => Command::SearchChar,
            _ => return false,
        };

        let mut handled = false;
        for c in text.chars().filter(|c| !c.is_control()) {
            handled |= self.execute_command(to_command(c));
        }
        handled
    }
}
