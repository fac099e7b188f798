//! CLI module for bookdeck.
//!
//! Called early in main() to handle flags before the TUI starts:
//!
//! ```ignore
//! use bookdeck::cli::{parse_args, run_cli_command};
//!
//! let command = parse_args(std::env::args())?;
//! let overrides = run_cli_command(command); // exits for --version/--help
//! ```

pub mod args;
pub mod version;

pub use args::{parse_args, ArgsError, CliCommand, CliOverrides};
pub use version::{handle_help_command, handle_version_command, VERSION};

/// Run a CLI command if applicable.
///
/// Returns the overrides to start the dashboard with. `Version` and `Help`
/// print and exit.
pub fn run_cli_command(command: CliCommand) -> CliOverrides {
    match command {
        CliCommand::Version => handle_version_command(),
        CliCommand::Help => handle_help_command(),
        CliCommand::Run(overrides) => overrides,
    }
}
