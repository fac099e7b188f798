//! Version and help output.

/// The current version of bookdeck, read from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub const USAGE: &str = "\
Usage: bookdeck [OPTIONS]

Options:
      --remote           Use the REST book store (default)
      --memory           Use the in-memory book store
      --url <URL>        Book collection endpoint of the REST store
      --snapshot <PATH>  JSON snapshot for the in-memory store (implies --memory)
      --no-refresh       Do not reload the list after saving or deleting
  -h, --help             Print help
  -V, --version          Print version

Environment:
  BOOKDECK_STORE, BOOKDECK_API_URL, BOOKDECK_SNAPSHOT,
  BOOKDECK_TIMEOUT_SECS, BOOKDECK_LOG_FILE, RUST_LOG";

pub fn version_string() -> String {
    format!("bookdeck {}", VERSION)
}

/// Handle the --version command.
pub fn handle_version_command() -> ! {
    println!("{}", version_string());
    std::process::exit(0)
}

/// Handle the --help command.
pub fn handle_help_command() -> ! {
    println!("{}\n\n{}", version_string(), USAGE);
    std::process::exit(0)
}
