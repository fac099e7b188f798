//! Command handlers for executing commands.
//!
//! - [`navigation`] - List movement, paging, filters, record intents
//! - [`editing`] - Search box, record form and modal commands

pub mod editing;
pub mod navigation;

pub use editing::*;
pub use navigation::*;
