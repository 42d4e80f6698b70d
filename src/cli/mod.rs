//! Command-line interface.
//!
//! The CLI is a thin presentation layer over the library: every subcommand
//! constructs the store and domain state, invokes one operation, and renders
//! the result. All invariants live in the library.

pub mod args;
pub mod commands;

pub use args::{Cli, Commands};
pub use commands::{Command, CommandDispatcher, CommandResult};
