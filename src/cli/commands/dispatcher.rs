//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::path::{Path, PathBuf};

use crate::cli::args::{Cli, Commands, StatusArgs};
use crate::error::Result;

/// Trait for command implementations.
pub trait Command {
    /// Execute the command.
    ///
    /// Returns a [`CommandResult`] indicating success/failure and exit code.
    fn execute(&self) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    data_dir: PathBuf,
}

impl CommandDispatcher {
    /// Create a new dispatcher for the given data directory.
    pub fn new(data_dir: PathBuf) -> Self {
        Self { data_dir }
    }

    /// Get the data directory.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Dispatch and execute a command.
    ///
    /// No subcommand defaults to `status`.
    pub fn dispatch(&self, cli: &Cli) -> Result<CommandResult> {
        match &cli.command {
            Some(Commands::Status(args)) => {
                let cmd = super::status::StatusCommand::new(&self.data_dir, args.clone());
                cmd.execute()
            }
            Some(Commands::Toggle(args)) => {
                let cmd = super::toggle::ToggleCommand::new(&self.data_dir, args.clone());
                cmd.execute()
            }
            Some(Commands::Complete) => {
                let cmd = super::complete::CompleteCommand::new(&self.data_dir);
                cmd.execute()
            }
            Some(Commands::Log(args)) => {
                let cmd = super::log::LogCommand::new(&self.data_dir, args.clone());
                cmd.execute()
            }
            Some(Commands::Schedule(args)) => {
                let cmd = super::schedule::ScheduleCommand::new(&self.data_dir, args.clone());
                cmd.execute()
            }
            Some(Commands::Reset(args)) => {
                let cmd = super::reset::ResetCommand::new(&self.data_dir, args.clone());
                cmd.execute()
            }
            Some(Commands::Completions(args)) => {
                let cmd = super::completions::CompletionsCommand::new(args.clone());
                cmd.execute()
            }
            None => {
                let cmd = super::status::StatusCommand::new(
                    &self.data_dir,
                    StatusArgs { short: false },
                );
                cmd.execute()
            }
        }
    }
}
