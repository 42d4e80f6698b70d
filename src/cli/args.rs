//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::challenge::TaskId;

use super::commands::log::LogArgs;

/// Gauntlet - 75-day challenge tracker.
#[derive(Debug, Parser)]
#[command(name = "gauntlet")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Data directory holding persisted state (overrides ~/.gauntlet)
    #[arg(long, global = true, env = "GAUNTLET_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show challenge status (default if no command specified)
    Status(StatusArgs),

    /// Toggle one of today's tasks
    Toggle(ToggleArgs),

    /// Mark the current day complete and advance
    Complete,

    /// Manage the exercise log
    Log(LogArgs),

    /// Show the weekly reference schedule
    Schedule(ScheduleArgs),

    /// Reset all challenge progress
    Reset(ResetArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the status command.
#[derive(Debug, Clone, Args)]
pub struct StatusArgs {
    /// One-line summary instead of the full checklist
    #[arg(long)]
    pub short: bool,
}

/// Arguments for the toggle command.
#[derive(Debug, Clone, Args)]
pub struct ToggleArgs {
    /// Task to flip
    #[arg(value_enum)]
    pub task: TaskId,
}

/// Arguments for the schedule command.
#[derive(Debug, Clone, Args)]
pub struct ScheduleArgs {
    /// Path to a custom catalog YAML file
    #[arg(long)]
    pub catalog: Option<PathBuf>,
}

/// Arguments for the reset command.
#[derive(Debug, Clone, Args)]
pub struct ResetArgs {
    /// Confirm the irreversible reset
    #[arg(long)]
    pub yes: bool,
}

/// Arguments for the completions command.
#[derive(Debug, Clone, Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
