//! Complete command implementation.
//!
//! `gauntlet complete` records the current day in the ledger and advances
//! the day counter. Re-running it on an already-recorded day is a no-op.

use std::path::{Path, PathBuf};

use console::style;

use crate::challenge::{ChallengeState, TOTAL_DAYS};
use crate::error::Result;
use crate::template::TemplateCatalog;

use super::dispatcher::{Command, CommandResult};

/// The complete command implementation.
pub struct CompleteCommand {
    data_dir: PathBuf,
}

impl CompleteCommand {
    /// Create a new complete command.
    pub fn new(data_dir: &Path) -> Self {
        Self {
            data_dir: data_dir.to_path_buf(),
        }
    }
}

impl Command for CompleteCommand {
    fn execute(&self) -> Result<CommandResult> {
        let store = super::open_store(&self.data_dir);
        let challenge = ChallengeState::new(store);

        let day = challenge.current_day();
        if !challenge.complete_day()? {
            println!("Day {} is already recorded as completed.", day);
            return Ok(CommandResult::success());
        }

        println!(
            "{}",
            style(format!("Day {} complete! Now on day {} of {}.", day, day + 1, TOTAL_DAYS))
                .green()
        );
        println!("Challenge progress: {}%", challenge.progress_percentage());

        // Motivation is best-effort; a broken catalog is ignored
        if let Ok(catalog) = TemplateCatalog::builtin() {
            if let Some(line) = catalog.random_motivation() {
                println!();
                println!("{}", style(line).italic());
            }
        }

        Ok(CommandResult::success())
    }
}
