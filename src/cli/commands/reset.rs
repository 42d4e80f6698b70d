//! Reset command implementation.
//!
//! `gauntlet reset` clears the day counter, the completed-day ledger, and
//! today's tasks back to their defaults. Irreversible, so it requires an
//! explicit `--yes`. The exercise log is left untouched.

use std::path::{Path, PathBuf};

use console::style;

use crate::challenge::ChallengeState;
use crate::cli::args::ResetArgs;
use crate::error::Result;

use super::dispatcher::{Command, CommandResult};

/// The reset command implementation.
pub struct ResetCommand {
    data_dir: PathBuf,
    args: ResetArgs,
}

impl ResetCommand {
    /// Create a new reset command.
    pub fn new(data_dir: &Path, args: ResetArgs) -> Self {
        Self {
            data_dir: data_dir.to_path_buf(),
            args,
        }
    }
}

impl Command for ResetCommand {
    fn execute(&self) -> Result<CommandResult> {
        if !self.args.yes {
            eprintln!(
                "{}",
                style("This clears all challenge progress and cannot be undone.").yellow()
            );
            eprintln!("Re-run with --yes to confirm.");
            return Ok(CommandResult::failure(2));
        }

        let store = super::open_store(&self.data_dir);
        let challenge = ChallengeState::new(store);
        challenge.reset_all()?;

        println!("Challenge progress reset. Back to day 1.");
        Ok(CommandResult::success())
    }
}
