//! Toggle command implementation.

use std::path::{Path, PathBuf};

use crate::challenge::ChallengeState;
use crate::cli::args::ToggleArgs;
use crate::error::Result;

use super::dispatcher::{Command, CommandResult};
use super::display;

/// The toggle command implementation.
pub struct ToggleCommand {
    data_dir: PathBuf,
    args: ToggleArgs,
}

impl ToggleCommand {
    /// Create a new toggle command.
    pub fn new(data_dir: &Path, args: ToggleArgs) -> Self {
        Self {
            data_dir: data_dir.to_path_buf(),
            args,
        }
    }
}

impl Command for ToggleCommand {
    fn execute(&self) -> Result<CommandResult> {
        let store = super::open_store(&self.data_dir);
        let challenge = ChallengeState::new(store);

        challenge.toggle_task(self.args.task)?;

        let done = challenge.tasks().is_done(self.args.task);
        println!("{} {}", display::checkbox(done), self.args.task.label());
        println!(
            "Tasks today: {}%",
            challenge.tasks_completed_percentage()
        );

        Ok(CommandResult::success())
    }
}
