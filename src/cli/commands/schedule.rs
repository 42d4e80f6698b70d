//! Schedule command implementation.
//!
//! `gauntlet schedule` prints the weekly reference schedule, marking the
//! current day's weekday.

use std::path::{Path, PathBuf};

use console::style;

use crate::challenge::{ChallengeState, WEEKDAY_NAMES};
use crate::cli::args::ScheduleArgs;
use crate::error::Result;
use crate::template::TemplateCatalog;

use super::dispatcher::{Command, CommandResult};
use super::display;

/// The schedule command implementation.
pub struct ScheduleCommand {
    data_dir: PathBuf,
    args: ScheduleArgs,
}

impl ScheduleCommand {
    /// Create a new schedule command.
    pub fn new(data_dir: &Path, args: ScheduleArgs) -> Self {
        Self {
            data_dir: data_dir.to_path_buf(),
            args,
        }
    }
}

impl Command for ScheduleCommand {
    fn execute(&self) -> Result<CommandResult> {
        let catalog = match &self.args.catalog {
            Some(path) => TemplateCatalog::from_path(path)?,
            None => TemplateCatalog::builtin()?,
        };

        let store = super::open_store(&self.data_dir);
        let challenge = ChallengeState::new(store);
        let today = challenge.weekday_for_day(challenge.current_day());

        println!("{}", display::heading("Weekly reference schedule"));
        println!();

        for weekday in WEEKDAY_NAMES {
            let marker = if weekday == today { "->" } else { "  " };
            match catalog.for_weekday(weekday) {
                Some(day) => {
                    println!("{} {} - {}", marker, style(weekday).bold(), day.focus);
                    for exercise in &day.exercises {
                        println!("       {}  {}", exercise.name, style(&exercise.sets_reps).dim());
                    }
                }
                None => {
                    println!("{} {} - (no plan)", marker, style(weekday).bold());
                }
            }
        }

        if let Some(line) = catalog.random_motivation() {
            println!();
            println!("{}", style(line).italic());
        }

        Ok(CommandResult::success())
    }
}
