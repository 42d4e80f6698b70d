//! Status command implementation.
//!
//! `gauntlet status` shows the current day, its weekday, overall progress,
//! and today's task checklist.

use std::path::{Path, PathBuf};

use crate::challenge::{ChallengeState, DailyTasks, TaskId, TOTAL_DAYS};
use crate::cli::args::StatusArgs;
use crate::error::Result;
use crate::workout::{day_key, WorkoutLog};

use super::dispatcher::{Command, CommandResult};
use super::display;

/// The status command implementation.
pub struct StatusCommand {
    data_dir: PathBuf,
    args: StatusArgs,
}

impl StatusCommand {
    /// Create a new status command.
    pub fn new(data_dir: &Path, args: StatusArgs) -> Self {
        Self {
            data_dir: data_dir.to_path_buf(),
            args,
        }
    }
}

impl Command for StatusCommand {
    fn execute(&self) -> Result<CommandResult> {
        let store = super::open_store(&self.data_dir);
        let challenge = ChallengeState::new(store.clone());
        let log = WorkoutLog::new(store);

        let day = challenge.current_day();
        let weekday = challenge.weekday_for_day(day);
        let tasks = challenge.tasks();
        let completed = challenge.completed_days().len();

        if self.args.short {
            println!(
                "Day {} of {} ({}) - {}% challenge, {}% tasks",
                day,
                TOTAL_DAYS,
                weekday,
                challenge.progress_percentage(),
                challenge.tasks_completed_percentage()
            );
            return Ok(CommandResult::success());
        }

        println!("{}", display::heading(&format!("Day {} of {} - {}", day, TOTAL_DAYS, weekday)));
        println!();
        println!(
            "Challenge  {} ({} days done)",
            display::progress_bar(challenge.progress_percentage(), 20),
            completed
        );
        println!(
            "Today      {} ({}/{} tasks)",
            display::progress_bar(challenge.tasks_completed_percentage(), 20),
            tasks.completed_count(),
            DailyTasks::TOTAL
        );
        println!();

        for task in TaskId::ALL {
            println!("  {} {}", display::checkbox(tasks.is_done(task)), task.label());
        }

        let logged = log.entries(&day_key(day)).len();
        if logged > 0 {
            println!();
            println!("Logged exercises today: {}", logged);
        }

        Ok(CommandResult::success())
    }
}
