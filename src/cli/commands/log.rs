//! Log command implementation.
//!
//! `gauntlet log` manages the day-indexed exercise log: add, list, delete,
//! and bulk-append from the weekly reference schedule.

use std::path::{Path, PathBuf};

use clap::{Args, Subcommand};
use console::style;

use crate::challenge::ChallengeState;
use crate::error::Result;
use crate::template::TemplateCatalog;
use crate::workout::{day_key, prefill_exercise, ExerciseDraft, ExerciseEntry, WorkoutLog};

use super::dispatcher::{Command, CommandResult};

/// Arguments for the log command.
#[derive(Debug, Clone, Args)]
pub struct LogArgs {
    #[command(subcommand)]
    pub command: LogCommands,
}

/// Exercise log subcommands.
#[derive(Debug, Clone, Subcommand)]
pub enum LogCommands {
    /// Add an exercise to a day's log
    Add {
        /// Exercise name
        name: String,

        /// Challenge day (defaults to the current day)
        #[arg(short, long)]
        day: Option<u32>,

        /// Combined prescription text, e.g. "3 x 45 sec" (pre-fills sets/reps)
        #[arg(short, long)]
        prescription: Option<String>,

        /// Weight used
        #[arg(long)]
        weight: Option<String>,

        /// Number of sets (overrides --prescription)
        #[arg(long)]
        sets: Option<String>,

        /// Reps per set (overrides --prescription)
        #[arg(long)]
        reps: Option<String>,

        /// Free-form notes
        #[arg(long)]
        notes: Option<String>,
    },

    /// List a day's logged exercises
    List {
        /// Challenge day (defaults to the current day)
        #[arg(short, long)]
        day: Option<u32>,
    },

    /// Delete a logged exercise by id
    Delete {
        /// Entry id as shown by `log list`
        id: String,

        /// Challenge day (defaults to the current day)
        #[arg(short, long)]
        day: Option<u32>,
    },

    /// Append the reference schedule for the day's weekday
    Template {
        /// Challenge day (defaults to the current day)
        #[arg(short, long)]
        day: Option<u32>,

        /// Path to a custom catalog YAML file
        #[arg(long)]
        catalog: Option<PathBuf>,
    },
}

/// The log command implementation.
pub struct LogCommand {
    data_dir: PathBuf,
    args: LogArgs,
}

impl LogCommand {
    /// Create a new log command.
    pub fn new(data_dir: &Path, args: LogArgs) -> Self {
        Self {
            data_dir: data_dir.to_path_buf(),
            args,
        }
    }
}

impl Command for LogCommand {
    fn execute(&self) -> Result<CommandResult> {
        let store = super::open_store(&self.data_dir);
        let challenge = ChallengeState::new(store.clone());
        let log = WorkoutLog::new(store);

        match &self.args.command {
            LogCommands::Add {
                name,
                day,
                prescription,
                weight,
                sets,
                reps,
                notes,
            } => {
                let day = day.unwrap_or_else(|| challenge.current_day());

                let mut draft = match prescription {
                    Some(text) => prefill_exercise(name, text),
                    None => ExerciseDraft {
                        name: name.clone(),
                        ..Default::default()
                    },
                };
                if let Some(weight) = weight {
                    draft.weight = weight.clone();
                }
                if let Some(sets) = sets {
                    draft.sets = sets.clone();
                }
                if let Some(reps) = reps {
                    draft.reps = reps.clone();
                }
                if let Some(notes) = notes {
                    draft.notes = notes.clone();
                }

                match log.add_exercise(&day_key(day), draft)? {
                    Some(entry) => {
                        println!("Added {} to day {} ({})", entry.name, day, entry.id);
                        Ok(CommandResult::success())
                    }
                    None => {
                        eprintln!("{}", style("Exercise name must not be empty.").red());
                        Ok(CommandResult::failure(2))
                    }
                }
            }

            LogCommands::List { day } => {
                let day = day.unwrap_or_else(|| challenge.current_day());
                let entries = log.entries(&day_key(day));

                if entries.is_empty() {
                    println!("No exercises logged for day {}.", day);
                    return Ok(CommandResult::success());
                }

                println!("Day {} - {} exercise(s)", day, entries.len());
                for entry in &entries {
                    println!("  {}", render_entry(entry));
                }
                Ok(CommandResult::success())
            }

            LogCommands::Delete { id, day } => {
                let day = day.unwrap_or_else(|| challenge.current_day());

                if log.delete_exercise(&day_key(day), id)? {
                    println!("Deleted {} from day {}.", id, day);
                    Ok(CommandResult::success())
                } else {
                    eprintln!("No entry {} on day {}.", id, day);
                    Ok(CommandResult::failure(2))
                }
            }

            LogCommands::Template { day, catalog } => {
                let day = day.unwrap_or_else(|| challenge.current_day());
                let catalog = match catalog {
                    Some(path) => TemplateCatalog::from_path(path)?,
                    None => TemplateCatalog::builtin()?,
                };

                let weekday = challenge.weekday_for_day(day);
                let Some(template) = catalog.for_weekday(weekday) else {
                    eprintln!("No reference schedule for {}.", weekday);
                    return Ok(CommandResult::failure(2));
                };

                let added = log.add_all_from_template(&day_key(day), &template.exercises)?;
                println!(
                    "Added {} exercise(s) from the {} template ({}) to day {}.",
                    added.len(),
                    weekday,
                    template.focus,
                    day
                );
                Ok(CommandResult::success())
            }
        }
    }
}

fn render_entry(entry: &ExerciseEntry) -> String {
    let mut line = format!("{}  {}", style(&entry.id).dim(), entry.name);

    let mut details = Vec::new();
    if !entry.sets.is_empty() || !entry.reps.is_empty() {
        details.push(format!("{} x {}", entry.sets, entry.reps));
    }
    if !entry.weight.is_empty() {
        details.push(format!("@ {}", entry.weight));
    }
    if !entry.notes.is_empty() {
        details.push(entry.notes.clone());
    }

    if !details.is_empty() {
        line.push_str(&format!(" ({})", details.join(", ")));
    }
    line
}
