//! Day-indexed exercise log.
//!
//! Independent of the challenge state machine but built on the same store
//! primitive: one slot holding a map from `"day-<n>"` keys to ordered
//! exercise lists. Entries are appended and deleted, never edited in place.

pub mod entry;
pub mod log;
pub mod parse;

pub use entry::{ExerciseDraft, ExerciseEntry};
pub use log::{day_key, WorkoutLog, WORKOUTS_KEY};
pub use parse::{prefill_exercise, split_sets_reps};
