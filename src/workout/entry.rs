//! Logged exercise entries and their identifiers.

use chrono::Utc;
use serde::{Deserialize, Serialize};

/// One logged exercise.
///
/// Only `name` is required; the rest are free-form text fields that default
/// to empty on older persisted entries. Field names match the persisted
/// slot shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExerciseEntry {
    /// Identifier unique within the running instance's lifetime.
    ///
    /// Format: `ex_{timestamp_ms}_{random_hex}`. The random suffix keeps
    /// multiple adds within the same millisecond from colliding.
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub weight: String,
    #[serde(default)]
    pub sets: String,
    #[serde(default)]
    pub reps: String,
    #[serde(default)]
    pub notes: String,
}

/// Un-persisted exercise fields, as collected from an add form or CLI args.
///
/// A draft becomes an [`ExerciseEntry`] only when the log accepts it and
/// assigns an id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExerciseDraft {
    pub name: String,
    pub weight: String,
    pub sets: String,
    pub reps: String,
    pub notes: String,
}

impl ExerciseEntry {
    /// Materialize a draft into an entry with a fresh id.
    pub(crate) fn from_draft(draft: ExerciseDraft) -> Self {
        Self {
            id: new_entry_id(),
            name: draft.name,
            weight: draft.weight,
            sets: draft.sets,
            reps: draft.reps,
            notes: draft.notes,
        }
    }
}

fn new_entry_id() -> String {
    let mut random = [0u8; 4];
    getrandom::getrandom(&mut random).expect("Failed to generate random bytes");

    format!("ex_{}_{}", Utc::now().timestamp_millis(), hex::encode(random))
}
