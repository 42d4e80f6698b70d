//! The day-indexed exercise log.

use std::collections::HashMap;
use std::sync::Arc;

use super::entry::{ExerciseDraft, ExerciseEntry};
use super::parse::split_sets_reps;
use crate::error::Result;
use crate::store::PersistentStore;
use crate::template::TemplateExercise;

/// Persisted slot key for the whole log.
pub const WORKOUTS_KEY: &str = "workouts";

/// The persisted slot shape: day key to ordered entry list.
type WorkoutsSlot = HashMap<String, Vec<ExerciseEntry>>;

/// Derive the slot key for a challenge day.
pub fn day_key(day: u32) -> String {
    format!("day-{}", day)
}

/// Append/delete exercise log bound to one store slot.
///
/// Insertion order within a day is significant and preserved; there is no
/// reorder and no in-place edit (an edit is a delete plus an add).
pub struct WorkoutLog {
    store: Arc<PersistentStore>,
}

impl WorkoutLog {
    /// Bind the log to a store.
    pub fn new(store: Arc<PersistentStore>) -> Self {
        Self { store }
    }

    /// Entries logged for a day, in insertion order.
    pub fn entries(&self, day_key: &str) -> Vec<ExerciseEntry> {
        let mut slot: WorkoutsSlot = self.store.get(WORKOUTS_KEY, HashMap::new());
        slot.remove(day_key).unwrap_or_default()
    }

    /// Append a drafted exercise to a day.
    ///
    /// Drafts without a name are rejected as a silent no-op (`None`); a
    /// nameless row is a guard condition, not a fault. On success the stored
    /// entry, with its freshly assigned id, is returned.
    pub fn add_exercise(&self, day_key: &str, draft: ExerciseDraft) -> Result<Option<ExerciseEntry>> {
        if draft.name.trim().is_empty() {
            tracing::debug!(day_key, "ignoring exercise draft without a name");
            return Ok(None);
        }

        let entry = ExerciseEntry::from_draft(draft);
        let stored = entry.clone();
        let key = day_key.to_string();

        self.store.update(WORKOUTS_KEY, WorkoutsSlot::new(), move |mut slot| {
            slot.entry(key).or_default().push(entry);
            slot
        })?;

        Ok(Some(stored))
    }

    /// Delete the entry with the given id from a day.
    ///
    /// Unknown ids are a no-op; returns whether an entry was removed.
    pub fn delete_exercise(&self, day_key: &str, id: &str) -> Result<bool> {
        let mut removed = false;
        let key = day_key.to_string();
        let target = id.to_string();

        self.store.update(WORKOUTS_KEY, WorkoutsSlot::new(), |mut slot| {
            if let Some(entries) = slot.get_mut(&key) {
                let before = entries.len();
                entries.retain(|e| e.id != target);
                removed = entries.len() != before;
            }
            slot
        })?;

        if !removed {
            tracing::debug!(day_key, id, "no matching exercise to delete");
        }
        Ok(removed)
    }

    /// Bulk-append entries derived from catalog reference rows.
    ///
    /// Each row's combined prescription text is split into sets/reps on a
    /// best-effort basis; a row that does not match the pattern lands with
    /// empty fields rather than failing the batch. Returns the stored
    /// entries.
    pub fn add_all_from_template(
        &self,
        day_key: &str,
        templates: &[TemplateExercise],
    ) -> Result<Vec<ExerciseEntry>> {
        let entries: Vec<ExerciseEntry> = templates
            .iter()
            .filter(|t| !t.name.trim().is_empty())
            .map(|t| {
                let (sets, reps) = split_sets_reps(&t.sets_reps);
                ExerciseEntry::from_draft(ExerciseDraft {
                    name: t.name.clone(),
                    sets,
                    reps,
                    ..Default::default()
                })
            })
            .collect();

        if entries.is_empty() {
            return Ok(entries);
        }

        let stored = entries.clone();
        let key = day_key.to_string();
        self.store.update(WORKOUTS_KEY, WorkoutsSlot::new(), move |mut slot| {
            slot.entry(key).or_default().extend(entries);
            slot
        })?;

        Ok(stored)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{MemoryMedium, StorageMedium};

    fn log() -> WorkoutLog {
        let medium: Arc<dyn StorageMedium> = Arc::new(MemoryMedium::new());
        WorkoutLog::new(Arc::new(PersistentStore::new(medium)))
    }

    fn squat_draft() -> ExerciseDraft {
        ExerciseDraft {
            name: "Squat".into(),
            weight: "135".into(),
            sets: "4".into(),
            reps: "8".into(),
            ..Default::default()
        }
    }

    #[test]
    fn day_key_format() {
        assert_eq!(day_key(1), "day-1");
        assert_eq!(day_key(75), "day-75");
    }

    #[test]
    fn add_then_delete_leaves_day_empty() {
        let log = log();

        let entry = log.add_exercise("day-3", squat_draft()).unwrap().unwrap();
        assert_eq!(log.entries("day-3").len(), 1);

        assert!(log.delete_exercise("day-3", &entry.id).unwrap());
        assert!(log.entries("day-3").is_empty());
    }

    #[test]
    fn add_with_empty_name_is_noop() {
        let log = log();

        let result = log
            .add_exercise("day-1", ExerciseDraft::default())
            .unwrap();

        assert!(result.is_none());
        assert!(log.entries("day-1").is_empty());
    }

    #[test]
    fn add_with_blank_name_is_noop() {
        let log = log();

        let result = log
            .add_exercise(
                "day-1",
                ExerciseDraft {
                    name: "   ".into(),
                    ..Default::default()
                },
            )
            .unwrap();

        assert!(result.is_none());
    }

    #[test]
    fn delete_unknown_id_is_noop() {
        let log = log();
        log.add_exercise("day-1", squat_draft()).unwrap();

        assert!(!log.delete_exercise("day-1", "ex_0_deadbeef").unwrap());
        assert_eq!(log.entries("day-1").len(), 1);
    }

    #[test]
    fn delete_on_unknown_day_is_noop() {
        let log = log();
        assert!(!log.delete_exercise("day-9", "ex_0_deadbeef").unwrap());
    }

    #[test]
    fn insertion_order_is_preserved() {
        let log = log();

        for name in ["A", "B", "C"] {
            log.add_exercise(
                "day-2",
                ExerciseDraft {
                    name: name.into(),
                    ..Default::default()
                },
            )
            .unwrap();
        }

        let names: Vec<String> = log.entries("day-2").into_iter().map(|e| e.name).collect();
        assert_eq!(names, vec!["A", "B", "C"]);
    }

    #[test]
    fn days_are_independent() {
        let log = log();

        log.add_exercise("day-1", squat_draft()).unwrap();

        assert!(log.entries("day-2").is_empty());
        assert_eq!(log.entries("day-1").len(), 1);
    }

    #[test]
    fn template_bulk_add_splits_prescriptions() {
        let log = log();
        let templates = vec![
            TemplateExercise {
                name: "Plank".into(),
                sets_reps: "3 x 45 sec".into(),
            },
            TemplateExercise {
                name: "Pull-ups".into(),
                sets_reps: "1 x Max".into(),
            },
        ];

        let added = log.add_all_from_template("day-1", &templates).unwrap();

        assert_eq!(added.len(), 2);
        let entries = log.entries("day-1");
        assert_eq!(entries[0].sets, "3");
        assert_eq!(entries[0].reps, "45 sec");
        assert_eq!(entries[1].sets, "1");
        assert_eq!(entries[1].reps, "Max");
    }

    #[test]
    fn template_bulk_add_tolerates_unparseable_rows() {
        let log = log();
        let templates = vec![
            TemplateExercise {
                name: "Run".into(),
                sets_reps: "easy pace".into(),
            },
            TemplateExercise {
                name: "Squat".into(),
                sets_reps: "5 x 5".into(),
            },
        ];

        let added = log.add_all_from_template("day-4", &templates).unwrap();

        assert_eq!(added.len(), 2);
        assert!(added[0].sets.is_empty());
        assert!(added[0].reps.is_empty());
        assert_eq!(added[1].sets, "5");
    }

    #[test]
    fn template_bulk_add_appends_after_existing_entries() {
        let log = log();
        log.add_exercise("day-1", squat_draft()).unwrap();

        log.add_all_from_template(
            "day-1",
            &[TemplateExercise {
                name: "Plank".into(),
                sets_reps: "3 x 60 sec".into(),
            }],
        )
        .unwrap();

        let names: Vec<String> = log.entries("day-1").into_iter().map(|e| e.name).collect();
        assert_eq!(names, vec!["Squat", "Plank"]);
    }
}
