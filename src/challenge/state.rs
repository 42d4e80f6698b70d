//! Challenge progression state machine.

use std::collections::BTreeSet;
use std::sync::Arc;

use chrono::{Datelike, Local};

use super::tasks::{DailyTasks, TaskId};
use crate::error::Result;
use crate::store::PersistentStore;

/// Length of the challenge. Progress percentages are computed against this,
/// but nothing stops the day counter from advancing past it.
pub const TOTAL_DAYS: u32 = 75;

/// Weekday names in Monday-first order, matching catalog schedule keys.
pub const WEEKDAY_NAMES: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// Persisted slot key for the current day counter.
pub const DAY_KEY: &str = "currentDayNumber";
/// Persisted slot key for the completed-day ledger.
pub const LEDGER_KEY: &str = "completedDays";
/// Persisted slot key for today's task set.
pub const TASKS_KEY: &str = "todayTasks";

/// Day progression and daily task state, bound to three store slots.
///
/// Holds no state of its own beyond the injected store reference; every read
/// goes through the store so concurrently running instances converge via the
/// store's notifications.
pub struct ChallengeState {
    store: Arc<PersistentStore>,
}

impl ChallengeState {
    /// Bind challenge state to a store.
    pub fn new(store: Arc<PersistentStore>) -> Self {
        Self { store }
    }

    /// The day currently being worked on, starting at 1.
    pub fn current_day(&self) -> u32 {
        self.store.get(DAY_KEY, 1)
    }

    /// The set of completed day numbers.
    pub fn completed_days(&self) -> BTreeSet<u32> {
        self.store.get(LEDGER_KEY, BTreeSet::new())
    }

    /// Today's task checklist.
    pub fn tasks(&self) -> DailyTasks {
        self.store.get(TASKS_KEY, DailyTasks::default())
    }

    /// Flip one daily task. Self-inverse.
    pub fn toggle_task(&self, task: TaskId) -> Result<()> {
        self.store.update(TASKS_KEY, DailyTasks::default(), |mut tasks| {
            tasks.toggle(task);
            tasks
        })
    }

    /// Mark the current day complete and advance the day counter.
    ///
    /// A no-op returning `false` if the current day is already in the
    /// ledger, which guards accidental re-invocation. The task set is
    /// intentionally carried forward unreset.
    ///
    /// The new day counter is written as a literal value rather than an
    /// increment, so two instances racing on the same stale day converge on
    /// the same result: the day appears in the ledger once (set semantics)
    /// and both write the identical next day number.
    pub fn complete_day(&self) -> Result<bool> {
        let day = self.current_day();

        if self.completed_days().contains(&day) {
            tracing::debug!(day, "day already recorded as completed; ignoring");
            return Ok(false);
        }

        self.store.update(LEDGER_KEY, BTreeSet::new(), |mut days: BTreeSet<u32>| {
            days.insert(day);
            days
        })?;
        self.store.set(DAY_KEY, &(day + 1))?;

        tracing::debug!(completed = day, next = day + 1, "day completed");
        Ok(true)
    }

    /// Overall challenge progress: `floor(completed / 75 * 100)`.
    ///
    /// Deliberately unclamped; a ledger grown past 75 entries reports more
    /// than 100.
    pub fn progress_percentage(&self) -> u32 {
        (self.completed_days().len() as u32 * 100) / TOTAL_DAYS
    }

    /// Today's checklist progress: `floor(done / 9 * 100)`.
    pub fn tasks_completed_percentage(&self) -> u32 {
        (self.tasks().completed_count() as u32 * 100) / DailyTasks::TOTAL as u32
    }

    /// Real-world weekday name for challenge day `n`.
    ///
    /// Computed by offsetting today's weekday by `(n - currentDay) mod 7`.
    /// No calendar date is stored per day; the mapping is always relative to
    /// now, so it is periodic with period 7 and is today's weekday exactly
    /// when `n` is the current day.
    pub fn weekday_for_day(&self, n: u32) -> &'static str {
        let today = Local::now().weekday().num_days_from_monday() as usize;
        WEEKDAY_NAMES[weekday_index(n, self.current_day(), today)]
    }

    /// Irreversibly clear all three owned slots back to their defaults.
    ///
    /// Every slot's payload is encoded before the first write, so an
    /// unrepresentable value can never leave the reset half-applied. The
    /// workout log is owned elsewhere and survives.
    pub fn reset_all(&self) -> Result<()> {
        let payloads = [
            (DAY_KEY, encode_slot(DAY_KEY, &1u32)?),
            (LEDGER_KEY, encode_slot(LEDGER_KEY, &BTreeSet::<u32>::new())?),
            (TASKS_KEY, encode_slot(TASKS_KEY, &DailyTasks::default())?),
        ];

        for (key, text) in payloads {
            self.store.set_encoded(key, &text)?;
        }

        tracing::debug!("challenge state reset to defaults");
        Ok(())
    }
}

fn encode_slot<T: serde::Serialize>(key: &str, value: &T) -> Result<String> {
    serde_json::to_string(value).map_err(|e| crate::error::GauntletError::SlotEncode {
        key: key.to_string(),
        message: e.to_string(),
    })
}

/// Index into [`WEEKDAY_NAMES`] for challenge day `n`, given the current day
/// and today's Monday-based weekday index.
fn weekday_index(n: u32, current_day: u32, today: usize) -> usize {
    let offset = (n as i64 - current_day as i64).rem_euclid(7) as usize;
    (today + offset) % 7
}
