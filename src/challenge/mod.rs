//! Day progression and daily task state machine.
//!
//! This module owns the three challenge slots (day counter, completed-day
//! ledger, today's task set) and enforces the progression invariants: the
//! day counter never decreases, the ledger only grows, and the two stay
//! contiguous: every day below the current one is completed exactly once.

pub mod state;
pub mod tasks;

pub use state::{ChallengeState, TOTAL_DAYS, WEEKDAY_NAMES};
pub use tasks::{DailyTasks, TaskId};
