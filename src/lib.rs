//! Gauntlet - local-first 75-day challenge tracker.
//!
//! Gauntlet tracks a sequential 75-day challenge: daily task completion, day
//! progression, and a day-indexed exercise log. All state lives in a
//! key-addressed durable store on the local machine; concurrently running
//! instances sharing the same store converge through key-scoped change
//! notifications.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`challenge`] - Day progression and daily task state machine
//! - [`error`] - Error types and result aliases
//! - [`store`] - Key-addressed persistent store with change propagation
//! - [`template`] - Read-only weekly reference schedule
//! - [`workout`] - Day-indexed exercise log
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use gauntlet::challenge::{ChallengeState, TaskId};
//! use gauntlet::store::{MemoryMedium, PersistentStore};
//!
//! let store = Arc::new(PersistentStore::new(Arc::new(MemoryMedium::new())));
//! let challenge = ChallengeState::new(store);
//! challenge.toggle_task(TaskId::Reading).unwrap();
//! assert_eq!(challenge.current_day(), 1);
//! ```

pub mod challenge;
pub mod cli;
pub mod error;
pub mod store;
pub mod template;
pub mod workout;

pub use error::{GauntletError, Result};
