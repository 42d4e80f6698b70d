//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results. Commands are
//! routed by [`CommandDispatcher`], construct their own store binding from
//! the resolved data directory, and print directly to stdout.

pub mod complete;
pub mod completions;
pub mod dispatcher;
pub mod display;
pub mod log;
pub mod reset;
pub mod schedule;
pub mod status;
pub mod toggle;

use std::path::Path;
use std::sync::Arc;

use crate::store::{FileMedium, PersistentStore};

pub use dispatcher::{Command, CommandDispatcher, CommandResult};

/// Open the persistent store over the file medium at `data_dir`.
pub(crate) fn open_store(data_dir: &Path) -> Arc<PersistentStore> {
    Arc::new(PersistentStore::new(Arc::new(FileMedium::new(data_dir))))
}
