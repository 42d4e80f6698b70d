//! Key-addressed persistent store with change propagation.
//!
//! This module provides the storage substrate the tracker is built on:
//! a [`StorageMedium`] abstraction over the durable medium, the
//! [`PersistentStore`] that serializes values under string keys, a
//! [`ChangeBus`] delivering key-scoped notifications within one running
//! instance, and an external-change scanner that lets concurrently running
//! instances sharing the same medium converge.

pub mod bus;
pub mod medium;
pub mod scan;
pub mod store;

pub use bus::{ChangeBus, ListenerId};
pub use medium::{FileMedium, MemoryMedium, StorageMedium};
pub use store::PersistentStore;
