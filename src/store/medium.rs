//! Durable medium abstraction.
//!
//! This module defines the [`StorageMedium`] trait over the shared durable
//! medium, plus the two implementations: [`FileMedium`] for production
//! (one file per key, atomic writes) and [`MemoryMedium`] for tests.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::error::Result;

/// Abstraction over the durable medium shared by running instances.
///
/// Implementations hold serialized slot text under string keys. Everything
/// above this trait (mirroring, notification, fingerprinting) lives in
/// [`PersistentStore`](super::PersistentStore), so swapping the medium never
/// changes store semantics.
pub trait StorageMedium: Send + Sync {
    /// Read the serialized text for a key, or `None` if the slot is absent.
    fn read(&self, key: &str) -> Result<Option<String>>;

    /// Write serialized text under a key.
    fn write(&self, key: &str, text: &str) -> Result<()>;
}

/// File-backed medium: one `<key>.json` file per slot under a data directory.
pub struct FileMedium {
    dir: PathBuf,
}

impl FileMedium {
    /// Create a medium rooted at the given data directory.
    ///
    /// The directory is created lazily on first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Default data directory: `~/.gauntlet`.
    pub fn default_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("~"))
            .join(".gauntlet")
    }

    /// Get the data directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn slot_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl StorageMedium for FileMedium {
    fn read(&self, key: &str) -> Result<Option<String>> {
        let path = self.slot_path(key);
        if !path.exists() {
            return Ok(None);
        }
        Ok(Some(fs::read_to_string(&path)?))
    }

    /// Write using the write-to-temp-then-rename pattern so a slot file is
    /// never left partially written if the process dies mid-write.
    fn write(&self, key: &str, text: &str) -> Result<()> {
        fs::create_dir_all(&self.dir)?;

        let path = self.slot_path(key);
        let temp_path = path.with_extension("json.tmp");
        fs::write(&temp_path, text)?;
        fs::rename(&temp_path, &path)?;

        Ok(())
    }
}

/// In-memory medium for tests: a mutex-guarded key/text map.
///
/// Implements the same contract as [`FileMedium`] so tests can substitute it
/// without touching the filesystem.
#[derive(Default)]
pub struct MemoryMedium {
    slots: Mutex<HashMap<String, String>>,
}

impl MemoryMedium {
    /// Create an empty in-memory medium.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys currently held.
    pub fn len(&self) -> usize {
        self.slots.lock().expect("medium lock poisoned").len()
    }

    /// Whether the medium holds no keys.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl StorageMedium for MemoryMedium {
    fn read(&self, key: &str) -> Result<Option<String>> {
        Ok(self
            .slots
            .lock()
            .expect("medium lock poisoned")
            .get(key)
            .cloned())
    }

    fn write(&self, key: &str, text: &str) -> Result<()> {
        self.slots
            .lock()
            .expect("medium lock poisoned")
            .insert(key.to_string(), text.to_string());
        Ok(())
    }
}
