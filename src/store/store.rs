//! The key-addressed persistent store.
//!
//! [`PersistentStore`] round-trips serde values through a textual (JSON)
//! serialization under string keys, keeps an in-memory mirror convergent
//! with the durable medium, and fires key-scoped notifications on every
//! successful write. Reads degrade to a caller-supplied default on absent or
//! corrupt slots and never write that default back.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use serde::de::DeserializeOwned;
use serde::Serialize;

use super::bus::{ChangeBus, ListenerId};
use super::medium::StorageMedium;
use super::scan::ExternalScanner;
use crate::error::{GauntletError, Result};

/// Durable key/value store with change propagation.
///
/// One instance per running copy of the app. The store owns the durable
/// medium; domain state holders read and write exclusively through it and
/// converge via its notifications.
pub struct PersistentStore {
    medium: Arc<dyn StorageMedium>,
    bus: ChangeBus,
    /// Last-known serialized text per key, kept in lockstep with the medium.
    mirror: Mutex<HashMap<String, String>>,
    scanner: ExternalScanner,
    /// Per-key critical sections serializing read-modify-write cycles.
    key_locks: Mutex<HashMap<String, Arc<Mutex<()>>>>,
}

impl PersistentStore {
    /// Create a store over the given durable medium.
    pub fn new(medium: Arc<dyn StorageMedium>) -> Self {
        Self {
            medium,
            bus: ChangeBus::new(),
            mirror: Mutex::new(HashMap::new()),
            scanner: ExternalScanner::new(),
            key_locks: Mutex::new(HashMap::new()),
        }
    }

    /// Read the value stored under `key`, or `default` if the slot is absent
    /// or its content fails to parse.
    ///
    /// A failed read is a pure fallback: nothing is written back.
    pub fn get<T: DeserializeOwned>(&self, key: &str, default: T) -> T {
        let text = {
            let mirror = self.mirror.lock().expect("mirror lock poisoned");
            mirror.get(key).cloned()
        };

        let text = match text {
            Some(t) => Some(t),
            None => match self.medium.read(key) {
                Ok(Some(t)) => {
                    self.mirror
                        .lock()
                        .expect("mirror lock poisoned")
                        .insert(key.to_string(), t.clone());
                    self.scanner.record(key, Some(&t));
                    Some(t)
                }
                Ok(None) => {
                    self.scanner.record(key, None);
                    None
                }
                Err(e) => {
                    tracing::warn!(key, error = %e, "failed to read slot; using default");
                    None
                }
            },
        };

        match text {
            Some(t) => serde_json::from_str(&t).unwrap_or_else(|e| {
                tracing::warn!(key, error = %e, "failed to parse slot; using default");
                default
            }),
            None => default,
        }
    }

    /// Replace the value stored under `key`.
    ///
    /// Serialization failure aborts the write and leaves both the medium and
    /// the mirror untouched; the error is a diagnostic, never fatal.
    pub fn set<T: Serialize>(&self, key: &str, value: &T) -> Result<()> {
        let text = encode(key, value)?;

        let lock = self.key_lock(key);
        let guard = lock.lock().expect("key lock poisoned");
        self.write_and_mirror(key, &text)?;
        drop(guard);

        self.bus.notify(key);
        Ok(())
    }

    /// Apply a pure function to the freshest persisted value under `key`.
    ///
    /// This is the updater form of `set`: the read-modify-write cycle runs
    /// under a per-key critical section and re-reads the medium rather than
    /// the mirror, so concurrent updaters within this instance never lose a
    /// write to a stale snapshot.
    pub fn update<T, F>(&self, key: &str, default: T, f: F) -> Result<()>
    where
        T: DeserializeOwned + Serialize,
        F: FnOnce(T) -> T,
    {
        let lock = self.key_lock(key);
        let guard = lock.lock().expect("key lock poisoned");

        let prev: T = match self.medium.read(key) {
            Ok(Some(text)) => serde_json::from_str(&text).unwrap_or_else(|e| {
                tracing::warn!(key, error = %e, "failed to parse slot; updating from default");
                default
            }),
            Ok(None) => default,
            Err(e) => {
                tracing::warn!(key, error = %e, "failed to read slot; updating from default");
                default
            }
        };

        let text = encode(key, &f(prev))?;
        self.write_and_mirror(key, &text)?;
        drop(guard);

        self.bus.notify(key);
        Ok(())
    }

    /// Write pre-encoded slot text. Used when several slots must be encoded
    /// up front before any of them is written.
    pub(crate) fn set_encoded(&self, key: &str, text: &str) -> Result<()> {
        let lock = self.key_lock(key);
        let guard = lock.lock().expect("key lock poisoned");
        self.write_and_mirror(key, text)?;
        drop(guard);

        self.bus.notify(key);
        Ok(())
    }

    /// Register a listener for changes to `key`, from writes in this
    /// instance as well as external changes picked up by [`scan_external`].
    ///
    /// Subscribing starts tracking the key, so a later scan reports only
    /// changes made after this point.
    ///
    /// [`scan_external`]: PersistentStore::scan_external
    pub fn subscribe(&self, key: &str, listener: impl Fn(&str) + Send + Sync + 'static) -> ListenerId {
        if !self.scanner.tracked_keys().iter().any(|k| k.as_str() == key) {
            match self.medium.read(key) {
                Ok(text) => self.scanner.record(key, text.as_deref()),
                Err(e) => {
                    tracing::warn!(key, error = %e, "failed to seed change tracking");
                }
            }
        }
        self.bus.subscribe(key, listener)
    }

    /// Remove a previously registered listener.
    pub fn unsubscribe(&self, id: ListenerId) {
        self.bus.unsubscribe(id);
    }

    /// Re-read every tracked key from the durable medium and converge on
    /// changes written by other running instances.
    ///
    /// Changed slots refresh the mirror and notify subscribers exactly like
    /// a local write. Returns the keys that changed. The embedding surface
    /// decides the cadence; the store never spawns background workers.
    pub fn scan_external(&self) -> Vec<String> {
        let mut changed = Vec::new();

        for key in self.scanner.tracked_keys() {
            let text = match self.medium.read(&key) {
                Ok(t) => t,
                Err(e) => {
                    tracing::warn!(key = %key, error = %e, "failed to scan slot; skipping");
                    continue;
                }
            };

            if self.scanner.observe(&key, text.as_deref()) {
                let mut mirror = self.mirror.lock().expect("mirror lock poisoned");
                match text {
                    Some(t) => {
                        mirror.insert(key.clone(), t);
                    }
                    None => {
                        mirror.remove(&key);
                    }
                }
                drop(mirror);
                changed.push(key);
            }
        }

        for key in &changed {
            tracing::debug!(key = %key, "external change detected");
            self.bus.notify(key);
        }

        changed
    }

    fn key_lock(&self, key: &str) -> Arc<Mutex<()>> {
        let mut locks = self.key_locks.lock().expect("key locks poisoned");
        Arc::clone(locks.entry(key.to_string()).or_default())
    }

    fn write_and_mirror(&self, key: &str, text: &str) -> Result<()> {
        self.medium.write(key, text)?;
        self.mirror
            .lock()
            .expect("mirror lock poisoned")
            .insert(key.to_string(), text.to_string());
        self.scanner.record(key, Some(text));
        tracing::debug!(key, bytes = text.len(), "slot written");
        Ok(())
    }
}

fn encode<T: Serialize>(key: &str, value: &T) -> Result<String> {
    serde_json::to_string(value).map_err(|e| GauntletError::SlotEncode {
        key: key.to_string(),
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::medium::MemoryMedium;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn memory_store() -> (Arc<MemoryMedium>, PersistentStore) {
        let medium = Arc::new(MemoryMedium::new());
        let store = PersistentStore::new(Arc::clone(&medium) as Arc<dyn StorageMedium>);
        (medium, store)
    }

    #[test]
    fn set_then_get_round_trips() {
        let (_, store) = memory_store();

        store.set("completedDays", &vec![1u32, 2, 3]).unwrap();

        let days: Vec<u32> = store.get("completedDays", Vec::new());
        assert_eq!(days, vec![1, 2, 3]);
    }

    #[test]
    fn get_missing_returns_default_without_write() {
        let (medium, store) = memory_store();

        let value: HashMap<String, u32> =
            store.get("missingKey", HashMap::from([("a".to_string(), 1)]));

        assert_eq!(value.get("a"), Some(&1));
        assert!(medium.is_empty());
    }

    #[test]
    fn get_corrupt_returns_default_without_write_back() {
        let (medium, store) = memory_store();
        medium.write("currentDayNumber", "not a number").unwrap();

        let day: u32 = store.get("currentDayNumber", 1);

        assert_eq!(day, 1);
        // The corrupt text must not have been replaced by the default
        assert_eq!(
            medium.read("currentDayNumber").unwrap().as_deref(),
            Some("not a number")
        );
    }

    #[test]
    fn set_notifies_key_subscribers() {
        let (_, store) = memory_store();
        let hits = Arc::new(AtomicUsize::new(0));

        let h = Arc::clone(&hits);
        store.subscribe("todayTasks", move |_| {
            h.fetch_add(1, Ordering::SeqCst);
        });

        store.set("todayTasks", &HashMap::from([("diet", true)])).unwrap();
        store.set("currentDayNumber", &2u32).unwrap();

        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn unsubscribe_stops_notifications() {
        let (_, store) = memory_store();
        let hits = Arc::new(AtomicUsize::new(0));

        let h = Arc::clone(&hits);
        let id = store.subscribe("k", move |_| {
            h.fetch_add(1, Ordering::SeqCst);
        });
        store.set("k", &1u32).unwrap();
        store.unsubscribe(id);
        store.set("k", &2u32).unwrap();

        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn update_applies_function_to_previous_value() {
        let (_, store) = memory_store();

        store.set("currentDayNumber", &4u32).unwrap();
        store.update("currentDayNumber", 1u32, |d| d + 1).unwrap();

        assert_eq!(store.get::<u32>("currentDayNumber", 1), 5);
    }

    #[test]
    fn update_absent_slot_starts_from_default() {
        let (_, store) = memory_store();

        store
            .update("completedDays", Vec::<u32>::new(), |mut days| {
                days.push(1);
                days
            })
            .unwrap();

        assert_eq!(store.get::<Vec<u32>>("completedDays", Vec::new()), vec![1]);
    }

    #[test]
    fn update_reads_freshest_persisted_value() {
        let (medium, store) = memory_store();

        store.set("currentDayNumber", &1u32).unwrap();
        // Another writer lands on the medium behind the mirror's back
        medium.write("currentDayNumber", "7").unwrap();

        store.update("currentDayNumber", 1u32, |d| d + 1).unwrap();

        assert_eq!(store.get::<u32>("currentDayNumber", 1), 8);
    }

    #[test]
    fn encode_failure_aborts_write_and_preserves_state() {
        let (medium, store) = memory_store();
        store.set("k", &1u32).unwrap();

        // Maps with non-string keys are not representable in JSON
        let bad: HashMap<(u8, u8), u8> = HashMap::from([((1, 2), 3)]);
        let err = store.set("k", &bad).unwrap_err();

        assert!(matches!(err, GauntletError::SlotEncode { .. }));
        assert_eq!(medium.read("k").unwrap().as_deref(), Some("1"));
        assert_eq!(store.get::<u32>("k", 0), 1);
    }

    #[test]
    fn scan_external_converges_second_instance() {
        let medium = Arc::new(MemoryMedium::new());
        let store_a = PersistentStore::new(Arc::clone(&medium) as Arc<dyn StorageMedium>);
        let store_b = PersistentStore::new(Arc::clone(&medium) as Arc<dyn StorageMedium>);

        store_a.set("currentDayNumber", &1u32).unwrap();
        assert_eq!(store_b.get::<u32>("currentDayNumber", 1), 1);

        store_a.set("currentDayNumber", &2u32).unwrap();

        // Before the scan, instance B still holds its mirror
        assert_eq!(store_b.get::<u32>("currentDayNumber", 1), 1);

        let changed = store_b.scan_external();
        assert_eq!(changed, vec!["currentDayNumber".to_string()]);
        assert_eq!(store_b.get::<u32>("currentDayNumber", 1), 2);
    }

    #[test]
    fn scan_external_notifies_subscribers() {
        let medium = Arc::new(MemoryMedium::new());
        let store_a = PersistentStore::new(Arc::clone(&medium) as Arc<dyn StorageMedium>);
        let store_b = PersistentStore::new(Arc::clone(&medium) as Arc<dyn StorageMedium>);

        let hits = Arc::new(AtomicUsize::new(0));
        let h = Arc::clone(&hits);
        store_b.subscribe("workouts", move |_| {
            h.fetch_add(1, Ordering::SeqCst);
        });

        store_a.set("workouts", &HashMap::from([("day-1", Vec::<u32>::new())])).unwrap();
        store_b.scan_external();

        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn scan_external_without_changes_reports_nothing() {
        let (_, store) = memory_store();
        store.set("k", &1u32).unwrap();

        assert!(store.scan_external().is_empty());
    }

    #[test]
    fn own_writes_do_not_show_up_as_external_changes() {
        let (_, store) = memory_store();

        store.set("k", &1u32).unwrap();
        store.update("k", 0u32, |v| v + 1).unwrap();

        assert!(store.scan_external().is_empty());
    }
}
