//! External change detection via slot content fingerprints.
//!
//! Concurrently running instances share one durable medium but have no
//! common clock and no lock. Each instance remembers a short content hash
//! per slot it has touched; a scan re-reads the medium, compares hashes, and
//! reports the keys another instance has changed since this instance last
//! saw them.

use std::collections::HashMap;
use std::sync::Mutex;

use sha2::{Digest, Sha256};

/// Tracks last-seen slot fingerprints for one running instance.
#[derive(Default)]
pub(crate) struct ExternalScanner {
    /// Fingerprint per tracked key; `None` means the slot was absent.
    seen: Mutex<HashMap<String, Option<String>>>,
}

impl ExternalScanner {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Record the content this instance just read or wrote for `key`.
    pub(crate) fn record(&self, key: &str, text: Option<&str>) {
        self.seen
            .lock()
            .expect("scanner lock poisoned")
            .insert(key.to_string(), text.map(fingerprint));
    }

    /// Keys this instance is tracking.
    pub(crate) fn tracked_keys(&self) -> Vec<String> {
        self.seen
            .lock()
            .expect("scanner lock poisoned")
            .keys()
            .cloned()
            .collect()
    }

    /// Compare current content against the last-seen fingerprint for `key`,
    /// updating the record. Returns `true` if the content changed.
    pub(crate) fn observe(&self, key: &str, text: Option<&str>) -> bool {
        let current = text.map(fingerprint);
        let mut seen = self.seen.lock().expect("scanner lock poisoned");
        match seen.get(key) {
            Some(previous) if *previous == current => false,
            _ => {
                seen.insert(key.to_string(), current);
                true
            }
        }
    }
}

/// Short content hash: first 8 bytes of SHA256, hex-encoded.
fn fingerprint(text: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(text.as_bytes());
    let result = hasher.finalize();
    hex::encode(&result[..8])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fingerprint_is_stable() {
        assert_eq!(fingerprint("[1,2,3]"), fingerprint("[1,2,3]"));
    }

    #[test]
    fn fingerprint_differs_for_different_content() {
        assert_ne!(fingerprint("[1]"), fingerprint("[2]"));
    }

    #[test]
    fn observe_untracked_key_reports_change() {
        let scanner = ExternalScanner::new();
        assert!(scanner.observe("k", Some("1")));
    }

    #[test]
    fn observe_unchanged_content_reports_no_change() {
        let scanner = ExternalScanner::new();
        scanner.record("k", Some("1"));

        assert!(!scanner.observe("k", Some("1")));
    }

    #[test]
    fn observe_changed_content_reports_change_once() {
        let scanner = ExternalScanner::new();
        scanner.record("k", Some("1"));

        assert!(scanner.observe("k", Some("2")));
        assert!(!scanner.observe("k", Some("2")));
    }

    #[test]
    fn observe_detects_appearing_and_disappearing_slots() {
        let scanner = ExternalScanner::new();
        scanner.record("k", None);

        assert!(scanner.observe("k", Some("1")));
        assert!(scanner.observe("k", None));
    }

    #[test]
    fn tracked_keys_cover_recorded_slots() {
        let scanner = ExternalScanner::new();
        scanner.record("a", Some("1"));
        scanner.record("b", None);

        let mut keys = scanner.tracked_keys();
        keys.sort();

        assert_eq!(keys, vec!["a".to_string(), "b".to_string()]);
    }
}
