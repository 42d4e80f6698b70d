//! Key-scoped change notifications within one running instance.
//!
//! The [`ChangeBus`] is the same-context half of change propagation: every
//! successful store write notifies the listeners subscribed to that key, so
//! independent bindings to one slot converge without sharing a reference.
//! Cross-context propagation is handled by the external-change scanner.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

type Listener = Arc<dyn Fn(&str) + Send + Sync>;

/// Handle identifying a registered listener, used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

#[derive(Default)]
struct BusInner {
    next_id: u64,
    listeners: HashMap<String, Vec<(ListenerId, Listener)>>,
}

/// Synchronous publish/subscribe bus scoped by slot key.
#[derive(Default)]
pub struct ChangeBus {
    inner: Mutex<BusInner>,
}

impl ChangeBus {
    /// Create an empty bus.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener for changes to `key`.
    pub fn subscribe(&self, key: &str, listener: impl Fn(&str) + Send + Sync + 'static) -> ListenerId {
        let mut inner = self.inner.lock().expect("bus lock poisoned");
        let id = ListenerId(inner.next_id);
        inner.next_id += 1;
        inner
            .listeners
            .entry(key.to_string())
            .or_default()
            .push((id, Arc::new(listener)));
        id
    }

    /// Remove a previously registered listener. Unknown ids are a no-op.
    pub fn unsubscribe(&self, id: ListenerId) {
        let mut inner = self.inner.lock().expect("bus lock poisoned");
        for list in inner.listeners.values_mut() {
            list.retain(|(lid, _)| *lid != id);
        }
    }

    /// Deliver a change notification for `key` to its listeners.
    ///
    /// Listeners run synchronously, outside the bus lock, so a listener may
    /// re-enter the store (e.g. to re-read the slot) without deadlocking.
    pub fn notify(&self, key: &str) {
        let to_call: Vec<Listener> = {
            let inner = self.inner.lock().expect("bus lock poisoned");
            inner
                .listeners
                .get(key)
                .map(|list| list.iter().map(|(_, l)| Arc::clone(l)).collect())
                .unwrap_or_default()
        };

        for listener in to_call {
            listener(key);
        }
    }

    /// Keys that currently have at least one listener.
    pub fn subscribed_keys(&self) -> Vec<String> {
        let inner = self.inner.lock().expect("bus lock poisoned");
        inner
            .listeners
            .iter()
            .filter(|(_, list)| !list.is_empty())
            .map(|(key, _)| key.clone())
            .collect()
    }
}
