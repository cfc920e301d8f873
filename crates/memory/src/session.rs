//! Session registry: explicit lifecycle for per-session memory stores.
//!
//! Each session id maps to its own [`AssociativeMemory`]; nothing is shared
//! between sessions. Stores are created on `open` and disposed on `close`.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use sitewright_core::memory::MemoryStore;
use tracing::debug;

use crate::associative::AssociativeMemory;

#[derive(Default)]
pub struct SessionRegistry {
    sessions: Mutex<HashMap<String, Arc<AssociativeMemory>>>,
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the store for `session`, creating it on first use.
    pub fn open(&self, session: &str) -> Arc<AssociativeMemory> {
        let mut sessions = self.sessions.lock().unwrap_or_else(PoisonError::into_inner);
        sessions
            .entry(session.to_string())
            .or_insert_with(|| Arc::new(AssociativeMemory::open(session)))
            .clone()
    }

    /// Remove `session` from the registry and dispose of its store.
    ///
    /// Returns the number of nodes discarded, or `None` if the session was
    /// never opened. Handles still held by callers see an empty store, and
    /// the registry will hand out a fresh store next time.
    pub fn close(&self, session: &str) -> Option<usize> {
        let store = self
            .sessions
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(session)?;

        match Arc::try_unwrap(store) {
            Ok(store) => Some(store.close()),
            Err(shared) => {
                let discarded = shared.len();
                shared.clear();
                debug!(session, discarded, "Session closed while handles are still live");
                Some(discarded)
            }
        }
    }

    /// Open session ids, sorted.
    pub fn sessions(&self) -> Vec<String> {
        let sessions = self.sessions.lock().unwrap_or_else(PoisonError::into_inner);
        let mut ids: Vec<String> = sessions.keys().cloned().collect();
        ids.sort();
        ids
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn sessions_are_isolated() {
        let registry = SessionRegistry::new();
        registry.open("alice").store("tone", json!("bold"));
        registry.open("bob").store("tone", json!("minimalist"));

        assert_eq!(registry.open("alice").retrieve("tone").unwrap().value, json!("bold"));
        assert_eq!(registry.open("bob").retrieve("tone").unwrap().value, json!("minimalist"));
        assert_eq!(registry.sessions(), vec!["alice", "bob"]);
    }

    #[test]
    fn open_returns_same_store() {
        let registry = SessionRegistry::new();
        let first = registry.open("s1");
        let second = registry.open("s1");
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn close_disposes_and_reopen_is_fresh() {
        let registry = SessionRegistry::new();
        registry.open("s1").store("k", json!(1));

        assert_eq!(registry.close("s1"), Some(1));
        assert!(registry.sessions().is_empty());
        assert!(registry.open("s1").retrieve("k").is_none());
    }

    #[test]
    fn close_unknown_session_is_none() {
        let registry = SessionRegistry::new();
        assert_eq!(registry.close("ghost"), None);
    }

    #[test]
    fn close_with_live_handle_disposes_state() {
        let registry = SessionRegistry::new();
        let handle = registry.open("s1");
        handle.store("k", json!(1));

        assert_eq!(registry.close("s1"), Some(1));
        assert!(registry.open("s1").is_empty());
        assert!(handle.is_empty());
        assert!(handle.retrieve("k").is_none());
    }
}
