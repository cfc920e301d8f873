//! Associative memory: a session-scoped key/value store.
//!
//! One node per key, last write wins. The store is shared through `Arc` and
//! guarded by a `std::sync::RwLock`; no operation suspends.

use chrono::Utc;
use sitewright_core::memory::{MemoryNode, MemoryStore};
use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};
use tracing::{debug, info};

/// An in-process store of [`MemoryNode`]s owned by a single session.
pub struct AssociativeMemory {
    session: String,
    nodes: RwLock<HashMap<String, MemoryNode>>,
}

impl AssociativeMemory {
    /// Open an empty store for `session`.
    pub fn open(session: impl Into<String>) -> Self {
        let session = session.into();
        debug!(session = %session, "Associative memory opened");
        Self {
            session,
            nodes: RwLock::new(HashMap::new()),
        }
    }

    pub fn session(&self) -> &str {
        &self.session
    }

    /// Dispose of the store, returning how many nodes were discarded.
    pub fn close(self) -> usize {
        let discarded = self.len();
        info!(session = %self.session, discarded, "Associative memory closed");
        discarded
    }
}

impl MemoryStore for AssociativeMemory {
    fn name(&self) -> &str {
        "associative"
    }

    fn store(&self, key: &str, value: serde_json::Value) {
        let mut nodes = self.nodes.write().unwrap_or_else(PoisonError::into_inner);

        // Wall clocks can step backwards; a rewrite never predates the node it replaces.
        let mut timestamp = Utc::now();
        if let Some(previous) = nodes.get(key) {
            timestamp = timestamp.max(previous.timestamp);
        }

        let replaced = nodes
            .insert(
                key.to_string(),
                MemoryNode {
                    key: key.to_string(),
                    value,
                    timestamp,
                },
            )
            .is_some();

        debug!(session = %self.session, key, replaced, "Memory node stored");
    }

    fn retrieve(&self, key: &str) -> Option<MemoryNode> {
        let nodes = self.nodes.read().unwrap_or_else(PoisonError::into_inner);
        nodes.get(key).cloned()
    }

    fn len(&self) -> usize {
        self.nodes.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    fn keys(&self) -> Vec<String> {
        let nodes = self.nodes.read().unwrap_or_else(PoisonError::into_inner);
        let mut keys: Vec<String> = nodes.keys().cloned().collect();
        keys.sort();
        keys
    }

    fn clear(&self) {
        self.nodes
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::sync::Arc;

    #[test]
    fn store_and_retrieve() {
        let mem = AssociativeMemory::open("test");
        mem.store("project", json!({"name": "villa portal"}));

        let node = mem.retrieve("project").unwrap();
        assert_eq!(node.key, "project");
        assert_eq!(node.value["name"], "villa portal");
    }

    #[test]
    fn miss_is_none() {
        let mem = AssociativeMemory::open("test");
        assert!(mem.retrieve("never-written").is_none());
    }

    #[test]
    fn last_write_wins() {
        let mem = AssociativeMemory::open("test");
        mem.store("palette", json!("corporate"));
        let first = mem.retrieve("palette").unwrap();

        mem.store("palette", json!("vibrant"));
        let second = mem.retrieve("palette").unwrap();

        assert_eq!(second.value, json!("vibrant"));
        assert!(second.timestamp >= first.timestamp);
        assert_eq!(mem.len(), 1);
    }

    #[test]
    fn keys_are_sorted() {
        let mem = AssociativeMemory::open("test");
        mem.store("zeta", json!(1));
        mem.store("alpha", json!(2));
        assert_eq!(mem.keys(), vec!["alpha", "zeta"]);
    }

    #[test]
    fn clear_empties_store() {
        let mem = AssociativeMemory::open("test");
        mem.store("a", json!(1));
        mem.store("b", json!(2));
        assert!(!mem.is_empty());

        mem.clear();
        assert!(mem.is_empty());
    }

    #[test]
    fn close_reports_discarded_nodes() {
        let mem = AssociativeMemory::open("test");
        mem.store("a", json!(1));
        mem.store("b", json!(2));
        assert_eq!(mem.close(), 2);
    }

    #[test]
    fn concurrent_writers_leave_one_node() {
        let mem = Arc::new(AssociativeMemory::open("test"));
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let mem = Arc::clone(&mem);
                std::thread::spawn(move || mem.store("shared", json!(i)))
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(mem.len(), 1);
        let value = mem.retrieve("shared").unwrap().value;
        assert!((0..8).any(|i| value == json!(i)));
    }
}
