//! Memory trait: keyed retention across pipeline calls.
//!
//! A memory store holds at most one [`MemoryNode`] per key. Writing an
//! existing key replaces the node and its timestamp (last write wins, no
//! history). A miss is `None`, never an error.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single keyed value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemoryNode {
    /// Unique within its store
    pub key: String,

    /// Arbitrary payload
    pub value: serde_json::Value,

    /// When this node was last written
    pub timestamp: DateTime<Utc>,
}

/// The result of combining new data with existing context.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Synthesis {
    /// Description embedding both inputs
    pub synthesis: String,

    /// Pairwise links between the inputs
    pub associations: Vec<String>,

    pub timestamp: DateTime<Utc>,
}

/// The core MemoryStore trait.
///
/// All operations are synchronous; none of them suspend.
pub trait MemoryStore: Send + Sync {
    /// The store name (e.g., "associative").
    fn name(&self) -> &str;

    /// Insert or replace the node for `key`.
    fn store(&self, key: &str, value: serde_json::Value);

    /// Look up the node for `key`.
    fn retrieve(&self, key: &str) -> Option<MemoryNode>;

    /// Number of stored nodes.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// All keys, sorted.
    fn keys(&self) -> Vec<String>;

    /// Drop every node.
    fn clear(&self);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_node_serialization() {
        let node = MemoryNode {
            key: "last_plan".into(),
            value: serde_json::json!({"template": "ecommerce"}),
            timestamp: Utc::now(),
        };
        let json = serde_json::to_string(&node).unwrap();
        assert!(json.contains("last_plan"));
        assert!(json.contains("ecommerce"));

        let back: MemoryNode = serde_json::from_str(&json).unwrap();
        assert_eq!(back, node);
    }
}
