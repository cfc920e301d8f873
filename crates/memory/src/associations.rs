//! Pairwise association and synthesis helpers.
//!
//! Neither function touches a store; callers decide whether to persist the
//! result with [`MemoryStore::store`](sitewright_core::memory::MemoryStore::store).

use chrono::Utc;
use sitewright_core::memory::Synthesis;
use std::fmt::Display;

/// Describe every unordered pair of `items`.
///
/// Pairs are visited in ascending `(i, j)` order with `i < j`, so `n` items
/// yield `n * (n - 1) / 2` strings and fewer than two items yield none.
pub fn create_associations<T: Display>(items: &[T]) -> Vec<String> {
    let mut associations = Vec::with_capacity(items.len() * items.len().saturating_sub(1) / 2);
    for (i, left) in items.iter().enumerate() {
        for (j, right) in items.iter().enumerate().skip(i + 1) {
            associations.push(format!("Linking item {i} ({left}) with item {j} ({right})"));
        }
    }
    associations
}

/// Combine `new_data` with `context` into a [`Synthesis`].
pub fn synthesize_information(new_data: &serde_json::Value, context: &serde_json::Value) -> Synthesis {
    let new_data = describe(new_data);
    let context = describe(context);

    Synthesis {
        synthesis: format!("Synthesized '{new_data}' within the context of '{context}'"),
        associations: create_associations(&[new_data, context]),
        timestamp: Utc::now(),
    }
}

/// Strings render bare; every other payload renders as JSON.
fn describe(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
