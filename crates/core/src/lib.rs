//! # Sitewright Core
//!
//! Domain types, traits, and error definitions for the Sitewright planning
//! pipeline. This crate has **no runtime dependencies** beyond serde and
//! friends. It defines the domain model that all other crates implement against.
//!
//! ## Design Philosophy
//!
//! Every swappable stage is a trait here:
//! - [`Classifier`] turns free text into a [`SemanticIntent`]
//! - [`MemoryStore`] holds keyed [`MemoryNode`]s for one session
//! - [`ModelStore`] persists model documents outside the process
//! - [`Clock`] provides the suspension point for simulated inference
//!
//! Implementations live in their respective crates.

pub mod clock;
pub mod error;
pub mod inference;
pub mod intent;
pub mod memory;
pub mod model;
pub mod plan;
pub mod reasoning;
pub mod text;

// Re-export key types at crate root for ergonomics
pub use clock::Clock;
pub use error::{InferenceError, ModelStoreError};
pub use inference::{InferenceReport, InferenceStatus};
pub use intent::{Category, Classifier, SemanticIntent, Tone};
pub use memory::{MemoryNode, MemoryStore, Synthesis};
pub use model::ModelStore;
pub use plan::{ExecutionPlan, PipelineResult};
pub use reasoning::ReasoningChain;
