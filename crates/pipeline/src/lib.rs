//! The planning pipeline: the heart of Sitewright.
//!
//! A request flows through four stages:
//!
//! 1. **Classify** free text into a semantic intent (category, tone, features)
//! 2. **Reason** about the intent to produce an explanation chain
//! 3. **Recommend** building blocks from the knowledge base
//! 4. **Plan** by assembling the final execution plan
//!
//! Every stage is total, so the pipeline as a whole cannot fail.

pub mod classifier;
pub mod coordinator;
pub mod knowledge;
pub mod reasoning;

pub use classifier::{KeywordClassifier, KeywordTable};
pub use coordinator::PipelineCoordinator;
pub use knowledge::KnowledgeBase;
pub use reasoning::ReasoningEngine;
