//! Reasoning chain: ordered explanation steps plus a confidence score.

use serde::{Deserialize, Serialize};

/// Confidence every chain starts from.
pub const BASELINE_CONFIDENCE: f64 = 0.85;

/// An ordered explanation derived from an intent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReasoningChain {
    /// Steps in derivation order. Append-only.
    pub steps: Vec<String>,
    pub conclusion: String,
    /// Always within `[0.0, 1.0]`.
    pub confidence: f64,
}

impl ReasoningChain {
    /// Start an empty chain at the baseline confidence.
    pub fn new() -> Self {
        Self {
            steps: Vec::new(),
            conclusion: String::new(),
            confidence: BASELINE_CONFIDENCE,
        }
    }

    pub fn push_step(&mut self, step: impl Into<String>) {
        self.steps.push(step.into());
    }

    pub fn conclude(&mut self, conclusion: impl Into<String>) {
        self.conclusion = conclusion.into();
    }

    /// Shift confidence by `delta`, clamped to `[0.0, 1.0]`.
    pub fn adjust_confidence(&mut self, delta: f64) {
        self.confidence = (self.confidence + delta).clamp(0.0, 1.0);
    }
}

impl Default for ReasoningChain {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_chain_starts_at_baseline() {
        let chain = ReasoningChain::new();
        assert!(chain.steps.is_empty());
        assert_eq!(chain.confidence, BASELINE_CONFIDENCE);
    }

    #[test]
    fn confidence_is_clamped() {
        let mut chain = ReasoningChain::new();
        chain.adjust_confidence(0.5);
        assert_eq!(chain.confidence, 1.0);
        chain.adjust_confidence(-3.0);
        assert_eq!(chain.confidence, 0.0);
    }

    #[test]
    fn steps_keep_order() {
        let mut chain = ReasoningChain::new();
        chain.push_step("first");
        chain.push_step("second");
        assert_eq!(chain.steps, vec!["first", "second"]);
    }
}
