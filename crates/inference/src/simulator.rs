//! Inference simulator: a stand-in for a local compute stage.
//!
//! A run decodes its tokens for the log, suspends on the injected clock for
//! the configured latency, and resolves with a success report. There is no
//! failure path: decoding is lossy, so every token sequence is accepted.

use std::sync::Arc;
use std::time::Duration;

use sitewright_config::InferenceConfig;
use sitewright_core::clock::Clock;
use sitewright_core::inference::InferenceReport;
use sitewright_core::text::preview;
use tracing::{debug, info};

use crate::clock::TokioClock;
use crate::tokenizer::{detokenize, tokenize};

pub struct InferenceSimulator {
    clock: Arc<dyn Clock>,
    latency: Duration,
    compute_unit: String,
    preview_chars: usize,
}

impl InferenceSimulator {
    /// Create a simulator on the given clock with default settings.
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self::from_config(clock, &InferenceConfig::default())
    }

    pub fn from_config(clock: Arc<dyn Clock>, config: &InferenceConfig) -> Self {
        Self {
            clock,
            latency: Duration::from_millis(config.latency_ms),
            compute_unit: config.compute_unit.clone(),
            preview_chars: config.preview_chars,
        }
    }

    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    pub fn latency(&self) -> Duration {
        self.latency
    }

    /// Simulate inference over `tokens`.
    pub async fn run(&self, tokens: &[u32]) -> InferenceReport {
        let decoded = detokenize(tokens);
        info!(
            tokens = tokens.len(),
            input = %preview(&decoded, self.preview_chars),
            compute_unit = %self.compute_unit,
            "Running inference"
        );

        self.clock.sleep(self.latency).await;

        debug!(tokens = tokens.len(), "Inference complete");
        InferenceReport::success(tokens.len(), self.compute_unit.clone())
    }

    /// Tokenize `text` and run inference over it.
    pub async fn run_text(&self, text: &str) -> InferenceReport {
        self.run(&tokenize(text)).await
    }
}

impl Default for InferenceSimulator {
    fn default() -> Self {
        Self::new(Arc::new(TokioClock))
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────
