//! Pipeline coordinator: composes the stages into a single plan.
//!
//! # Architecture
//!
//! ```text
//! Request text
//!       │
//!       ▼
//! ┌─────────────┐
//! │ Classifier  │  ← text → SemanticIntent
//! └──┬──────┬───┘
//!    │      │
//!    ▼      ▼
//! ┌──────┐ ┌──────────┐
//! │Reason│ │Knowledge │  ← both consult the intent
//! └──┬───┘ └────┬─────┘
//!    └────┬─────┘
//!         ▼
//!   ExecutionPlan
//! ```

use std::sync::Arc;

use sitewright_config::PipelineConfig;
use sitewright_core::intent::{Category, Classifier, SemanticIntent, Tone};
use sitewright_core::plan::{ExecutionPlan, PipelineResult};
use sitewright_core::text::preview;
use tracing::{debug, info};

use crate::classifier::KeywordClassifier;
use crate::knowledge::KnowledgeBase;
use crate::reasoning::ReasoningEngine;

/// Template used when the category could not be determined.
pub const FALLBACK_TEMPLATE: &str = "landing_page";
/// The only layout currently produced.
pub const LAYOUT_TYPE: &str = "grid-system";

/// Runs classify → reason → recommend → plan for each request.
pub struct PipelineCoordinator {
    /// Intent extraction strategy.
    classifier: Arc<dyn Classifier>,
    reasoning: ReasoningEngine,
    knowledge: KnowledgeBase,
    /// Characters of input text included in the request log.
    preview_chars: usize,
}

impl PipelineCoordinator {
    /// Create a coordinator around the given classifier.
    pub fn new(classifier: Arc<dyn Classifier>) -> Self {
        Self {
            classifier,
            reasoning: ReasoningEngine::new(),
            knowledge: KnowledgeBase::new(),
            preview_chars: PipelineConfig::default().preview_chars,
        }
    }

    /// Create a coordinator from configuration, using the keyword classifier.
    pub fn from_config(config: &PipelineConfig) -> Self {
        Self::new(Arc::new(KeywordClassifier::default())).with_preview_chars(config.preview_chars)
    }

    pub fn with_preview_chars(mut self, preview_chars: usize) -> Self {
        self.preview_chars = preview_chars;
        self
    }

    pub fn classifier(&self) -> &dyn Classifier {
        self.classifier.as_ref()
    }

    /// Process a free-text request into a complete plan.
    ///
    /// Never fails: every stage has a documented default.
    pub fn process_request(&self, text: &str) -> PipelineResult {
        info!(
            classifier = self.classifier.name(),
            input = %preview(text, self.preview_chars),
            "Processing site request"
        );

        let intent = self.classifier.classify(text);
        let reasoning = self.reasoning.reason(&intent);
        let recommendations = self.knowledge.recommend_for(intent.category);
        let execution_plan = build_plan(&intent, recommendations.clone());

        debug!(
            template = %execution_plan.template,
            palette = %execution_plan.color_palette,
            confidence = reasoning.confidence,
            "Execution plan assembled"
        );

        PipelineResult {
            intent,
            reasoning,
            recommendations,
            execution_plan,
        }
    }
}

impl Default for PipelineCoordinator {
    fn default() -> Self {
        Self::new(Arc::new(KeywordClassifier::default()))
    }
}

fn build_plan(intent: &SemanticIntent, components: Vec<String>) -> ExecutionPlan {
    let template = match intent.category {
        Category::Unknown => FALLBACK_TEMPLATE.to_string(),
        other => other.as_str().to_string(),
    };
    let color_palette = if intent.tone == Tone::Bold {
        "vibrant"
    } else {
        "corporate"
    };

    ExecutionPlan {
        template,
        color_palette: color_palette.to_string(),
        layout_type: LAYOUT_TYPE.to_string(),
        suggested_components: components,
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────
