//! Execution plan: the final output of the pipeline.

use serde::{Deserialize, Serialize};

use crate::intent::SemanticIntent;
use crate::reasoning::ReasoningChain;

/// Structured site-generation plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutionPlan {
    /// Category name, or `"landing_page"` when the category is unknown.
    pub template: String,
    pub color_palette: String,
    pub layout_type: String,
    pub suggested_components: Vec<String>,
}

/// Everything a single pipeline invocation produces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PipelineResult {
    pub intent: SemanticIntent,
    pub reasoning: ReasoningChain,
    pub recommendations: Vec<String>,
    pub execution_plan: ExecutionPlan,
}
