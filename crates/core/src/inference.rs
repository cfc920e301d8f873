//! Inference report: the fixed-shape completion record of a simulated run.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InferenceStatus {
    Success,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InferenceReport {
    pub status: InferenceStatus,
    pub tokens_processed: usize,
    pub compute_unit: String,
    pub output_ready: bool,
}

impl InferenceReport {
    pub fn success(tokens_processed: usize, compute_unit: impl Into<String>) -> Self {
        Self {
            status: InferenceStatus::Success,
            tokens_processed,
            compute_unit: compute_unit.into(),
            output_ready: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_report_shape() {
        let report = InferenceReport::success(12, "local-cpu");
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "status": "success",
                "tokens_processed": 12,
                "compute_unit": "local-cpu",
                "output_ready": true
            })
        );
    }
}
