//! Robustness: every catalog input is sent through the executor and scored
//! with the registered test case's rubric. A failing call only fails its own
//! case; the remaining cases still run.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::models::test_case::TestCase;
use crate::production::edge_cases::{classify, EdgeCaseCategory};
use crate::production::executor::Executor;
use crate::production::rubric::score_output;
use crate::production::stats::round2;

/// Per-case pass bar.
pub const CASE_PASS_SCORE: f64 = 50.0;
/// Share of cases that must pass for the test to pass.
pub const MIN_PASS_RATIO: f64 = 0.7;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EdgeCaseOutcome {
    pub input_type: EdgeCaseCategory,
    pub passed: bool,
    pub score: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RobustnessReport {
    pub test_type: String,
    pub prompt_id: String,
    pub robustness_score: f64, // 0 – 100
    pub passed_edge_cases: String, // "passed/total"
    pub passed: bool,
    pub edge_case_results: Vec<EdgeCaseOutcome>,
}

pub async fn run(
    prompt_id: &str,
    test_case: &TestCase,
    executor: &dyn Executor,
    edge_cases: &[String],
) -> RobustnessReport {
    let mut results = Vec::with_capacity(edge_cases.len());
    let mut passed_count = 0usize;

    for case in edge_cases {
        let input_type = classify(case);
        let outcome = match executor.execute(case).await {
            Ok(output) => {
                let score = score_output(&output, test_case);
                let passed = score >= CASE_PASS_SCORE;
                if passed {
                    passed_count += 1;
                }
                EdgeCaseOutcome {
                    input_type,
                    passed,
                    score: round2(score),
                    error: None,
                }
            }
            Err(e) => {
                warn!(prompt_id, %input_type, error = %e, "Edge case execution failed");
                EdgeCaseOutcome {
                    input_type,
                    passed: false,
                    score: 0.0,
                    error: Some(e.to_string()),
                }
            }
        };
        results.push(outcome);
    }

    let total = edge_cases.len();
    let ratio = if total > 0 {
        passed_count as f64 / total as f64
    } else {
        0.0
    };

    debug!(prompt_id, passed_count, total, "Robustness test complete");

    RobustnessReport {
        test_type: "robustness".to_string(),
        prompt_id: prompt_id.to_string(),
        robustness_score: round2(ratio * 100.0),
        passed_edge_cases: format!("{passed_count}/{total}"),
        passed: ratio >= MIN_PASS_RATIO,
        edge_case_results: results,
    }
}
