//! Consistency: the same input run N times; outputs are scored with the
//! rubric and their length spread is turned into a 0–1 consistency metric.
//!
//! Any failing run aborts the test.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::models::test_case::TestCase;
use crate::production::executor::Executor;
use crate::production::rubric::score_output;
use crate::production::stats::{mean, round2, std_dev};
use crate::production::HarnessError;

pub const DEFAULT_RUNS: usize = 5;
pub const MIN_CONSISTENCY: f64 = 0.7;
pub const MAX_SCORE_STD_DEV: f64 = 10.0;
const SAMPLE_OUTPUTS: usize = 3;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConsistencyReport {
    pub test_type: String,
    pub prompt_id: String,
    pub num_runs: usize,
    pub average_score: f64,   // 0 – 100
    pub std_deviation: f64,   // of rubric scores
    pub consistency_score: f64, // 0 – 1
    pub passed: bool,
    pub outputs: Vec<String>, // first three
}

/// Runs `test_case.input_data` through the executor `runs` times.
pub async fn run(
    prompt_id: &str,
    test_case: &TestCase,
    executor: &dyn Executor,
    runs: usize,
) -> Result<ConsistencyReport, HarnessError> {
    if runs == 0 {
        return Err(HarnessError::NoSamples("Consistency"));
    }

    let mut outputs = Vec::new();
    let mut scores = Vec::new();

    for attempt in 0..runs {
        let output = executor
            .execute(&test_case.input_data)
            .await
            .map_err(|e| {
                warn!(prompt_id, attempt, error = %e, "Consistency run failed, aborting test");
                HarnessError::Execution(e)
            })?;
        scores.push(score_output(&output, test_case));
        outputs.push(output);
    }

    let consistency = length_consistency(&outputs);
    let average_score = mean(&scores);
    let score_std_dev = std_dev(&scores);
    let passed = consistency >= MIN_CONSISTENCY && score_std_dev <= MAX_SCORE_STD_DEV;

    debug!(
        prompt_id,
        runs, average_score, consistency, passed, "Consistency test complete"
    );

    outputs.truncate(SAMPLE_OUTPUTS);

    Ok(ConsistencyReport {
        test_type: "consistency".to_string(),
        prompt_id: prompt_id.to_string(),
        num_runs: runs,
        average_score: round2(average_score),
        std_deviation: round2(score_std_dev),
        consistency_score: round2(consistency),
        passed,
        outputs,
    })
}

/// `max(0, 1 - stddev(lengths) / max(mean(lengths), 1))`; a single output is
/// perfectly consistent.
pub fn length_consistency(outputs: &[String]) -> f64 {
    if outputs.len() < 2 {
        return 1.0;
    }
    let lengths: Vec<f64> = outputs.iter().map(|o| o.chars().count() as f64).collect();
    (1.0 - std_dev(&lengths) / mean(&lengths).max(1.0)).clamp(0.0, 1.0)
}
