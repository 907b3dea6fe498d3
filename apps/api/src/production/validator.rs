//! Production validator: test-case registry plus the aggregator that runs the
//! testers and turns their results into a readiness score and verdict.
//!
//! Aggregation rules:
//! - a sub-test that errors is left out of both the mean and the verdict
//! - consistency contributes two numbers to the mean: its average rubric
//!   score (0–100) and its consistency metric, taken as-is on its 0–1 scale
//! - ready = every reported pass flag is true AND mean >= 70

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::models::test_case::TestCase;
use crate::production::consistency::{self, ConsistencyReport, MAX_SCORE_STD_DEV};
use crate::production::edge_cases::catalog;
use crate::production::edge_probe::{self, EdgeCaseReport};
use crate::production::executor::Executor;
use crate::production::performance::{self, PerformanceReport, MAX_AVG_SECONDS};
use crate::production::robustness::{self, RobustnessReport};
use crate::production::stats::{mean, round2};
use crate::production::HarnessError;

pub const READY_SCORE: f64 = 70.0;
/// Upper bound on configured or requested run and iteration counts.
pub const MAX_RUNS: usize = 100;

/// Knobs for one `validate` call.
#[derive(Debug, Clone)]
pub struct ValidateOptions {
    pub include_edge_cases: bool,
    pub include_performance: bool,
    pub consistency_runs: usize,
    pub performance_iterations: usize,
}

impl Default for ValidateOptions {
    fn default() -> Self {
        Self {
            include_edge_cases: true,
            include_performance: true,
            consistency_runs: consistency::DEFAULT_RUNS,
            performance_iterations: performance::DEFAULT_ITERATIONS,
        }
    }
}

/// Sub-test reports that completed. Absent keys are skipped or errored tests.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TestResults {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub consistency: Option<ConsistencyReport>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub robustness: Option<RobustnessReport>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub edge_cases: Option<EdgeCaseReport>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub performance: Option<PerformanceReport>,
}

impl TestResults {
    /// Numbers folded into the readiness mean, in a fixed order.
    pub fn scores(&self) -> Vec<f64> {
        let mut scores = Vec::new();
        if let Some(c) = &self.consistency {
            scores.push(c.consistency_score);
            scores.push(c.average_score);
        }
        if let Some(r) = &self.robustness {
            scores.push(r.robustness_score);
        }
        if let Some(e) = &self.edge_cases {
            scores.push(e.passed_percentage);
        }
        if let Some(p) = &self.performance {
            scores.push(p.performance_score);
        }
        scores
    }

    /// True when every sub-test that carries a boolean pass flag passed.
    /// The edge-case probe is left out: it reports counts, not a pass flag.
    pub fn all_passed(&self) -> bool {
        self.consistency.as_ref().map_or(true, |c| c.passed)
            && self.robustness.as_ref().map_or(true, |r| r.passed)
            && self.performance.as_ref().map_or(true, |p| p.passed)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductionReport {
    pub prompt_id: String,
    pub production_ready_score: f64, // 0 – 100
    pub production_ready: bool,
    pub timestamp: DateTime<Utc>,
    pub test_results: TestResults,
    pub recommendations: Vec<String>,
}

/// Holds registered test cases and the edge-case catalog.
///
/// The registry is plain data with no internal locking; callers sharing one
/// validator across tasks serialise access themselves.
#[derive(Debug, Clone)]
pub struct ProductionValidator {
    test_cases: HashMap<String, Vec<TestCase>>,
    edge_cases: Vec<String>,
}

impl Default for ProductionValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl ProductionValidator {
    pub fn new() -> Self {
        Self {
            test_cases: HashMap::new(),
            edge_cases: catalog(),
        }
    }

    /// Registers a test case. Returns how many cases the prompt now has.
    pub fn add_test_case(&mut self, prompt_id: impl Into<String>, test_case: TestCase) -> usize {
        let cases = self.test_cases.entry(prompt_id.into()).or_default();
        cases.push(test_case);
        cases.len()
    }

    pub fn test_cases(&self, prompt_id: &str) -> Option<&[TestCase]> {
        self.test_cases.get(prompt_id).map(Vec::as_slice)
    }

    /// The first registered case; it alone drives scoring.
    fn primary_case(&self, prompt_id: &str) -> Result<&TestCase, HarnessError> {
        self.test_cases
            .get(prompt_id)
            .and_then(|cases| cases.first())
            .ok_or_else(|| HarnessError::MissingTestCase(prompt_id.to_string()))
    }

    pub async fn test_consistency(
        &self,
        prompt_id: &str,
        executor: &dyn Executor,
        runs: usize,
    ) -> Result<ConsistencyReport, HarnessError> {
        let case = self.primary_case(prompt_id)?;
        consistency::run(prompt_id, case, executor, runs).await
    }

    pub async fn test_robustness(
        &self,
        prompt_id: &str,
        executor: &dyn Executor,
    ) -> Result<RobustnessReport, HarnessError> {
        let case = self.primary_case(prompt_id)?;
        Ok(robustness::run(prompt_id, case, executor, &self.edge_cases).await)
    }

    /// Probes `custom_cases` when given and non-empty, else the catalog.
    pub async fn test_edge_cases(
        &self,
        prompt_id: &str,
        executor: &dyn Executor,
        custom_cases: Option<&[String]>,
    ) -> EdgeCaseReport {
        let cases = match custom_cases {
            Some(custom) if !custom.is_empty() => custom,
            _ => self.edge_cases.as_slice(),
        };
        edge_probe::run(prompt_id, executor, cases).await
    }

    pub async fn test_performance(
        &self,
        prompt_id: &str,
        executor: &dyn Executor,
        iterations: usize,
    ) -> Result<PerformanceReport, HarnessError> {
        let case = self.primary_case(prompt_id)?;
        performance::run(prompt_id, case, executor, iterations).await
    }

    /// Runs the full suite. Consistency and robustness always run; the edge
    /// probe and performance only when enabled in `options`.
    pub async fn validate(
        &self,
        prompt_id: &str,
        executor: &dyn Executor,
        options: &ValidateOptions,
    ) -> ProductionReport {
        let mut results = TestResults::default();

        results.consistency = keep(
            "consistency",
            self.test_consistency(prompt_id, executor, options.consistency_runs)
                .await,
        );
        results.robustness = keep("robustness", self.test_robustness(prompt_id, executor).await);

        if options.include_edge_cases {
            results.edge_cases = Some(self.test_edge_cases(prompt_id, executor, None).await);
        }
        if options.include_performance {
            results.performance = keep(
                "performance",
                self.test_performance(prompt_id, executor, options.performance_iterations)
                    .await,
            );
        }

        let score = mean(&results.scores());
        let all_passed = results.all_passed();
        let production_ready = all_passed && score >= READY_SCORE;
        let recommendations = build_recommendations(&results, score, all_passed);

        info!(
            prompt_id,
            score = round2(score),
            production_ready,
            "Production validation complete"
        );

        ProductionReport {
            prompt_id: prompt_id.to_string(),
            production_ready_score: round2(score),
            production_ready,
            timestamp: Utc::now(),
            test_results: results,
            recommendations,
        }
    }
}

fn keep<T>(test: &str, result: Result<T, HarnessError>) -> Option<T> {
    match result {
        Ok(report) => Some(report),
        Err(e) => {
            warn!(test, error = %e, "Sub-test excluded from readiness score");
            None
        }
    }
}

/// Threshold checks per sub-report, plus one blanket verdict line.
fn build_recommendations(results: &TestResults, score: f64, all_passed: bool) -> Vec<String> {
    let mut recommendations = Vec::new();

    if score < READY_SCORE {
        recommendations.push(
            "Production Not Ready: Score below 70%. Address critical issues before deployment."
                .to_string(),
        );
    }

    if let Some(c) = &results.consistency {
        if c.std_deviation > MAX_SCORE_STD_DEV {
            recommendations.push(
                "Consistency: High variance in outputs. Add more specific constraints.".to_string(),
            );
        }
    }

    if let Some(r) = &results.robustness {
        if r.robustness_score < READY_SCORE {
            recommendations.push(
                "Robustness: Prompt fails on edge cases. Add error handling and input validation."
                    .to_string(),
            );
        }
    }

    if let Some(p) = &results.performance {
        if p.avg_execution_time > MAX_AVG_SECONDS {
            recommendations.push(
                "Performance: Slow execution time. Consider optimizing prompt or reducing output length."
                    .to_string(),
            );
        }
    }

    if score >= READY_SCORE && all_passed {
        recommendations
            .push("Production Ready: All tests passed! Safe to deploy with monitoring.".to_string());
    }

    recommendations
}
