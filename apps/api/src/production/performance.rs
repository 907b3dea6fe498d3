//! Performance: wall-clock latency of sequential executor calls.
//!
//! Score: `max(0, 100 - avg_seconds * 10)`, so a 10 s average scores 0.
//! Pass: average below 5 s, independent of the score.

use serde::{Deserialize, Serialize};
use tokio::time::Instant;
use tracing::{debug, warn};

use crate::models::test_case::TestCase;
use crate::production::executor::Executor;
use crate::production::stats::{mean, median, round2, std_dev};
use crate::production::HarnessError;

pub const DEFAULT_ITERATIONS: usize = 10;
pub const MAX_AVG_SECONDS: f64 = 5.0;
const PENALTY_PER_SECOND: f64 = 10.0;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PerformanceReport {
    pub test_type: String,
    pub prompt_id: String,
    pub iterations: usize,
    pub avg_execution_time: f64, // seconds
    pub median_execution_time: f64,
    pub std_deviation: f64,
    pub min_time: f64,
    pub max_time: f64,
    pub performance_score: f64, // 0 – 100
    pub passed: bool,
}

pub async fn run(
    prompt_id: &str,
    test_case: &TestCase,
    executor: &dyn Executor,
    iterations: usize,
) -> Result<PerformanceReport, HarnessError> {
    if iterations == 0 {
        return Err(HarnessError::NoSamples("Performance"));
    }

    let mut timings = Vec::new();

    for iteration in 0..iterations {
        let start = Instant::now();
        executor.execute(&test_case.input_data).await.map_err(|e| {
            warn!(prompt_id, iteration, error = %e, "Performance run failed, aborting test");
            HarnessError::Performance(e)
        })?;
        timings.push(start.elapsed().as_secs_f64());
    }

    let avg = mean(&timings);
    let min = timings.iter().copied().fold(f64::INFINITY, f64::min);
    let max = timings.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    debug!(prompt_id, iterations, avg_seconds = avg, "Performance test complete");

    Ok(PerformanceReport {
        test_type: "performance".to_string(),
        prompt_id: prompt_id.to_string(),
        iterations,
        avg_execution_time: round2(avg),
        median_execution_time: round2(median(&timings)),
        std_deviation: round2(std_dev(&timings)),
        min_time: round2(min),
        max_time: round2(max),
        performance_score: round2(latency_score(avg)),
        passed: avg < MAX_AVG_SECONDS,
    })
}

pub fn latency_score(avg_seconds: f64) -> f64 {
    (100.0 - avg_seconds * PENALTY_PER_SECOND).clamp(0.0, 100.0)
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    use async_trait::async_trait;

    use super::*;
    use crate::models::test_case::OutputType;
    use crate::production::executor::{ExecutorError, FnExecutor};

    /// Sleeps for a scripted delay per call; the paused test clock makes the
    /// measured latency exact.
    struct SleepyExecutor {
        delays_ms: Vec<u64>,
        calls: AtomicUsize,
    }

    #[async_trait]
    impl Executor for SleepyExecutor {
        async fn execute(&self, _input: &str) -> Result<String, ExecutorError> {
            let i = self.calls.fetch_add(1, Ordering::SeqCst);
            let delay = self.delays_ms[i % self.delays_ms.len()];
            tokio::time::sleep(Duration::from_millis(delay)).await;
            Ok("done".to_string())
        }
    }

    fn case() -> TestCase {
        TestCase::new("ping", OutputType::Text)
    }

    #[tokio::test(start_paused = true)]
    async fn test_latency_statistics() {
        let exec = SleepyExecutor {
            delays_ms: vec![1000, 2000, 3000, 4000],
            calls: AtomicUsize::new(0),
        };
        let report = run("p", &case(), &exec, 4).await.unwrap();
        assert_eq!(report.avg_execution_time, 2.5);
        assert_eq!(report.median_execution_time, 2.5);
        assert_eq!(report.min_time, 1.0);
        assert_eq!(report.max_time, 4.0);
        assert_eq!(report.std_deviation, 1.29);
        assert_eq!(report.performance_score, 75.0);
        assert!(report.passed);
    }

    #[tokio::test(start_paused = true)]
    async fn test_slow_average_fails_regardless_of_score() {
        let exec = SleepyExecutor {
            delays_ms: vec![6000],
            calls: AtomicUsize::new(0),
        };
        let report = run("p", &case(), &exec, 3).await.unwrap();
        assert_eq!(report.performance_score, 40.0);
        assert!(!report.passed);
    }

    #[tokio::test]
    async fn test_failure_aborts_without_partial_stats() {
        let exec = FnExecutor::new(|_: &str| Err(ExecutorError::new("503")));
        let err = run("p", &case(), &exec, 10).await.unwrap_err();
        assert_eq!(err.to_string(), "Performance test failed: 503");
    }

    #[tokio::test]
    async fn test_huge_iteration_count_does_not_preallocate() {
        let calls = AtomicUsize::new(0);
        let exec = FnExecutor::new(move |_: &str| {
            if calls.fetch_add(1, Ordering::SeqCst) == 1 {
                Err(ExecutorError::new("stop"))
            } else {
                Ok("done".to_string())
            }
        });
        let err = run("p", &case(), &exec, 1 << 42).await.unwrap_err();
        assert!(matches!(err, HarnessError::Performance(_)));
    }

    #[tokio::test]
    async fn test_zero_iterations_is_rejected() {
        let exec = FnExecutor::new(|_: &str| Ok(String::new()));
        assert!(matches!(
            run("p", &case(), &exec, 0).await,
            Err(HarnessError::NoSamples(_))
        ));
    }

    #[test]
    fn test_latency_score_bounds() {
        assert_eq!(latency_score(0.0), 100.0);
        assert_eq!(latency_score(10.0), 0.0);
        assert_eq!(latency_score(25.0), 0.0);
    }
}
