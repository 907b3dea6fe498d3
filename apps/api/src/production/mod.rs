// Production readiness harness.
// Implements: consistency, robustness, edge-case and performance testers plus
// the aggregator that turns them into a deploy verdict.
// Every executor call is awaited sequentially; latency figures depend on it.

pub mod consistency;
pub mod edge_cases;
pub mod edge_probe;
pub mod executor;
pub mod handlers;
pub mod performance;
pub mod robustness;
pub mod rubric;
pub mod stats;
pub mod validator;

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use thiserror::Error;

pub use executor::{Executor, ExecutorError};
pub use validator::{ProductionReport, ProductionValidator, ValidateOptions};

/// Why a whole sub-test could not produce a result.
///
/// Serialises as `{"error": "<message>"}` so it can sit in a report as data.
#[derive(Debug, Clone, Error)]
pub enum HarnessError {
    #[error("No test cases found for prompt {0}")]
    MissingTestCase(String),

    #[error("Error running prompt: {0}")]
    Execution(ExecutorError),

    #[error("Performance test failed: {0}")]
    Performance(ExecutorError),

    #[error("{0} test needs at least one run")]
    NoSamples(&'static str),
}

impl Serialize for HarnessError {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry("error", &self.to_string())?;
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_harness_error_serializes_as_error_only_report() {
        let err = HarnessError::MissingTestCase("welcome_email".to_string());
        assert_eq!(
            serde_json::to_value(&err).unwrap(),
            json!({"error": "No test cases found for prompt welcome_email"})
        );
    }

    #[test]
    fn test_execution_error_message() {
        let err = HarnessError::Execution(ExecutorError::new("timeout"));
        assert_eq!(err.to_string(), "Error running prompt: timeout");
    }
}
