use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Characters of executor output kept on a probe result.
pub const OUTPUT_PREVIEW_CHARS: usize = 100;

/// Outcome of one individual probe. Built through `handled` or `failed` so
/// that a result carrying an error is never marked as passed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationResult {
    pub test_id: String,
    pub passed: bool,
    pub score: f64, // 0 – 100
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actual_output: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub timestamp: DateTime<Utc>,
}

impl ValidationResult {
    pub fn handled(
        test_id: impl Into<String>,
        score: f64,
        message: impl Into<String>,
        output: &str,
    ) -> Self {
        Self {
            test_id: test_id.into(),
            passed: true,
            score: score.clamp(0.0, 100.0),
            message: message.into(),
            actual_output: (!output.is_empty()).then(|| preview(output)),
            error: None,
            timestamp: Utc::now(),
        }
    }

    pub fn failed(
        test_id: impl Into<String>,
        message: impl Into<String>,
        error: impl Into<String>,
    ) -> Self {
        Self {
            test_id: test_id.into(),
            passed: false,
            score: 0.0,
            message: message.into(),
            actual_output: None,
            error: Some(error.into()),
            timestamp: Utc::now(),
        }
    }
}

fn preview(output: &str) -> String {
    output.chars().take(OUTPUT_PREVIEW_CHARS).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failed_result_never_passes() {
        let r = ValidationResult::failed("p_edge_1", "Edge case failed: empty", "boom");
        assert!(!r.passed);
        assert_eq!(r.score, 0.0);
        assert_eq!(r.error.as_deref(), Some("boom"));
        assert!(r.actual_output.is_none());
    }

    #[test]
    fn test_handled_output_is_truncated_on_char_boundary() {
        let long = "é".repeat(250);
        let r = ValidationResult::handled("id", 100.0, "ok", &long);
        assert_eq!(r.actual_output.unwrap().chars().count(), OUTPUT_PREVIEW_CHARS);
    }

    #[test]
    fn test_handled_empty_output_has_no_preview() {
        let r = ValidationResult::handled("id", 0.0, "ok", "");
        assert!(r.passed);
        assert!(r.actual_output.is_none());
    }

    #[test]
    fn test_timestamp_serializes_as_iso8601() {
        let r = ValidationResult::handled("id", 100.0, "ok", "out");
        let json = serde_json::to_value(&r).unwrap();
        let ts = json["timestamp"].as_str().unwrap();
        assert!(DateTime::parse_from_rfc3339(ts).is_ok(), "bad timestamp {ts}");
        assert!(json.get("error").is_none());
    }
}
