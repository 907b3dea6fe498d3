use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Structural shape an executor's output is expected to take.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputType {
    Json,
    Text,
    List,
}

/// A single expectation registered against a prompt id.
///
/// Lengths are counted in characters. A bound of `0` is treated as unset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestCase {
    pub input_data: String,
    pub expected_output_type: OutputType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected_keywords: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_length: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_length: Option<usize>,
    /// Free-form rules carried for callers; the rubric does not read them.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validation_rules: Option<Value>,
}

impl TestCase {
    pub fn new(input_data: impl Into<String>, expected_output_type: OutputType) -> Self {
        Self {
            input_data: input_data.into(),
            expected_output_type,
            expected_keywords: None,
            min_length: None,
            max_length: None,
            validation_rules: None,
        }
    }

    pub fn with_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.expected_keywords = Some(keywords.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_min_length(mut self, min: usize) -> Self {
        self.min_length = Some(min);
        self
    }

    pub fn with_max_length(mut self, max: usize) -> Self {
        self.max_length = Some(max);
        self
    }

    pub fn min_bound(&self) -> Option<usize> {
        self.min_length.filter(|&n| n > 0)
    }

    pub fn max_bound(&self) -> Option<usize> {
        self.max_length.filter(|&n| n > 0)
    }
}
