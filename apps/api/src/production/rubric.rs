//! Output rubric: additive 0–100 score of one executor output against a test case.
//!
//! | Signal | Points |
//! |---|---|
//! | output shape matches `expected_output_type` | 20 |
//! | fraction of `expected_keywords` present (case-insensitive) | up to 30 |
//! | `min_length` set and met | 25 |
//! | `max_length` set and met, or neither bound set | 25 |

use crate::models::test_case::{OutputType, TestCase};

const TYPE_POINTS: f64 = 20.0;
const KEYWORD_POINTS: f64 = 30.0;
const LENGTH_POINTS: f64 = 25.0;
const MAX_SCORE: f64 = 100.0;

pub fn score_output(output: &str, test_case: &TestCase) -> f64 {
    let mut score = 0.0;

    if type_matches(output, test_case.expected_output_type) {
        score += TYPE_POINTS;
    }

    if let Some(keywords) = test_case.expected_keywords.as_deref() {
        if !keywords.is_empty() {
            let output_lower = output.to_lowercase();
            let found = keywords
                .iter()
                .filter(|k| output_lower.contains(&k.to_lowercase()))
                .count();
            score += found as f64 / keywords.len() as f64 * KEYWORD_POINTS;
        }
    }

    let length = output.chars().count();
    let min = test_case.min_bound();
    let max = test_case.max_bound();

    if min.is_some_and(|m| length >= m) {
        score += LENGTH_POINTS;
    }
    match max {
        Some(m) if length <= m => score += LENGTH_POINTS,
        Some(_) => {}
        // No length constraint at all: the max slot is credited, the min slot is not.
        None if min.is_none() => score += LENGTH_POINTS,
        None => {}
    }

    score.min(MAX_SCORE)
}

fn type_matches(output: &str, expected: OutputType) -> bool {
    match expected {
        OutputType::Json => output.trim().starts_with('{'),
        OutputType::List => output.contains('[') || output.contains('-'),
        OutputType::Text => true,
    }
}
