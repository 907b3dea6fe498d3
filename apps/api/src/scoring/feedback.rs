//! Grade bands plus the canned feedback and suggestion lines.
//!
//! Both are evaluated against the rounded breakdown that callers see.

use serde::{Deserialize, Serialize};

use crate::scoring::engine::DimensionScores;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Grade {
    #[serde(rename = "A+")]
    APlus,
    A,
    B,
    C,
    D,
    F,
}

impl Grade {
    /// Six fixed bands over the 0–100 overall score.
    pub fn from_score(score: f64) -> Self {
        match score {
            s if s >= 90.0 => Grade::APlus,
            s if s >= 80.0 => Grade::A,
            s if s >= 70.0 => Grade::B,
            s if s >= 60.0 => Grade::C,
            s if s >= 50.0 => Grade::D,
            _ => Grade::F,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Grade::APlus => "A+",
            Grade::A => "A",
            Grade::B => "B",
            Grade::C => "C",
            Grade::D => "D",
            Grade::F => "F",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Grade::APlus => "Excellent",
            Grade::A => "Very Good",
            Grade::B => "Good",
            Grade::C => "Needs Improvement",
            Grade::D => "Poor - Needs Major Revision",
            Grade::F => "Failed - Complete Revision Required",
        }
    }
}

impl std::fmt::Display for Grade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.label(), self.description())
    }
}

/// One improvement line per dimension below its own threshold.
pub fn generate_feedback(scores: &DimensionScores) -> Vec<String> {
    let checks: [(f64, f64, &str); 8] = [
        (
            scores.clarity,
            0.7,
            "Clarity: Use shorter, clearer sentences (optimal: 15-25 words per sentence)",
        ),
        (
            scores.specificity,
            0.7,
            "Specificity: Replace vague words ('good', 'nice') with concrete details",
        ),
        (
            scores.context,
            0.5,
            "Context: Add a clear role: 'You are a [specific role]...'",
        ),
        (
            scores.structure,
            0.6,
            "Structure: Organize your prompt with clear sections or numbered points",
        ),
        (
            scores.examples,
            0.5,
            "Examples: Include examples or format guidance: 'Like this: [example]'",
        ),
        (
            scores.audience,
            0.5,
            "Audience: Define your audience: 'for [specific group] who [specific situation]'",
        ),
        (
            scores.length,
            0.5,
            "Length: Specify output length: '200 words', '3 paragraphs', etc.",
        ),
        (
            scores.requirements,
            0.5,
            "Requirements: List specific requirements: 'Must include...', 'Should contain...'",
        ),
    ];

    let mut feedback: Vec<String> = checks
        .iter()
        .filter(|(score, threshold, _)| score < threshold)
        .map(|(_, _, message)| message.to_string())
        .collect();

    if feedback.is_empty() {
        feedback.push("Excellent! Your prompt follows best practices across all criteria.".to_string());
    }
    feedback
}

/// Priority-ordered suggestions. The structure tip needs clarity AND
/// structure to be weak at the same time.
pub fn generate_suggestions(scores: &DimensionScores, overall_score: f64) -> Vec<String> {
    let mut suggestions = Vec::new();

    if overall_score < 70.0 {
        suggestions.push(
            "Priority: Focus on clarity and specificity - these are the most important factors"
                .to_string(),
        );
    }
    if scores.context < 0.5 {
        suggestions.push(
            "Quick win: Start with 'You are a [role]' to immediately improve context".to_string(),
        );
    }
    if scores.specificity < 0.6 {
        suggestions.push("Quick win: Add specific numbers, names, or concrete details".to_string());
    }
    if scores.clarity < 0.7 && scores.structure < 0.7 {
        suggestions.push(
            "Structure tip: Break long sentences into shorter ones, use bullet points".to_string(),
        );
    }

    suggestions
}
