//! Scoring engine: lexical/structural quality score for a prompt.
//!
//! Eight dimension scores in [0, 1]. Five of them, weighted by
//! `ScoringWeights`, make the 0–100 overall score; audience, requirements and
//! length are advisory and reported alongside.
//!
//! Pure function of the prompt text and the injected vocabulary.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::production::stats::round2;
use crate::scoring::feedback::{generate_feedback, generate_suggestions, Grade};
use crate::scoring::vocabulary::{count_present, ScoringWeights, Vocabulary};

/// Numbered (`1.`) or bulleted (`-`, `*`, `•`) list markers.
static LIST_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\d+\.|[-*•]").expect("list marker pattern is valid"));

const PARAGRAPH_BONUS: f64 = 0.3;
const LIST_BONUS: f64 = 0.2;
const QUESTION_BONUS: f64 = 0.2;
const ACTION_VERB_BONUS: f64 = 0.1;
const ACTION_VERB_CAP: f64 = 0.3;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DimensionScores {
    pub clarity: f64,
    pub specificity: f64,
    pub context: f64,
    pub structure: f64,
    pub examples: f64,
    pub audience: f64,
    pub requirements: f64,
    pub length: f64,
}

/// Each weighted dimension's contribution to the overall score (0–100 scale).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightedScores {
    pub clarity: f64,
    pub specificity: f64,
    pub context: f64,
    pub structure: f64,
    pub examples: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub overall_score: f64, // 0 – 100
    pub breakdown: DimensionScores,
    pub weighted_scores: WeightedScores,
    pub feedback: Vec<String>,
    pub suggestions: Vec<String>,
    pub grade: Grade,
}

#[derive(Debug, Clone, Default)]
pub struct ScoringEngine {
    vocabulary: Vocabulary,
    weights: ScoringWeights,
}

impl ScoringEngine {
    pub fn new(vocabulary: Vocabulary, weights: ScoringWeights) -> Self {
        Self {
            vocabulary,
            weights,
        }
    }

    pub fn score(&self, prompt: &str) -> ScoreBreakdown {
        let prompt_lower = prompt.to_lowercase();
        let vocab = &self.vocabulary;
        let w = &self.weights;

        let raw = DimensionScores {
            clarity: clarity_score(prompt),
            specificity: self.specificity_score(&prompt_lower, prompt.split_whitespace().count()),
            context: vocab.context.score(&prompt_lower),
            structure: self.structure_score(prompt, &prompt_lower),
            examples: vocab.examples.score(&prompt_lower),
            audience: vocab.audience.score(&prompt_lower),
            requirements: vocab.requirements.score(&prompt_lower),
            length: vocab.length.score(&prompt_lower),
        };

        let weighted = [
            raw.clarity * w.clarity,
            raw.specificity * w.specificity,
            raw.context * w.context,
            raw.structure * w.structure,
            raw.examples * w.examples,
        ];
        let overall = (weighted.iter().sum::<f64>() * 100.0).clamp(0.0, 100.0);

        let breakdown = DimensionScores {
            clarity: round2(raw.clarity),
            specificity: round2(raw.specificity),
            context: round2(raw.context),
            structure: round2(raw.structure),
            examples: round2(raw.examples),
            audience: round2(raw.audience),
            requirements: round2(raw.requirements),
            length: round2(raw.length),
        };

        ScoreBreakdown {
            overall_score: round2(overall),
            weighted_scores: WeightedScores {
                clarity: round2(weighted[0] * 100.0),
                specificity: round2(weighted[1] * 100.0),
                context: round2(weighted[2] * 100.0),
                structure: round2(weighted[3] * 100.0),
                examples: round2(weighted[4] * 100.0),
            },
            feedback: generate_feedback(&breakdown),
            suggestions: generate_suggestions(&breakdown, overall),
            grade: Grade::from_score(overall),
            breakdown,
        }
    }

    /// Specific-word hits minus vague-word hits, each normalised by a tenth
    /// of the word count (at least 1), so longer prompts need more markers.
    fn specificity_score(&self, prompt_lower: &str, word_count: usize) -> f64 {
        if word_count == 0 {
            return 0.0;
        }
        let divisor = (word_count as f64 * 0.1).max(1.0);
        let specific = count_present(&self.vocabulary.specific_words, prompt_lower) as f64;
        let vague = count_present(&self.vocabulary.vague_words, prompt_lower) as f64;
        (specific / divisor - vague / divisor).clamp(0.0, 1.0)
    }

    fn structure_score(&self, prompt: &str, prompt_lower: &str) -> f64 {
        let mut score = 0.0;

        let paragraphs = prompt
            .split("\n\n")
            .filter(|p| !p.trim().is_empty())
            .count();
        if paragraphs > 1 {
            score += PARAGRAPH_BONUS;
        }

        if LIST_MARKER.is_match(prompt) {
            score += LIST_BONUS;
        }

        if count_present(&self.vocabulary.question_words, prompt_lower) > 0 {
            score += QUESTION_BONUS;
        }

        let verbs = count_present(&self.vocabulary.action_verbs, prompt_lower) as f64;
        score += (verbs * ACTION_VERB_BONUS).min(ACTION_VERB_CAP);

        score.min(1.0)
    }
}

/// Mean words per sentence: 1.0 inside 15–25, 0.8 inside 10–30, else 0.5.
fn clarity_score(prompt: &str) -> f64 {
    let sentences: Vec<&str> = prompt.split(|c| matches!(c, '.' | '!' | '?')).collect();
    let words: usize = sentences.iter().map(|s| s.split_whitespace().count()).sum();
    let avg = words as f64 / sentences.len().max(1) as f64;

    if (15.0..=25.0).contains(&avg) {
        1.0
    } else if (10.0..=30.0).contains(&avg) {
        0.8
    } else {
        0.5
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::vocabulary::IndicatorSet;

    const VAGUE_PROMPT: &str = "Write me something good about marketing";

    const STRUCTURED_PROMPT: &str = "You are a conversion copywriter who specializes in SaaS email marketing for project management tools.

Write a welcome email of exactly 150 words for new trial users, following the example format and style shown below.

Target audience: small business owners who signed up this week but have not yet logged in to the product.

Must include: one specific next step, one key benefit, and a clear call to action that should feel personal";

    fn engine() -> ScoringEngine {
        ScoringEngine::default()
    }

    #[test]
    fn test_vague_prompt_scores_low() {
        let r = engine().score(VAGUE_PROMPT);
        assert_eq!(r.overall_score, 14.0);
        assert!(matches!(r.grade, Grade::D | Grade::F));
        assert_eq!(r.breakdown.specificity, 0.0);
        assert_eq!(r.breakdown.context, 0.0);
        assert_eq!(r.breakdown.structure, 0.1);
        assert_eq!(r.feedback.len(), 8);
        assert_eq!(r.suggestions.len(), 4);
    }

    #[test]
    fn test_structured_prompt_scores_high() {
        let r = engine().score(STRUCTURED_PROMPT);
        assert!(r.overall_score >= 70.0, "score was {}", r.overall_score);
        assert_eq!(r.overall_score, 84.62);
        assert_eq!(r.grade, Grade::A);

        assert_eq!(r.breakdown.clarity, 1.0);
        assert_eq!(r.breakdown.specificity, 0.68);
        assert_eq!(r.breakdown.context, 1.0);
        assert_eq!(r.breakdown.structure, 0.6);
        assert_eq!(r.breakdown.examples, 0.9);
        assert_eq!(r.breakdown.audience, 0.8);
        assert_eq!(r.breakdown.requirements, 0.3);
        assert_eq!(r.breakdown.length, 0.5);

        assert_eq!(r.weighted_scores.clarity, 25.0);
        assert_eq!(r.weighted_scores.context, 20.0);
        assert!(r.suggestions.is_empty());
        assert_eq!(r.feedback.len(), 2);
    }

    #[test]
    fn test_advisory_dimensions_do_not_move_overall() {
        let base = engine().score("Describe the release process");
        let with_audience = engine().score("Describe the release process customers");
        assert!(with_audience.breakdown.audience > base.breakdown.audience);
        assert_eq!(with_audience.overall_score, base.overall_score);
    }

    #[test]
    fn test_empty_prompt_does_not_divide_by_zero() {
        let r = engine().score("");
        assert_eq!(r.breakdown.specificity, 0.0);
        assert_eq!(r.breakdown.clarity, 0.5);
        assert_eq!(r.overall_score, 12.5);
        assert_eq!(r.grade, Grade::F);
    }

    #[test]
    fn test_scores_bounded_and_deterministic() {
        let dense = "must should exactly specifically include format ".repeat(40);
        let prompts: [&str; 7] = [
            "",
            "   ",
            "?!.",
            VAGUE_PROMPT,
            STRUCTURED_PROMPT,
            "1. list 2. write 3. create 4. generate 5. explain - * • what how why",
            dense.as_str(),
        ];
        let e = engine();
        for p in prompts {
            let r = e.score(p);
            assert!((0.0..=100.0).contains(&r.overall_score), "{p:?}");
            let b = &r.breakdown;
            for v in [
                b.clarity,
                b.specificity,
                b.context,
                b.structure,
                b.examples,
                b.audience,
                b.requirements,
                b.length,
            ] {
                assert!((0.0..=1.0).contains(&v), "{p:?} -> {v}");
            }
            assert_eq!(r, e.score(p));
        }
    }

    #[test]
    fn test_clarity_bands() {
        // 19 words in one sentence.
        let r = engine().score(
            "The quarterly report on regional sales performance covers revenue trends in northern territories across the last four fiscal periods",
        );
        assert_eq!(r.breakdown.clarity, 1.0);
        // 12 words.
        let r = engine()
            .score("Summarize the attached meeting notes for the engineering leads in plain language");
        assert_eq!(r.breakdown.clarity, 0.8);
    }

    #[test]
    fn test_structure_tip_needs_weak_clarity_too() {
        let r = engine().score(
            "The quarterly report on regional sales performance covers revenue trends in northern territories across the last four fiscal periods",
        );
        assert_eq!(r.breakdown.structure, 0.0);
        assert!(!r.suggestions.iter().any(|s| s.starts_with("Structure tip")));
    }

    #[test]
    fn test_structure_caps_action_verbs() {
        // write, create, generate, list: 4 hits capped at 0.3, plus the 0.2 list marker.
        let r = engine().score("write create generate list - item");
        assert_eq!(r.breakdown.structure, 0.5);
    }

    #[test]
    fn test_injected_vocabulary_is_used() {
        let vocabulary = Vocabulary {
            context: IndicatorSet::new(&["persona"], 1.0),
            ..Vocabulary::default()
        };
        let custom = ScoringEngine::new(vocabulary, ScoringWeights::default());
        assert_eq!(custom.score("Adopt the persona of a tutor").breakdown.context, 1.0);
        assert_eq!(engine().score("Adopt the persona of a tutor").breakdown.context, 0.0);
    }

    #[test]
    fn test_breakdown_serializes_eight_dimensions() {
        let json = serde_json::to_value(engine().score(VAGUE_PROMPT)).unwrap();
        assert_eq!(json["breakdown"].as_object().unwrap().len(), 8);
        assert_eq!(json["weighted_scores"].as_object().unwrap().len(), 5);
        assert_eq!(json["grade"], "F");
    }
}
