//! Scoring vocabulary: the phrase lists and weights the engine reads.
//!
//! Injected into `ScoringEngine` at construction so alternate vocabularies can
//! be swapped in without touching engine logic. `Default` is the CLEAR set.

use serde::{Deserialize, Serialize};

/// Phrases whose presence signals one dimension, and the credit per phrase found.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndicatorSet {
    pub phrases: Vec<String>,
    pub per_match: f64,
}

impl IndicatorSet {
    pub fn new(phrases: &[&str], per_match: f64) -> Self {
        Self {
            phrases: to_owned(phrases),
            per_match,
        }
    }

    /// `min(distinct phrases present * per_match, 1.0)` against lower-cased text.
    pub fn score(&self, prompt_lower: &str) -> f64 {
        (count_present(&self.phrases, prompt_lower) as f64 * self.per_match).min(1.0)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vocabulary {
    pub context: IndicatorSet,
    pub length: IndicatorSet,
    pub examples: IndicatorSet,
    pub audience: IndicatorSet,
    pub requirements: IndicatorSet,
    pub vague_words: Vec<String>,
    pub specific_words: Vec<String>,
    pub question_words: Vec<String>,
    pub action_verbs: Vec<String>,
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self {
            context: IndicatorSet::new(
                &["you are", "act as", "imagine you", "role", "you are a", "you are an"],
                0.5,
            ),
            length: IndicatorSet::new(
                &["words", "sentences", "paragraphs", "pages", "characters", "lines"],
                0.5,
            ),
            examples: IndicatorSet::new(
                &["example", "like this", "format", "style", "similar to", "for instance"],
                0.3,
            ),
            audience: IndicatorSet::new(
                &[
                    "audience",
                    "target",
                    "for people who",
                    "readers who",
                    "users who",
                    "customers",
                ],
                0.4,
            ),
            requirements: IndicatorSet::new(
                &[
                    "must include",
                    "requirements",
                    "should contain",
                    "needs to",
                    "must have",
                ],
                0.3,
            ),
            vague_words: to_owned(&["good", "nice", "great", "awesome", "help", "some", "thing"]),
            specific_words: to_owned(&[
                "exactly",
                "specifically",
                "must",
                "should",
                "include",
                "format",
            ]),
            question_words: to_owned(&["what", "how", "why", "when", "where", "who"]),
            action_verbs: to_owned(&[
                "write", "create", "generate", "analyze", "explain", "describe", "list",
            ]),
        }
    }
}

/// Weights of the five dimensions that make up the overall score.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringWeights {
    pub clarity: f64,
    pub specificity: f64,
    pub context: f64,
    pub structure: f64,
    pub examples: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            clarity: 0.25,
            specificity: 0.25,
            context: 0.20,
            structure: 0.15,
            examples: 0.15,
        }
    }
}

/// Number of distinct entries of `words` that occur as substrings of `text`.
pub fn count_present(words: &[String], text: &str) -> usize {
    words.iter().filter(|w| text.contains(w.as_str())).count()
}

fn to_owned(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}
