// Prompt quality scoring.
// Implements: dimension scores, weighted overall score, grade, feedback and suggestions.
// Lexical and structural signals only; nothing here calls a model.

pub mod engine;
pub mod feedback;
pub mod handlers;
pub mod vocabulary;

pub use engine::{ScoreBreakdown, ScoringEngine};
