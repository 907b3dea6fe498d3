use axum::{extract::State, Json};
use serde::Deserialize;
use tracing::debug;

use crate::scoring::ScoreBreakdown;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct ScoreRequest {
    pub prompt: String,
}

/// POST /api/v1/prompts/score
pub async fn handle_score_prompt(
    State(state): State<AppState>,
    Json(req): Json<ScoreRequest>,
) -> Json<ScoreBreakdown> {
    let breakdown = state.scoring.score(&req.prompt);
    debug!(
        overall_score = breakdown.overall_score,
        grade = %breakdown.grade,
        "Prompt scored"
    );
    Json(breakdown)
}
