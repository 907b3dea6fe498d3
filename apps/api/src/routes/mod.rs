pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::production::handlers as production;
use crate::scoring::handlers as scoring;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Prompt quality scoring
        .route("/api/v1/prompts/score", post(scoring::handle_score_prompt))
        // Production readiness
        .route(
            "/api/v1/prompts/:id/test-cases",
            post(production::handle_add_test_case).get(production::handle_list_test_cases),
        )
        .route(
            "/api/v1/prompts/:id/validate",
            post(production::handle_validate),
        )
        .with_state(state)
}
