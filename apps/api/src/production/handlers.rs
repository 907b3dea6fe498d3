use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::llm_client::LlmExecutor;
use crate::models::test_case::TestCase;
use crate::production::validator::MAX_RUNS;
use crate::production::{ProductionReport, ValidateOptions};
use crate::state::AppState;

#[derive(Serialize)]
pub struct RegisterResponse {
    pub prompt_id: String,
    pub registered: usize,
}

#[derive(Deserialize)]
pub struct ValidateRequest {
    /// The prompt text sent to the model ahead of every test input.
    pub prompt: String,
    #[serde(default = "default_true")]
    pub include_edge_cases: bool,
    #[serde(default = "default_true")]
    pub include_performance: bool,
    pub consistency_runs: Option<usize>,
    pub performance_iterations: Option<usize>,
}

fn default_true() -> bool {
    true
}

/// POST /api/v1/prompts/:id/test-cases
pub async fn handle_add_test_case(
    State(state): State<AppState>,
    Path(prompt_id): Path<String>,
    Json(test_case): Json<TestCase>,
) -> (StatusCode, Json<RegisterResponse>) {
    let registered = state
        .validator
        .write()
        .await
        .add_test_case(prompt_id.clone(), test_case);
    info!(prompt_id = %prompt_id, registered, "Test case registered");

    (
        StatusCode::CREATED,
        Json(RegisterResponse {
            prompt_id,
            registered,
        }),
    )
}

/// GET /api/v1/prompts/:id/test-cases
pub async fn handle_list_test_cases(
    State(state): State<AppState>,
    Path(prompt_id): Path<String>,
) -> Result<Json<Vec<TestCase>>, AppError> {
    let validator = state.validator.read().await;
    validator
        .test_cases(&prompt_id)
        .map(|cases| Json(cases.to_vec()))
        .ok_or_else(|| AppError::NotFound(format!("No test cases registered for prompt {prompt_id}")))
}

/// POST /api/v1/prompts/:id/validate
///
/// Runs against a snapshot of the registry so registrations are not blocked
/// for the length of a validation.
pub async fn handle_validate(
    State(state): State<AppState>,
    Path(prompt_id): Path<String>,
    Json(req): Json<ValidateRequest>,
) -> Result<Json<ProductionReport>, AppError> {
    if req.prompt.trim().is_empty() {
        return Err(AppError::Validation("prompt must not be empty".to_string()));
    }

    let options = ValidateOptions {
        include_edge_cases: req.include_edge_cases,
        include_performance: req.include_performance,
        consistency_runs: bounded_count(
            "consistency_runs",
            req.consistency_runs.unwrap_or(state.config.consistency_runs),
        )?,
        performance_iterations: bounded_count(
            "performance_iterations",
            req.performance_iterations
                .unwrap_or(state.config.performance_iterations),
        )?,
    };

    let llm = state
        .llm
        .clone()
        .ok_or_else(|| AppError::Llm("ANTHROPIC_API_KEY is not configured".to_string()))?;

    info!(
        prompt_id = %prompt_id,
        model = llm.model(),
        runs = options.consistency_runs,
        iterations = options.performance_iterations,
        "Starting production validation"
    );

    let executor = LlmExecutor::new(llm, req.prompt);
    let validator = state.validator.read().await.clone();
    let report = validator.validate(&prompt_id, &executor, &options).await;

    Ok(Json(report))
}

fn bounded_count(field: &str, value: usize) -> Result<usize, AppError> {
    if value > MAX_RUNS {
        return Err(AppError::Validation(format!(
            "{field} must be at most {MAX_RUNS}, got {value}"
        )));
    }
    Ok(value)
}
