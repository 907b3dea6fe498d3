use std::str::FromStr;

use anyhow::{ensure, Context, Result};

use crate::llm_client::DEFAULT_MODEL;
use crate::production::consistency::DEFAULT_RUNS;
use crate::production::performance::DEFAULT_ITERATIONS;
use crate::production::validator::MAX_RUNS;

/// Application configuration loaded from environment variables.
/// Every variable has a default; a malformed number fails startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Absent key disables the production validation endpoint.
    pub anthropic_api_key: Option<String>,
    pub llm_model: String,
    pub llm_timeout_secs: u64,
    pub consistency_runs: usize,
    pub performance_iterations: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let config = Config {
            port: parse_env("PORT", 8080)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            anthropic_api_key: std::env::var("ANTHROPIC_API_KEY")
                .ok()
                .filter(|k| !k.trim().is_empty()),
            llm_model: std::env::var("LLM_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string()),
            llm_timeout_secs: parse_env("LLM_TIMEOUT_SECS", 120)?,
            consistency_runs: parse_env("CONSISTENCY_RUNS", DEFAULT_RUNS)?,
            performance_iterations: parse_env("PERFORMANCE_ITERATIONS", DEFAULT_ITERATIONS)?,
        };

        ensure!(
            config.consistency_runs <= MAX_RUNS && config.performance_iterations <= MAX_RUNS,
            "CONSISTENCY_RUNS and PERFORMANCE_ITERATIONS must be at most {MAX_RUNS}"
        );

        Ok(config)
    }
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => parse_value(key, &raw),
        Err(_) => Ok(default),
    }
}

fn parse_value<T>(key: &str, raw: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    raw.trim()
        .parse::<T>()
        .with_context(|| format!("Environment variable '{key}' has invalid value '{raw}'"))
}
