use std::sync::Arc;

use tokio::sync::RwLock;

use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::production::ProductionValidator;
use crate::scoring::ScoringEngine;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub scoring: Arc<ScoringEngine>,
    /// Test-case registry. Writers are registrations; validations read a snapshot.
    pub validator: Arc<RwLock<ProductionValidator>>,
    /// `None` when no API key is configured; `/validate` then answers 503.
    pub llm: Option<LlmClient>,
}

impl AppState {
    pub fn new(config: Config, llm: Option<LlmClient>) -> Self {
        Self {
            config,
            scoring: Arc::new(ScoringEngine::default()),
            validator: Arc::new(RwLock::new(ProductionValidator::new())),
            llm,
        }
    }
}
