//! Executor, the single capability the production harness needs from the
//! outside world: send one input through the prompt under test, get text back.
//!
//! The LLM-backed implementation lives in `llm_client`; tests use `FnExecutor`.

use async_trait::async_trait;
use thiserror::Error;

/// Opaque failure reported by an executor call.
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct ExecutorError {
    message: String,
}

impl ExecutorError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Runs the prompt under test against one input.
///
/// The harness awaits calls strictly one after another; implementations own
/// any timeout policy.
#[async_trait]
pub trait Executor: Send + Sync {
    async fn execute(&self, input: &str) -> Result<String, ExecutorError>;
}

/// Adapts a synchronous closure into an `Executor`.
pub struct FnExecutor<F>(F);

impl<F> FnExecutor<F>
where
    F: Fn(&str) -> Result<String, ExecutorError> + Send + Sync,
{
    pub fn new(f: F) -> Self {
        Self(f)
    }
}

#[async_trait]
impl<F> Executor for FnExecutor<F>
where
    F: Fn(&str) -> Result<String, ExecutorError> + Send + Sync,
{
    async fn execute(&self, input: &str) -> Result<String, ExecutorError> {
        (self.0)(input)
    }
}
