use crate::{LlmResponse, ProofError};

/// Boundary trait implemented by provider adapters. The harness only
/// consumes the normalized [`LlmResponse`] they return.
#[async_trait::async_trait]
pub trait LlmProvider: Send + Sync {
    fn name(&self) -> &str;

    async fn complete(&self, prompt: &str) -> Result<LlmResponse, ProofError>;
}
