//! The normalized record produced by a provider for a single LLM call.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{Metadata, ProofError, Value};

/// One LLM call as observed by the harness. Immutable once built; the
/// metrics tracker reads it but never rewrites fields.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct LlmResponse {
    pub content: String,
    pub model: String,
    pub provider: String,
    pub tokens_used: u32,
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub latency_ms: f64,
    pub cost_usd: f64,
    pub timestamp: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Metadata::is_empty")]
    pub metadata: Metadata,
    /// Provider-native payload, kept opaque. The harness never inspects it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw_response: Option<Value>,
}

impl LlmResponse {
    pub fn builder(
        model: impl Into<String>,
        provider: impl Into<String>,
    ) -> LlmResponseBuilder {
        LlmResponseBuilder {
            content: String::new(),
            model: model.into(),
            provider: provider.into(),
            tokens_used: None,
            prompt_tokens: 0,
            completion_tokens: 0,
            latency_ms: 0.0,
            cost_usd: 0.0,
            timestamp: None,
            metadata: Metadata::new(),
            raw_response: None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct LlmResponseBuilder {
    content: String,
    model: String,
    provider: String,
    tokens_used: Option<u32>,
    prompt_tokens: u32,
    completion_tokens: u32,
    latency_ms: f64,
    cost_usd: f64,
    timestamp: Option<DateTime<Utc>>,
    metadata: Metadata,
    raw_response: Option<Value>,
}

impl LlmResponseBuilder {
    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    /// Sets prompt and completion counts. `tokens_used` defaults to their
    /// sum unless overridden; providers round, so the sum is not enforced.
    pub fn tokens(mut self, prompt_tokens: u32, completion_tokens: u32) -> Self {
        self.prompt_tokens = prompt_tokens;
        self.completion_tokens = completion_tokens;
        self
    }

    pub fn tokens_used(mut self, tokens_used: u32) -> Self {
        self.tokens_used = Some(tokens_used);
        self
    }

    pub fn latency_ms(mut self, latency_ms: f64) -> Self {
        self.latency_ms = latency_ms;
        self
    }

    pub fn cost_usd(mut self, cost_usd: f64) -> Self {
        self.cost_usd = cost_usd;
        self
    }

    pub fn timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    pub fn metadata_entry(mut self, key: impl Into<String>, value: Value) -> Self {
        self.metadata.insert(key.into(), value);
        self
    }

    pub fn raw_response(mut self, raw: Value) -> Self {
        self.raw_response = Some(raw);
        self
    }

    pub fn build(self) -> Result<LlmResponse, ProofError> {
        if !self.latency_ms.is_finite() || self.latency_ms < 0.0 {
            return Err(ProofError::InvalidRecord(format!(
                "latency_ms must be a non-negative finite number, got {}",
                self.latency_ms
            )));
        }
        if !self.cost_usd.is_finite() || self.cost_usd < 0.0 {
            return Err(ProofError::InvalidRecord(format!(
                "cost_usd must be a non-negative finite number, got {}",
                self.cost_usd
            )));
        }

        Ok(LlmResponse {
            content: self.content,
            model: self.model,
            provider: self.provider,
            tokens_used: self
                .tokens_used
                .unwrap_or_else(|| self.prompt_tokens.saturating_add(self.completion_tokens)),
            prompt_tokens: self.prompt_tokens,
            completion_tokens: self.completion_tokens,
            latency_ms: self.latency_ms,
            cost_usd: self.cost_usd,
            timestamp: self.timestamp.unwrap_or_else(Utc::now),
            metadata: self.metadata,
            raw_response: self.raw_response,
        })
    }
}
