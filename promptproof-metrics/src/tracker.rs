//! Streaming aggregation of response records.
//!
//! Totals are updated incrementally on `track_request`, so `get_summary`
//! is O(k) in the number of distinct providers/models rather than O(n)
//! in tracked requests. One tracker per test run; single-threaded use.

use std::collections::BTreeMap;

use promptproof_core::LlmResponse;

use crate::{CostBreakdown, MetricsError, MetricsSummary, UsageSummary};

#[derive(Clone, Debug, Default)]
struct Aggregate {
    requests: u64,
    tokens: u64,
    prompt_tokens: u64,
    completion_tokens: u64,
    cost_usd: f64,
    latency_sum_ms: f64,
}

impl Aggregate {
    fn absorb(&mut self, record: &LlmResponse) {
        self.requests += 1;
        self.tokens += u64::from(record.tokens_used);
        self.prompt_tokens += u64::from(record.prompt_tokens);
        self.completion_tokens += u64::from(record.completion_tokens);
        self.cost_usd += record.cost_usd;
        self.latency_sum_ms += record.latency_ms;
    }

    fn summarize(&self) -> UsageSummary {
        UsageSummary {
            total_requests: self.requests,
            total_tokens: self.tokens,
            total_prompt_tokens: self.prompt_tokens,
            total_completion_tokens: self.completion_tokens,
            total_cost_usd: self.cost_usd,
            avg_latency_ms: if self.requests == 0 {
                0.0
            } else {
                self.latency_sum_ms / self.requests as f64
            },
        }
    }
}

#[derive(Debug, Default)]
pub struct MetricsTracker {
    totals: Aggregate,
    by_provider: BTreeMap<String, Aggregate>,
    by_model: BTreeMap<String, Aggregate>,
}

impl MetricsTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `record` to the tracked set, updating running totals.
    /// Records with negative or non-finite latency/cost are rejected
    /// before any state changes, so a bad record cannot corrupt the
    /// statistics already accumulated for other tests.
    pub fn track_request(&mut self, record: &LlmResponse) -> Result<(), MetricsError> {
        if !record.latency_ms.is_finite() || record.latency_ms < 0.0 {
            return Err(MetricsError::InvalidRecord(format!(
                "latency_ms must be a non-negative finite number, got {}",
                record.latency_ms
            )));
        }
        if !record.cost_usd.is_finite() || record.cost_usd < 0.0 {
            return Err(MetricsError::InvalidRecord(format!(
                "cost_usd must be a non-negative finite number, got {}",
                record.cost_usd
            )));
        }

        self.totals.absorb(record);
        self.by_provider
            .entry(record.provider.clone())
            .or_default()
            .absorb(record);
        self.by_model
            .entry(record.model.clone())
            .or_default()
            .absorb(record);

        tracing::debug!(
            provider = %record.provider,
            model = %record.model,
            tokens_used = record.tokens_used,
            latency_ms = record.latency_ms,
            cost_usd = record.cost_usd,
            "tracked request"
        );
        Ok(())
    }

    pub fn get_summary(&self) -> MetricsSummary {
        let totals = self.totals.summarize();
        MetricsSummary {
            total_requests: totals.total_requests,
            total_tokens: totals.total_tokens,
            total_prompt_tokens: totals.total_prompt_tokens,
            total_completion_tokens: totals.total_completion_tokens,
            total_cost_usd: totals.total_cost_usd,
            avg_latency_ms: totals.avg_latency_ms,
            by_provider: self
                .by_provider
                .iter()
                .map(|(name, agg)| (name.clone(), agg.summarize()))
                .collect(),
            by_model: self
                .by_model
                .iter()
                .map(|(name, agg)| (name.clone(), agg.summarize()))
                .collect(),
        }
    }

    pub fn get_cost_breakdown(&self) -> CostBreakdown {
        CostBreakdown {
            total: self.totals.cost_usd,
            by_provider: self
                .by_provider
                .iter()
                .map(|(name, agg)| (name.clone(), agg.cost_usd))
                .collect(),
            by_model: self
                .by_model
                .iter()
                .map(|(name, agg)| (name.clone(), agg.cost_usd))
                .collect(),
        }
    }
}
