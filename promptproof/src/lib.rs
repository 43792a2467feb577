//! Regression testing for LLM outputs.
//!
//! LLM responses are non-deterministic, so equality-based testing fails.
//! This crate bundles the three pieces that make such tests tractable:
//! tolerant fluent assertions ([`expect`]), a golden-output snapshot
//! store ([`SnapshotManager`]), and run-level cost/token/latency
//! aggregation ([`MetricsTracker`]).

pub use promptproof_core::{
    LlmProvider, LlmResponse, LlmResponseBuilder, Metadata, ProofError, Value,
};
pub use promptproof_expect::{expect, ExpectError, Expectation, LengthUnit};
pub use promptproof_metrics::{
    CostBreakdown, MetricsError, MetricsReport, MetricsSummary, MetricsTracker, ReportError,
    UsageSummary,
};
pub use promptproof_snapshot::{CompareOutcome, Snapshot, SnapshotError, SnapshotManager};
