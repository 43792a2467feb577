use promptproof_core::ProofError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MetricsError {
    /// Caller contract violation: a record whose statistics would corrupt
    /// the running aggregates (negative or non-finite latency/cost).
    #[error("invalid response record: {0}")]
    InvalidRecord(String),
}

impl From<MetricsError> for ProofError {
    fn from(err: MetricsError) -> Self {
        match err {
            MetricsError::InvalidRecord(reason) => ProofError::InvalidRecord(reason),
        }
    }
}
