use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProofError {
    #[error("Assertion failed: {0}")]
    Assertion(String),
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("Snapshot '{0}' not found")]
    SnapshotNotFound(String),
    #[error("Snapshot storage failed: {0}")]
    Storage(String),
    #[error("Invalid response record: {0}")]
    InvalidRecord(String),
    #[error("LLM provider failed: {0}")]
    Provider(String),
    #[error("{0}")]
    Custom(String),
}
