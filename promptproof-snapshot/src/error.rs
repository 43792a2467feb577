use std::path::PathBuf;

use promptproof_core::ProofError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("snapshot '{0}' not found")]
    NotFound(String),
    #[error("invalid snapshot name '{name}': {reason}")]
    InvalidName { name: String, reason: String },
    #[error("storage error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed snapshot file {path}: {source}")]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl From<SnapshotError> for ProofError {
    fn from(err: SnapshotError) -> Self {
        match err {
            SnapshotError::NotFound(name) => ProofError::SnapshotNotFound(name),
            invalid @ SnapshotError::InvalidName { .. } => {
                ProofError::InvalidConfig(invalid.to_string())
            }
            other => ProofError::Storage(other.to_string()),
        }
    }
}
