use promptproof_core::ProofError;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ExpectError {
    /// A predicate's condition was false. Carries enough context that the
    /// message stands on its own without re-running the test.
    #[error("{predicate}: {expected}; subject was {subject}")]
    Assertion {
        predicate: &'static str,
        expected: String,
        subject: String,
    },
    /// A test-authoring bug, not an LLM-output mismatch.
    #[error("unknown length unit '{0}' (expected 'chars' or 'words')")]
    InvalidUnit(String),
}

impl From<ExpectError> for ProofError {
    fn from(err: ExpectError) -> Self {
        let message = err.to_string();
        match err {
            ExpectError::Assertion { .. } => ProofError::Assertion(message),
            ExpectError::InvalidUnit(_) => ProofError::InvalidConfig(message),
        }
    }
}
