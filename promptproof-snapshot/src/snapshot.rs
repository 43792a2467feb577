use chrono::{DateTime, Utc};
use promptproof_core::Metadata;
use serde::{Deserialize, Serialize};

/// A persisted baseline. Callers get read-only views; the manager owns the
/// stored copy for its lifetime.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Snapshot {
    pub name: String,
    pub content: String,
    #[serde(default)]
    pub metadata: Metadata,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
