mod error;
mod manager;
mod snapshot;

pub use error::SnapshotError;
pub use manager::{CompareOutcome, SnapshotManager};
pub use snapshot::Snapshot;
