mod error;
mod report;
mod summary;
mod tracker;

pub use error::MetricsError;
pub use report::{MetricsReport, ReportError};
pub use summary::{CostBreakdown, MetricsSummary, UsageSummary};
pub use tracker::MetricsTracker;
