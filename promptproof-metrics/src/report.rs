//! The persisted metrics report document and its human rendering.
//!
//! This is the thin boundary consumed by the CLI's `metrics` command: a
//! JSON document with exactly the four top-level keys below. Anything
//! missing or malformed is a fatal read error for the caller.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::MetricsSummary;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("failed to read metrics report {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed metrics report {path}: {source}")]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MetricsReport {
    pub total_requests: u64,
    pub total_tokens: u64,
    pub total_cost_usd: f64,
    pub avg_latency_ms: f64,
}

impl MetricsReport {
    pub fn from_summary(summary: &MetricsSummary) -> Self {
        Self {
            total_requests: summary.total_requests,
            total_tokens: summary.total_tokens,
            total_cost_usd: summary.total_cost_usd,
            avg_latency_ms: summary.avg_latency_ms,
        }
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ReportError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| ReportError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&raw).map_err(|source| ReportError::Malformed {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ReportError> {
        let path = path.as_ref();
        let serialized = serde_json::to_string_pretty(self).map_err(|source| {
            ReportError::Malformed {
                path: path.to_path_buf(),
                source,
            }
        })?;
        fs::write(path, serialized).map_err(|source| ReportError::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Fixed-width text rendering: cost with 4 decimal places, latency
    /// with 2.
    pub fn render(&self) -> String {
        let rule = "=".repeat(60);
        format!(
            "{rule}\n\
             METRICS REPORT\n\
             {rule}\n\
             Total Requests: {requests}\n\
             Total Tokens:   {tokens}\n\
             Total Cost:     ${cost:.4}\n\
             Avg Latency:    {latency:.2}ms\n\
             {rule}",
            requests = self.total_requests,
            tokens = self.total_tokens,
            cost = self.total_cost_usd,
            latency = self.avg_latency_ms,
        )
    }
}
