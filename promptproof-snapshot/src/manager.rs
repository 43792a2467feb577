//! Directory-scoped snapshot store with update and verify modes.
//!
//! One pretty-printed JSON document per snapshot name
//! (`<name>.snap.json`). A single current version is kept per name; no
//! revision history. `created_at` survives overwrites, `updated_at` is
//! restamped on every write.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Utc;
use promptproof_core::Metadata;
use serde::Serialize;

use crate::{Snapshot, SnapshotError};

const SNAPSHOT_SUFFIX: &str = ".snap.json";

/// Structured result of [`SnapshotManager::compare`]. Callers can tell
/// "passed because freshly created" from "passed because content matched".
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct CompareOutcome {
    pub matched: bool,
    pub created: bool,
    pub updated: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diff: Option<String>,
}

/// Persists and compares named text snapshots under one directory.
///
/// Explicitly constructed and passed; never process-wide state, so tests
/// can run against isolated temporary stores.
#[derive(Debug, Clone)]
pub struct SnapshotManager {
    snapshot_dir: PathBuf,
    update_mode: bool,
}

impl SnapshotManager {
    /// Opens (and creates if absent) the store rooted at `snapshot_dir`.
    /// With `update_mode` set, `compare` always succeeds and rewrites the
    /// baseline; without it, comparisons are strict and read-only.
    pub fn new(snapshot_dir: impl Into<PathBuf>, update_mode: bool) -> Result<Self, SnapshotError> {
        let snapshot_dir = snapshot_dir.into();
        fs::create_dir_all(&snapshot_dir).map_err(|source| SnapshotError::Io {
            path: snapshot_dir.clone(),
            source,
        })?;
        Ok(Self {
            snapshot_dir,
            update_mode,
        })
    }

    pub fn snapshot_dir(&self) -> &Path {
        &self.snapshot_dir
    }

    pub fn update_mode(&self) -> bool {
        self.update_mode
    }

    /// Writes (or overwrites) the snapshot for `name`, preserving
    /// `created_at` across overwrites and restamping `updated_at`.
    pub fn save_snapshot(
        &self,
        name: &str,
        content: &str,
        metadata: Metadata,
    ) -> Result<Snapshot, SnapshotError> {
        let path = self.path_for(name)?;
        let now = Utc::now();
        let created_at = match self.read_file(&path)? {
            Some(existing) => existing.created_at,
            None => now,
        };

        let snapshot = Snapshot {
            name: name.to_string(),
            content: content.to_string(),
            metadata,
            created_at,
            updated_at: now,
        };

        let serialized = serde_json::to_string_pretty(&snapshot)
            .map_err(|source| SnapshotError::Malformed {
                path: path.clone(),
                source,
            })?;
        fs::write(&path, serialized).map_err(|source| SnapshotError::Io {
            path: path.clone(),
            source,
        })?;

        tracing::debug!(name, path = %path.display(), "saved snapshot");
        Ok(snapshot)
    }

    /// Returns the current snapshot for `name`.
    pub fn load_snapshot(&self, name: &str) -> Result<Snapshot, SnapshotError> {
        let path = self.path_for(name)?;
        self.read_file(&path)?
            .ok_or_else(|| SnapshotError::NotFound(name.to_string()))
    }

    /// Compares `actual` against the stored baseline for `name`.
    ///
    /// Update mode is a baseline-refresh pass: it never reports a
    /// mismatch, creating or overwriting the stored content instead.
    /// Strict mode never mutates the store, whatever the outcome.
    pub fn compare(&self, name: &str, actual: &str) -> Result<CompareOutcome, SnapshotError> {
        let path = self.path_for(name)?;
        let existing = self.read_file(&path)?;

        match (existing, self.update_mode) {
            (None, true) => {
                self.save_snapshot(name, actual, Metadata::new())?;
                Ok(CompareOutcome {
                    matched: true,
                    created: true,
                    ..Default::default()
                })
            }
            (None, false) => Err(SnapshotError::NotFound(name.to_string())),
            (Some(stored), true) => {
                self.save_snapshot(name, actual, stored.metadata)?;
                Ok(CompareOutcome {
                    matched: true,
                    updated: true,
                    ..Default::default()
                })
            }
            (Some(stored), false) => {
                if stored.content == actual {
                    Ok(CompareOutcome {
                        matched: true,
                        ..Default::default()
                    })
                } else {
                    tracing::debug!(name, "snapshot mismatch");
                    let patch = diffy::create_patch(&stored.content, actual);
                    Ok(CompareOutcome {
                        matched: false,
                        diff: Some(patch.to_string()),
                        ..Default::default()
                    })
                }
            }
        }
    }

    /// Names currently in the store. Ordering is not guaranteed.
    pub fn list_snapshots(&self) -> Result<Vec<String>, SnapshotError> {
        let entries = fs::read_dir(&self.snapshot_dir).map_err(|source| SnapshotError::Io {
            path: self.snapshot_dir.clone(),
            source,
        })?;

        let mut names = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|source| SnapshotError::Io {
                path: self.snapshot_dir.clone(),
                source,
            })?;
            let file_name = entry.file_name();
            let Some(file_name) = file_name.to_str() else {
                continue;
            };
            if let Some(name) = file_name.strip_suffix(SNAPSHOT_SUFFIX) {
                names.push(name.to_string());
            }
        }
        Ok(names)
    }

    fn path_for(&self, name: &str) -> Result<PathBuf, SnapshotError> {
        validate_name(name)?;
        Ok(self.snapshot_dir.join(format!("{name}{SNAPSHOT_SUFFIX}")))
    }

    fn read_file(&self, path: &Path) -> Result<Option<Snapshot>, SnapshotError> {
        let raw = match fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(SnapshotError::Io {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };
        let snapshot = serde_json::from_str(&raw).map_err(|source| SnapshotError::Malformed {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Some(snapshot))
    }
}

fn validate_name(name: &str) -> Result<(), SnapshotError> {
    let reason = if name.is_empty() {
        Some("must not be empty")
    } else if name.contains('/') || name.contains('\\') {
        Some("must not contain path separators")
    } else if name == "." || name == ".." {
        Some("must not be a relative path component")
    } else {
        None
    };

    match reason {
        Some(reason) => Err(SnapshotError::InvalidName {
            name: name.to_string(),
            reason: reason.to_string(),
        }),
        None => Ok(()),
    }
}
