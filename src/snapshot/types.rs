use std::collections::BTreeMap;

use serde::Deserialize;

/// Lines of code and file count for one group of files.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "(u64, u64)")]
pub struct CodeMetric {
    pub lines: u64,
    pub files: u64,
}

impl From<(u64, u64)> for CodeMetric {
    fn from((lines, files): (u64, u64)) -> Self {
        Self { lines, files }
    }
}

/// One released version, built from a single snapshot file.
#[derive(Debug, Clone, PartialEq)]
pub struct VersionRecord {
    /// Snapshot file stem, e.g. `v1.2` for `v1.2.json`.
    pub version_id: String,
    pub core: CodeMetric,
    pub load: CodeMetric,
    pub core_score: f64,
    pub load_score: f64,
    pub load_dependency_warnings: u64,
    /// Reference count per core file. Load-module paths are filtered out.
    pub file_reference_counts: BTreeMap<String, u64>,
}

/// Commit metadata attached to a version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitRecord {
    pub version_id: String,
    pub commit_id: String,
    pub commit_message: String,
}

impl CommitRecord {
    /// Parse the single-line `"<commit_id>: <message>"` metadata format.
    ///
    /// Returns `None` when the `": "` separator is absent.
    #[must_use]
    pub fn parse(version_id: &str, content: &str) -> Option<Self> {
        let (commit_id, message) = content.trim().split_once(": ")?;
        Some(Self {
            version_id: version_id.to_string(),
            commit_id: commit_id.to_string(),
            commit_message: message.to_string(),
        })
    }
}

/// The most recent `window` records, still in ascending version order.
#[must_use]
pub fn recent_commits(records: &[CommitRecord], window: usize) -> &[CommitRecord] {
    &records[records.len().saturating_sub(window)..]
}

// Wire format of a snapshot file. Unknown keys are ignored so upstream tools
// can add fields without breaking the report.

#[derive(Debug, Deserialize)]
pub(crate) struct RawSnapshot {
    pub summary: RawSummary,
    pub files: BTreeMap<String, RawFileEntry>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawSummary {
    pub core: CodeMetric,
    pub load: CodeMetric,
    pub core_score: f64,
    pub load_score: f64,
    pub load_dep: RawPair,
}

/// Two-element array; only the second element is used.
#[derive(Debug, Deserialize)]
pub(crate) struct RawPair(#[allow(dead_code)] pub serde_json::Value, pub u64);

pub(crate) type RawFileEntry = RawPair;

#[cfg(test)]
#[path = "types_tests.rs"]
mod tests;
