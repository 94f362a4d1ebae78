//! Aligned per-version time series derived from the loaded snapshots.
//!
//! Every series has exactly one entry per [`VersionRecord`], in load order,
//! so all charts share the same x positions.

mod exclusion;

use std::collections::BTreeMap;

pub use exclusion::{ExcludedFile, ExclusionOutcome, ExclusionPolicy};

use crate::snapshot::VersionRecord;

/// Reference count per file per version, dense and zero-filled.
///
/// Keyed by file path in lexical order so legend and plot order are
/// deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileReferenceSeries {
    by_file: BTreeMap<String, Vec<u64>>,
}

impl FileReferenceSeries {
    /// Full outer join of the sparse per-version maps.
    #[must_use]
    pub fn from_versions(versions: &[VersionRecord]) -> Self {
        let mut by_file: BTreeMap<String, Vec<u64>> = BTreeMap::new();
        for (index, version) in versions.iter().enumerate() {
            for (file, &count) in &version.file_reference_counts {
                by_file
                    .entry(file.clone())
                    .or_insert_with(|| vec![0; versions.len()])[index] = count;
            }
        }
        Self { by_file }
    }

    #[must_use]
    pub fn get(&self, file: &str) -> Option<&[u64]> {
        self.by_file.get(file).map(Vec::as_slice)
    }

    /// Union of all file paths ever referenced, sorted.
    pub fn files(&self) -> impl Iterator<Item = &str> {
        self.by_file.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[u64])> {
        self.by_file.iter().map(|(f, s)| (f.as_str(), s.as_slice()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.by_file.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_file.is_empty()
    }

    /// Largest count in any series, 0 when empty.
    #[must_use]
    pub fn max_value(&self) -> u64 {
        self.by_file
            .values()
            .flat_map(|s| s.iter().copied())
            .max()
            .unwrap_or(0)
    }
}

/// All tracked metrics as aligned series.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TimelineSeries {
    pub versions: Vec<String>,
    pub core_lines: Vec<u64>,
    pub core_files: Vec<u64>,
    pub load_lines: Vec<u64>,
    pub load_files: Vec<u64>,
    pub core_scores: Vec<f64>,
    pub load_scores: Vec<f64>,
    pub dependency_warnings: Vec<u64>,
    pub file_references: FileReferenceSeries,
}

impl TimelineSeries {
    #[must_use]
    pub fn build(versions: &[VersionRecord]) -> Self {
        Self {
            versions: versions.iter().map(|v| v.version_id.clone()).collect(),
            core_lines: versions.iter().map(|v| v.core.lines).collect(),
            core_files: versions.iter().map(|v| v.core.files).collect(),
            load_lines: versions.iter().map(|v| v.load.lines).collect(),
            load_files: versions.iter().map(|v| v.load.files).collect(),
            core_scores: versions.iter().map(|v| v.core_score).collect(),
            load_scores: versions.iter().map(|v| v.load_score).collect(),
            dependency_warnings: versions
                .iter()
                .map(|v| v.load_dependency_warnings)
                .collect(),
            file_references: FileReferenceSeries::from_versions(versions),
        }
    }

    /// Number of versions on the x axis.
    #[must_use]
    pub fn len(&self) -> usize {
        self.versions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.versions.is_empty()
    }
}

#[cfg(test)]
#[path = "series_tests.rs"]
mod tests;
