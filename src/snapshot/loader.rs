use std::fs;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::config::ReportConfig;
use crate::error::{Result, TimelineError};

use super::types::{CommitRecord, RawSnapshot, VersionRecord};

/// Commit metadata plus the files that were skipped for lacking a separator.
#[derive(Debug, Default)]
pub struct CommitLoad {
    pub records: Vec<CommitRecord>,
    pub skipped: Vec<PathBuf>,
}

/// Reads per-version snapshot and metadata files from one folder.
///
/// Files are visited in ascending file-name order, which is the version
/// order since upstream names them incrementally.
#[derive(Debug, Clone)]
pub struct SnapshotLoader {
    dir: PathBuf,
    snapshot_extension: String,
    metadata_extension: String,
    load_module_marker: String,
}

impl SnapshotLoader {
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        let defaults = ReportConfig::default();
        Self {
            dir: dir.into(),
            snapshot_extension: defaults.snapshot_extension,
            metadata_extension: defaults.metadata_extension,
            load_module_marker: defaults.load_module_marker,
        }
    }

    #[must_use]
    pub fn from_config(config: &ReportConfig) -> Self {
        Self {
            dir: config.input_dir.clone(),
            snapshot_extension: config.snapshot_extension.clone(),
            metadata_extension: config.metadata_extension.clone(),
            load_module_marker: config.load_module_marker.clone(),
        }
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Load every snapshot in version order.
    ///
    /// # Errors
    /// Fails on the first snapshot that cannot be read or does not match the
    /// expected structure; the error names the offending file.
    pub fn load_versions(&self) -> Result<Vec<VersionRecord>> {
        self.files_with_extension(&self.snapshot_extension)?
            .into_iter()
            .map(|(version_id, path)| self.load_version(version_id, &path))
            .collect()
    }

    /// Load commit metadata in version order.
    ///
    /// Files without the `": "` separator are skipped and reported in
    /// [`CommitLoad::skipped`].
    ///
    /// # Errors
    /// Returns an error if the folder or a metadata file cannot be read.
    pub fn load_commits(&self) -> Result<CommitLoad> {
        let mut load = CommitLoad::default();
        for (version_id, path) in self.files_with_extension(&self.metadata_extension)? {
            let content = read_file(&path)?;
            match CommitRecord::parse(&version_id, &content) {
                Some(record) => load.records.push(record),
                None => load.skipped.push(path),
            }
        }
        Ok(load)
    }

    fn load_version(&self, version_id: String, path: &Path) -> Result<VersionRecord> {
        let content = read_file(path)?;
        let raw: RawSnapshot =
            serde_json::from_str(&content).map_err(|source| TimelineError::SnapshotParse {
                path: path.to_path_buf(),
                source,
            })?;

        let summary = raw.summary;
        let file_reference_counts = raw
            .files
            .into_iter()
            .filter(|(file, _)| !file.contains(&self.load_module_marker))
            .map(|(file, entry)| (file, entry.1))
            .collect();

        Ok(VersionRecord {
            version_id,
            core: summary.core,
            load: summary.load,
            core_score: summary.core_score,
            load_score: summary.load_score,
            load_dependency_warnings: summary.load_dep.1,
            file_reference_counts,
        })
    }

    /// `(file stem, path)` for each regular file with the extension, sorted by
    /// file name.
    fn files_with_extension(&self, extension: &str) -> Result<Vec<(String, PathBuf)>> {
        let mut files = Vec::new();
        let walker = WalkDir::new(&self.dir)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name();

        for entry in walker {
            let entry = entry.map_err(|source| TimelineError::DirectoryRead {
                path: self.dir.clone(),
                source,
            })?;
            if !entry.file_type().is_file() {
                continue;
            }
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some(extension) {
                continue;
            }
            let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
                return Err(TimelineError::InvalidSnapshot {
                    path: path.to_path_buf(),
                    reason: "file name is not valid UTF-8".to_string(),
                });
            };
            files.push((stem.to_string(), path.to_path_buf()));
        }

        Ok(files)
    }
}

fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| TimelineError::FileRead {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
