//! Tagged release versions used to highlight positions on the timeline.

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use crate::error::{Result, TimelineError};
use crate::output::ErrorOutput;

/// Normalized release version identifiers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReleaseVersionSet {
    versions: BTreeSet<String>,
}

impl ReleaseVersionSet {
    /// Parse whitespace-separated tags such as `v1.0 v1.1`.
    #[must_use]
    pub fn parse(content: &str) -> Self {
        let versions = content
            .split_whitespace()
            .map(normalize_version)
            .filter(|v| !v.is_empty())
            .map(str::to_string)
            .collect();
        Self { versions }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.versions.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.versions.len()
    }

    /// Whether `version_id` names a release. The id is normalized the same
    /// way as the tags, so `v1.0` and `1.0` both match a `v1.0` tag.
    #[must_use]
    pub fn contains(&self, version_id: &str) -> bool {
        self.versions.contains(normalize_version(version_id))
    }

    /// Timeline positions that get a highlight marker.
    #[must_use]
    pub fn highlighted_indices<S: AsRef<str>>(&self, version_ids: &[S]) -> Vec<usize> {
        version_ids
            .iter()
            .enumerate()
            .filter(|(_, id)| self.contains(id.as_ref()))
            .map(|(i, _)| i)
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.versions.iter().map(String::as_str)
    }
}

/// Strip one leading non-numeric prefix character (`v1.0` → `1.0`) and
/// surrounding whitespace.
#[must_use]
pub fn normalize_version(tag: &str) -> &str {
    let tag = tag.trim();
    match tag.chars().next() {
        Some(first) if !first.is_ascii_digit() => tag[first.len_utf8()..].trim(),
        _ => tag,
    }
}

/// Read the release list.
///
/// # Errors
/// Returns an error if the file cannot be read.
pub fn read_release_versions(path: &Path) -> Result<ReleaseVersionSet> {
    let content = fs::read_to_string(path).map_err(|source| TimelineError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(ReleaseVersionSet::parse(&content))
}

/// Read the release list, degrading to an empty set on failure.
///
/// A missing or unreadable file only emits a warning.
#[must_use]
pub fn load_release_versions(path: &Path, diagnostics: &ErrorOutput) -> ReleaseVersionSet {
    match read_release_versions(path) {
        Ok(set) => set,
        Err(err) => {
            let detail = std::error::Error::source(&err).map(ToString::to_string);
            diagnostics.print_warning_with_detail(
                &format!("Error loading {}, release highlighting disabled", path.display()),
                detail.as_deref(),
                None,
            );
            ReleaseVersionSet::default()
        }
    }
}

#[cfg(test)]
#[path = "release_tests.rs"]
mod tests;
