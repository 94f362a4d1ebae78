use indexmap::IndexMap;

use crate::config::DEFAULT_EXCLUSION_THRESHOLD;

use super::FileReferenceSeries;

/// Splits per-file series into drawn lines and a summarized excluded list.
///
/// Only the most recent value counts: a file with history `[100, 100, 2]`
/// is excluded, `[0, 0, 4]` is plotted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExclusionPolicy {
    threshold: u64,
}

impl Default for ExclusionPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_EXCLUSION_THRESHOLD)
    }
}

/// A file left off the chart, with its final reference count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExcludedFile<'a> {
    pub file: &'a str,
    pub last_value: u64,
}

impl std::fmt::Display for ExcludedFile<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.file, self.last_value)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExclusionOutcome<'a> {
    /// Files drawn individually, in lexical order.
    pub plotted: IndexMap<&'a str, &'a [u64]>,
    pub excluded: Vec<ExcludedFile<'a>>,
}

impl ExclusionPolicy {
    #[must_use]
    pub const fn new(threshold: u64) -> Self {
        Self { threshold }
    }

    #[must_use]
    pub const fn threshold(&self) -> u64 {
        self.threshold
    }

    /// A file is plotted iff its last value is strictly above the threshold.
    /// An empty series counts as 0.
    #[must_use]
    pub fn is_plotted(&self, series: &[u64]) -> bool {
        series.last().copied().unwrap_or(0) > self.threshold
    }

    #[must_use]
    pub fn partition<'a>(&self, references: &'a FileReferenceSeries) -> ExclusionOutcome<'a> {
        let mut outcome = ExclusionOutcome::default();
        for (file, series) in references.iter() {
            if self.is_plotted(series) {
                outcome.plotted.insert(file, series);
            } else {
                outcome.excluded.push(ExcludedFile {
                    file,
                    last_value: series.last().copied().unwrap_or(0),
                });
            }
        }
        outcome
    }
}

#[cfg(test)]
#[path = "exclusion_tests.rs"]
mod tests;
