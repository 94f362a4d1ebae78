use std::collections::BTreeMap;

use super::*;
use crate::snapshot::VersionRecord;

fn references(entries: &[(&str, &[u64])]) -> FileReferenceSeries {
    let len = entries.first().map_or(0, |(_, s)| s.len());
    let versions: Vec<VersionRecord> = (0..len)
        .map(|i| VersionRecord {
            version_id: format!("{i}"),
            core: Default::default(),
            load: Default::default(),
            core_score: 0.0,
            load_score: 0.0,
            load_dependency_warnings: 0,
            file_reference_counts: entries
                .iter()
                .map(|(f, s)| ((*f).to_string(), s[i]))
                .collect::<BTreeMap<_, _>>(),
        })
        .collect();
    FileReferenceSeries::from_versions(&versions)
}

#[test]
fn default_threshold_is_three() {
    assert_eq!(ExclusionPolicy::default().threshold(), 3);
}

#[test]
fn only_last_value_matters() {
    let policy = ExclusionPolicy::default();

    assert!(!policy.is_plotted(&[100, 100, 2]));
    assert!(policy.is_plotted(&[0, 0, 4]));
}

#[test]
fn threshold_is_inclusive_for_exclusion() {
    let policy = ExclusionPolicy::new(3);

    assert!(!policy.is_plotted(&[3]));
    assert!(policy.is_plotted(&[4]));
}

#[test]
fn empty_series_is_excluded() {
    assert!(!ExclusionPolicy::default().is_plotted(&[]));
}

#[test]
fn partitions_scenario_files() {
    let refs = references(&[("a.py", &[5, 8]), ("b.py", &[1, 0]), ("c.py", &[0, 4])]);

    let outcome = ExclusionPolicy::default().partition(&refs);

    let plotted: Vec<_> = outcome.plotted.keys().copied().collect();
    assert_eq!(plotted, ["a.py", "c.py"]);
    assert_eq!(
        outcome.excluded,
        [ExcludedFile {
            file: "b.py",
            last_value: 0
        }]
    );
}

#[test]
fn plotted_keeps_full_series() {
    let refs = references(&[("a.py", &[5, 8])]);
    let outcome = ExclusionPolicy::default().partition(&refs);

    assert_eq!(outcome.plotted["a.py"], &[5, 8]);
}

#[test]
fn excluded_display_includes_value() {
    let file = ExcludedFile {
        file: "util/io.py",
        last_value: 2,
    };
    assert_eq!(file.to_string(), "util/io.py (2)");
}

#[test]
fn custom_threshold() {
    let refs = references(&[("a.py", &[5, 8]), ("c.py", &[0, 4])]);
    let outcome = ExclusionPolicy::new(5).partition(&refs);

    assert_eq!(outcome.plotted.len(), 1);
    assert_eq!(outcome.excluded.len(), 1);
    assert_eq!(outcome.excluded[0].file, "c.py");
}
