use std::collections::BTreeMap;

use super::*;
use crate::snapshot::CodeMetric;

fn version(
    id: &str,
    core: (u64, u64),
    core_score: f64,
    warnings: u64,
    refs: &[(&str, u64)],
) -> VersionRecord {
    VersionRecord {
        version_id: id.to_string(),
        core: core.into(),
        load: CodeMetric { lines: 20, files: 2 },
        core_score,
        load_score: 7.0,
        load_dependency_warnings: warnings,
        file_reference_counts: refs
            .iter()
            .map(|(f, c)| ((*f).to_string(), *c))
            .collect::<BTreeMap<_, _>>(),
    }
}

fn two_versions() -> Vec<VersionRecord> {
    vec![
        version("v1.0", (100, 5), 8.5, 1, &[("a.py", 5), ("b.py", 1)]),
        version("v1.1", (150, 6), 8.7, 0, &[("a.py", 8), ("c.py", 4)]),
    ]
}

#[test]
fn scalar_series_follow_version_order() {
    let series = TimelineSeries::build(&two_versions());

    assert_eq!(series.versions, ["v1.0", "v1.1"]);
    assert_eq!(series.core_lines, [100, 150]);
    assert_eq!(series.core_files, [5, 6]);
    assert_eq!(series.load_lines, [20, 20]);
    assert_eq!(series.load_files, [2, 2]);
    assert_eq!(series.core_scores, [8.5, 8.7]);
    assert_eq!(series.load_scores, [7.0, 7.0]);
    assert_eq!(series.dependency_warnings, [1, 0]);
}

#[test]
fn file_union_is_sorted() {
    let series = TimelineSeries::build(&two_versions());

    let files: Vec<_> = series.file_references.files().collect();
    assert_eq!(files, ["a.py", "b.py", "c.py"]);
}

#[test]
fn absent_files_are_zero_filled() {
    let series = TimelineSeries::build(&two_versions());
    let refs = &series.file_references;

    assert_eq!(refs.get("a.py"), Some(&[5, 8][..]));
    assert_eq!(refs.get("b.py"), Some(&[1, 0][..]));
    assert_eq!(refs.get("c.py"), Some(&[0, 4][..]));
}

#[test]
fn every_series_matches_version_count() {
    let versions = vec![
        version("001", (1, 1), 1.0, 0, &[("x", 1)]),
        version("002", (2, 1), 1.0, 0, &[]),
        version("003", (3, 1), 1.0, 0, &[("y", 9)]),
        version("004", (4, 1), 1.0, 0, &[("x", 2), ("z", 1)]),
    ];
    let series = TimelineSeries::build(&versions);

    assert_eq!(series.len(), 4);
    for s in [
        &series.core_lines,
        &series.core_files,
        &series.load_lines,
        &series.load_files,
        &series.dependency_warnings,
    ] {
        assert_eq!(s.len(), 4);
    }
    assert_eq!(series.core_scores.len(), 4);
    for (_, s) in series.file_references.iter() {
        assert_eq!(s.len(), 4);
    }
    assert_eq!(series.file_references.get("y"), Some(&[0, 0, 9, 0][..]));
}

#[test]
fn empty_history_builds_empty_series() {
    let series = TimelineSeries::build(&[]);

    assert!(series.is_empty());
    assert!(series.file_references.is_empty());
    assert_eq!(series.file_references.max_value(), 0);
}

#[test]
fn max_value_spans_all_files() {
    let series = TimelineSeries::build(&two_versions());
    assert_eq!(series.file_references.max_value(), 8);
}
