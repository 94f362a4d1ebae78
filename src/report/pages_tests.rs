use std::collections::BTreeMap;

use super::*;
use crate::error::TimelineError;
use crate::series::ExclusionPolicy;
use crate::snapshot::{CodeMetric, VersionRecord};

fn version(id: &str, core: (u64, u64), files: &[(&str, u64)]) -> VersionRecord {
    VersionRecord {
        version_id: id.to_string(),
        core: CodeMetric::from(core),
        load: CodeMetric::from((20, 2)),
        core_score: 8.5,
        load_score: 7.0,
        load_dependency_warnings: 1,
        file_reference_counts: files
            .iter()
            .map(|(f, c)| ((*f).to_string(), *c))
            .collect::<BTreeMap<_, _>>(),
    }
}

fn series() -> TimelineSeries {
    TimelineSeries::build(&[
        version("v1.0", (100, 5), &[("a.py", 5), ("b.py", 1)]),
        version("v1.1", (150, 6), &[("a.py", 8), ("c.py", 4)]),
    ])
}

#[test]
fn core_page_annotates_last_values() {
    let render = RenderConfig::default();
    let series = series();
    let ctx = PageContext {
        render: &render,
        versions: &series.versions,
        highlights: &[0, 1],
    };

    let page = core_page(&ctx, &series).unwrap();

    assert_eq!(page.title(), CORE_TITLE);
    assert!(page.svg().contains(">File Count</text>"));
    assert!(page.svg().contains(">Lines of Code</text>"));
    assert!(page.svg().contains("font-size=\"9\">6</text>"));
    assert_eq!(page.svg().matches("stroke=\"#B8860B\"").count(), 2);
}

#[test]
fn load_page_uses_load_metrics() {
    let render = RenderConfig::default();
    let series = series();
    let ctx = PageContext {
        render: &render,
        versions: &series.versions,
        highlights: &[],
    };

    let page = load_page(&ctx, &series).unwrap();

    assert_eq!(page.title(), LOAD_TITLE);
    assert!(page.svg().contains("<title>Lines of Code v1.1: 20</title>"));
    assert!(!page.svg().contains("#B8860B"));
}

#[test]
fn references_page_plots_and_lists_excluded() {
    let render = RenderConfig::default();
    let series = series();
    let ctx = PageContext {
        render: &render,
        versions: &series.versions,
        highlights: &[0],
    };
    let outcome = ExclusionPolicy::default().partition(&series.file_references);

    let page = references_page(&ctx, &outcome, series.file_references.max_value()).unwrap();
    let svg = page.svg();

    assert!(svg.contains(">a.py (8)</text>"));
    assert!(svg.contains(">c.py (4)</text>"));
    assert!(svg.contains(">Excluded Files:</tspan>"));
    assert!(svg.contains(">b.py (0)</tspan>"));
    assert!(!svg.contains("#B8860B"));
}

#[test]
fn references_page_without_exclusions_has_no_note() {
    let render = RenderConfig::default();
    let series = TimelineSeries::build(&[version("1", (1, 1), &[("a.py", 9)])]);
    let ctx = PageContext {
        render: &render,
        versions: &series.versions,
        highlights: &[],
    };
    let outcome = ExclusionPolicy::default().partition(&series.file_references);

    let page = references_page(&ctx, &outcome, 9).unwrap();
    assert!(!page.svg().contains("Excluded Files:"));
}

#[test]
fn scores_and_warnings_pages() {
    let render = RenderConfig::default();
    let series = series();
    let ctx = PageContext {
        render: &render,
        versions: &series.versions,
        highlights: &[1],
    };

    let scores = scores_page(&ctx, &series).unwrap();
    assert_eq!(scores.title(), SCORES_TITLE);
    assert!(scores.svg().contains(">Core Score</text>"));
    assert!(scores.svg().contains(">Load Score</text>"));
    assert!(scores.svg().contains("#B8860B"));

    let warnings = warnings_page(&ctx, &series).unwrap();
    assert_eq!(warnings.title(), WARNINGS_TITLE);
    assert!(warnings.svg().contains(">Dependency Warnings</text>"));
    assert!(!warnings.svg().contains("#B8860B"));
}

#[test]
fn misaligned_metric_is_render_error() {
    let render = RenderConfig::default();
    let mut series = series();
    series.core_lines.pop();
    let ctx = PageContext {
        render: &render,
        versions: &series.versions,
        highlights: &[],
    };

    let err = core_page(&ctx, &series).unwrap_err();
    assert!(matches!(err, TimelineError::Render(_)));
}

#[test]
fn commits_page_lists_rows() {
    let rows = vec![CommitRow {
        version_id: "v1.0".to_string(),
        commit_id: "abc123".to_string(),
        message: "Fix parser".to_string(),
    }];

    let page = commits_page(&RenderConfig::default(), &rows, 60).unwrap();

    assert_eq!(page.title(), "Version Commit History (last 60)");
    assert!(page.svg().contains(">abc123</text>"));
    assert!(page.svg().contains(">Fix parser</text>"));
    assert!(page.svg().contains("height=\"1100\""));
}
