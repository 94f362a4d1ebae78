use std::fs;

use clap::Parser;
use tempfile::TempDir;

use super::*;
use crate::error::TimelineError;

const SNAPSHOT_V1_0: &str = r#"{
    "summary": {"core": [100, 5], "load": [20, 2], "core_score": 8.5, "load_score": 7.0, "load_dep": [0, 1]},
    "files": {"a.py": [10, 5], "b.py": [3, 1]}
}"#;

const SNAPSHOT_V1_1: &str = r#"{
    "summary": {"core": [150, 6], "load": [20, 2], "core_score": 8.7, "load_score": 7.0, "load_dep": [0, 0]},
    "files": {"a.py": [12, 8], "c.py": [2, 4]}
}"#;

struct Workdir {
    dir: TempDir,
}

impl Workdir {
    fn new() -> Self {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("input")).unwrap();
        Self { dir }
    }

    fn write(&self, name: &str, content: &str) -> &Self {
        fs::write(self.dir.path().join("input").join(name), content).unwrap();
        self
    }

    fn config(&self) -> ReportConfig {
        ReportConfig {
            input_dir: self.dir.path().join("input"),
            output: self.dir.path().join("timeline.html"),
            ..ReportConfig::default()
        }
    }
}

fn quiet() -> ErrorOutput {
    ErrorOutput::with_colors(false)
}

#[test]
fn generates_report_from_folder() {
    let work = Workdir::new();
    work.write("v1.0.json", SNAPSHOT_V1_0)
        .write("v1.1.json", SNAPSHOT_V1_1)
        .write("v1.0.meta", "abc123: Initial release")
        .write("v1.1.meta", "def456: Add c module")
        .write("release_versions.info", "v1.0 v1.1");
    let config = work.config();

    let outcome = generate_report(&config, &quiet()).unwrap();

    assert_eq!(outcome.output, config.output);
    assert_eq!(outcome.summary.versions, 2);
    assert_eq!(outcome.summary.highlighted, 2);
    assert_eq!(outcome.summary.plotted_files, 2);
    assert_eq!(outcome.summary.excluded_files, 1);
    assert_eq!(outcome.summary.commits, 2);
    assert!(outcome.skipped_metadata.is_empty());

    let html = fs::read_to_string(&config.output).unwrap();
    assert!(html.contains(">def456</text>"));
    assert!(html.contains(">b.py (0)</tspan>"));
}

#[test]
fn metadata_without_separator_is_skipped() {
    let work = Workdir::new();
    work.write("v1.0.json", SNAPSHOT_V1_0)
        .write("v1.0.meta", "abc123 no colon here");

    let outcome = generate_report(&work.config(), &quiet()).unwrap();

    assert_eq!(outcome.summary.commits, 0);
    assert_eq!(outcome.skipped_metadata.len(), 1);
    let html = fs::read_to_string(outcome.output).unwrap();
    assert!(!html.contains("abc123"));
}

#[test]
fn only_recent_commits_are_kept() {
    let work = Workdir::new();
    for i in 0..70 {
        work.write(&format!("{i:03}.meta"), &format!("c{i:03}: change {i}"));
    }
    let config = work.config();

    let outcome = generate_report(&config, &quiet()).unwrap();

    assert_eq!(outcome.summary.commits, 60);
    let html = fs::read_to_string(&config.output).unwrap();
    assert!(!html.contains(">c009</text>"));
    assert!(html.contains(">c010</text>"));
    assert!(html.contains(">c069</text>"));
    assert!(html.find(">c010</text>").unwrap() < html.find(">c069</text>").unwrap());
}

#[test]
fn missing_release_list_disables_highlights() {
    let work = Workdir::new();
    work.write("v1.0.json", SNAPSHOT_V1_0);

    let outcome = generate_report(&work.config(), &quiet()).unwrap();

    assert_eq!(outcome.summary.highlighted, 0);
}

#[test]
fn malformed_snapshot_aborts() {
    let work = Workdir::new();
    work.write("v1.0.json", SNAPSHOT_V1_0)
        .write("v1.1.json", r#"{"summary": {}}"#);
    let config = work.config();

    let err = generate_report(&config, &quiet()).unwrap_err();

    assert!(matches!(err, TimelineError::SnapshotParse { .. }));
    assert!(err.to_string().contains("v1.1.json"));
    assert!(!config.output.exists());
}

#[test]
fn missing_input_folder_is_error() {
    let work = Workdir::new();
    let config = ReportConfig {
        input_dir: work.dir.path().join("absent"),
        ..work.config()
    };

    assert!(generate_report(&config, &quiet()).is_err());
}

#[test]
fn cli_overrides_replace_config_values() {
    let cli = Cli::parse_from([
        "quality-timeline",
        "--input",
        "elsewhere",
        "--output",
        "r.html",
        "--exclusion-threshold",
        "7",
        "--commit-window",
        "10",
    ]);
    let mut config = ReportConfig::default();

    apply_cli_overrides(&mut config, &cli);

    assert_eq!(config.input_dir, PathBuf::from("elsewhere"));
    assert_eq!(config.output, PathBuf::from("r.html"));
    assert_eq!(config.exclusion_threshold, 7);
    assert_eq!(config.commit_window, 10);
    assert_eq!(config.message_wrap_width, 105);
}

#[test]
fn no_config_uses_defaults() {
    let cli = Cli::parse_from(["quality-timeline", "--no-config"]);
    let config = load_config(&cli).unwrap();
    assert_eq!(config, ReportConfig::default());
}

#[test]
fn zero_commit_window_is_rejected() {
    let cli = Cli::parse_from(["quality-timeline", "--no-config", "--commit-window", "0"]);
    let err = load_config(&cli).unwrap_err();
    assert!(matches!(err, TimelineError::Config(_)));
}

#[test]
fn explicit_missing_config_is_error() {
    let work = Workdir::new();
    let path = work.dir.path().join("missing.toml");
    let cli = Cli::parse_from(["quality-timeline", "--config", path.to_str().unwrap()]);

    assert!(load_config(&cli).is_err());
}
