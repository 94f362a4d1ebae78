#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the quality-timeline binary.
#[macro_export]
macro_rules! quality_timeline {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("quality-timeline"))
    };
}

/// Input folder name used when the tool runs with its default configuration.
pub const INPUT_DIR: &str = "analysis_workdir";

/// Report name used when the tool runs with its default configuration.
pub const REPORT_NAME: &str = "timeline_visualization.html";

/// A temp working directory with an input folder, room for the report and
/// an optional config file.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    /// Creates a fixture with an empty input folder.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp directory");
        fs::create_dir(dir.path().join(INPUT_DIR)).expect("Failed to create input folder");
        Self { dir }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn input_dir(&self) -> PathBuf {
        self.dir.path().join(INPUT_DIR)
    }

    pub fn report_path(&self) -> PathBuf {
        self.dir.path().join(REPORT_NAME)
    }

    /// Writes a file inside the input folder.
    pub fn input_file(&self, name: &str, content: &str) -> &Self {
        fs::write(self.input_dir().join(name), content).expect("Failed to write input file");
        self
    }

    pub fn snapshot(&self, version: &str, content: &str) -> &Self {
        self.input_file(&format!("{version}.json"), content)
    }

    pub fn meta(&self, version: &str, line: &str) -> &Self {
        self.input_file(&format!("{version}.meta"), line)
    }

    pub fn releases(&self, content: &str) -> &Self {
        self.input_file("release_versions.info", content)
    }

    /// Writes `.quality-timeline.toml` at the fixture root.
    pub fn config(&self, content: &str) -> &Self {
        fs::write(self.dir.path().join(".quality-timeline.toml"), content)
            .expect("Failed to write config file");
        self
    }

    pub fn read_report(&self) -> String {
        self.read(REPORT_NAME)
    }

    pub fn read(&self, relative_path: &str) -> String {
        fs::read_to_string(self.dir.path().join(relative_path)).expect("Failed to read report")
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

pub const SNAPSHOT_V1_0: &str = r#"{
    "summary": {"core": [100, 5], "load": [20, 2], "core_score": 8.5, "load_score": 7.0, "load_dep": [0, 1]},
    "files": {"a.py": [10, 5], "b.py": [3, 1]}
}"#;

pub const SNAPSHOT_V1_1: &str = r#"{
    "summary": {"core": [150, 6], "load": [20, 2], "core_score": 8.7, "load_score": 7.0, "load_dep": [0, 0]},
    "files": {"a.py": [12, 8], "c.py": [2, 4]}
}"#;
