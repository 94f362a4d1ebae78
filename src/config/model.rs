use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Files whose most recent reference count is at or below this value are
/// listed as excluded instead of being drawn.
pub const DEFAULT_EXCLUSION_THRESHOLD: u64 = 3;

/// Number of most recent commit records shown on the history page.
pub const DEFAULT_COMMIT_WINDOW: usize = 60;

/// Top-level report configuration (`.quality-timeline.toml`).
///
/// Every field has a default, so an empty file is a valid configuration and
/// reproduces the fixed folder conventions.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ReportConfig {
    /// Folder holding snapshots, metadata files and the release list.
    pub input_dir: PathBuf,

    /// Report document path, relative to the working directory.
    pub output: PathBuf,

    /// Extension (without dot) of per-version snapshot files.
    pub snapshot_extension: String,

    /// Extension (without dot) of per-version commit metadata files.
    pub metadata_extension: String,

    /// Name of the release list inside `input_dir`.
    pub release_file: String,

    /// Paths containing this marker are load modules and never appear in
    /// the per-file reference chart.
    pub load_module_marker: String,

    pub exclusion_threshold: u64,

    pub commit_window: usize,

    /// Characters per commit message line.
    pub message_wrap_width: usize,

    /// Lines per commit message cell.
    pub message_max_lines: usize,

    pub render: RenderConfig,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from("./analysis_workdir"),
            output: PathBuf::from("timeline_visualization.html"),
            snapshot_extension: "json".to_string(),
            metadata_extension: "meta".to_string(),
            release_file: "release_versions.info".to_string(),
            load_module_marker: "LM_".to_string(),
            exclusion_threshold: DEFAULT_EXCLUSION_THRESHOLD,
            commit_window: DEFAULT_COMMIT_WINDOW,
            message_wrap_width: 105,
            message_max_lines: 1,
            render: RenderConfig::default(),
        }
    }
}

/// Page geometry and colors, handed explicitly to the renderer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct RenderConfig {
    /// Chart page size in SVG user units.
    pub page_width: f64,
    pub page_height: f64,

    /// The commit table page is taller than the chart pages.
    pub table_page_height: f64,

    pub title_font_size: f64,

    /// Dashed marker drawn at each release version.
    pub highlight_color: String,

    pub background: String,
    pub foreground: String,
    pub grid: String,

    /// Color for the file-count axis and series.
    pub files_color: String,

    /// Color for the lines-of-code axis and series.
    pub lines_color: String,

    pub core_score_color: String,
    pub load_score_color: String,
    pub warnings_color: String,

    /// Cycled over the per-file reference series.
    pub palette: Vec<String>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            page_width: 1500.0,
            page_height: 800.0,
            table_page_height: 1100.0,
            title_font_size: 18.0,
            highlight_color: "#B8860B".to_string(),
            background: "#000000".to_string(),
            foreground: "#ffffff".to_string(),
            grid: "#ffffff".to_string(),
            files_color: "#008080".to_string(),
            lines_color: "#800080".to_string(),
            core_score_color: "#a52a2a".to_string(),
            load_score_color: "#808080".to_string(),
            warnings_color: "#a52a2a".to_string(),
            palette: default_palette(),
        }
    }
}

fn default_palette() -> Vec<String> {
    [
        "#8dd3c7", "#feffb3", "#bfbbd9", "#fa8174", "#81b1d2", "#fdb462", "#b3de69", "#bc82bd",
        "#ccebc4", "#ffed6f",
    ]
    .iter()
    .map(ToString::to_string)
    .collect()
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
