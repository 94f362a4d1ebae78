use std::error::Error as _;
use std::path::{Path, PathBuf};

use crate::cli::Cli;
use crate::config::{ConfigLoader, FileConfigLoader, ReportConfig, validate_config};
use crate::output::ErrorOutput;
use crate::report::{CommitRow, ReportInput, ReportRenderer, ReportSummary};
use crate::series::TimelineSeries;
use crate::snapshot::{SnapshotLoader, load_release_versions, recent_commits};
use crate::{EXIT_ERROR, EXIT_SUCCESS, Result};

/// Result of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportOutcome {
    pub output: PathBuf,
    pub summary: ReportSummary,
    /// Metadata files dropped for lacking the `": "` separator.
    pub skipped_metadata: Vec<PathBuf>,
}

#[must_use]
pub fn run_report(cli: &Cli) -> i32 {
    let diagnostics = ErrorOutput::new(cli.color.into());
    match run_report_impl(cli, &diagnostics) {
        Ok(outcome) => {
            if !cli.quiet {
                println!(
                    "Timeline visualization saved to {}",
                    outcome.output.display()
                );
            }
            EXIT_SUCCESS
        }
        Err(e) => {
            let message = e.to_string();
            let detail = e
                .source()
                .map(ToString::to_string)
                .filter(|detail| !message.contains(detail.as_str()));
            diagnostics.print_error_with_detail(
                e.error_type(),
                &message,
                detail.as_deref(),
                e.suggestion(),
            );
            EXIT_ERROR
        }
    }
}

/// Load configuration and run the pipeline.
///
/// # Errors
/// Returns an error if configuration, input loading or rendering fails.
pub fn run_report_impl(cli: &Cli, diagnostics: &ErrorOutput) -> Result<ReportOutcome> {
    let config = load_config(cli)?;
    generate_report(&config, diagnostics)
}

/// Configuration from file (unless disabled) with command-line overrides.
///
/// # Errors
/// Returns an error if the configuration file cannot be read or the final
/// configuration is invalid.
pub fn load_config(cli: &Cli) -> Result<ReportConfig> {
    let mut config = if cli.no_config {
        ReportConfig::default()
    } else {
        let loader = FileConfigLoader::new();
        match &cli.config {
            Some(path) => loader.load_from_path(path)?,
            None => loader.load()?,
        }
    };

    apply_cli_overrides(&mut config, cli);
    validate_config(&config)?;
    Ok(config)
}

pub fn apply_cli_overrides(config: &mut ReportConfig, cli: &Cli) {
    if let Some(input) = &cli.input {
        config.input_dir.clone_from(input);
    }
    if let Some(output) = &cli.output {
        config.output.clone_from(output);
    }
    if let Some(threshold) = cli.exclusion_threshold {
        config.exclusion_threshold = threshold;
    }
    if let Some(window) = cli.commit_window {
        config.commit_window = window;
    }
}

/// Load every artifact from the input folder, derive the series and write
/// the report.
///
/// # Errors
/// Returns an error if a snapshot cannot be parsed, the folder or a metadata
/// file cannot be read, or a page fails to render. A missing release list
/// and malformed metadata lines are reported as warnings instead.
pub fn generate_report(config: &ReportConfig, diagnostics: &ErrorOutput) -> Result<ReportOutcome> {
    let loader = SnapshotLoader::from_config(config);
    let versions = loader.load_versions()?;
    let commits = loader.load_commits()?;
    warn_skipped_metadata(&commits.skipped, diagnostics);

    let releases = load_release_versions(&config.input_dir.join(&config.release_file), diagnostics);
    let series = TimelineSeries::build(&versions);
    let rows: Vec<CommitRow> = recent_commits(&commits.records, config.commit_window)
        .iter()
        .map(|record| {
            CommitRow::from_record(record, config.message_wrap_width, config.message_max_lines)
        })
        .collect();

    let input = ReportInput {
        series: &series,
        releases: &releases,
        commits: &rows,
    };
    let summary = ReportRenderer::from_config(config).write_report(&input, &config.output)?;

    Ok(ReportOutcome {
        output: config.output.clone(),
        summary,
        skipped_metadata: commits.skipped,
    })
}

fn warn_skipped_metadata(skipped: &[PathBuf], diagnostics: &ErrorOutput) {
    if skipped.is_empty() {
        return;
    }
    let names = skipped
        .iter()
        .map(|path| file_name(path))
        .collect::<Vec<_>>()
        .join(", ");
    diagnostics.print_warning_with_detail(
        &format!(
            "Skipped {} metadata file(s) without a \"<commit-id>: <message>\" line",
            skipped.len()
        ),
        Some(&names),
        None,
    );
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().into_owned())
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
