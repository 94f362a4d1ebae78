//! Report rendering: turns aligned series, release highlights and commit
//! rows into the fixed six-page document.

mod document;
mod pages;
mod template;

use std::io::Write;
use std::path::Path;

pub use document::{Figure, Page, ReportDocument};
pub use pages::{
    CORE_TITLE, LOAD_TITLE, PageContext, REFERENCES_TITLE, SCORES_TITLE, WARNINGS_TITLE,
    commits_title,
};
pub use template::{DOCUMENT_FOOTER, DOCUMENT_TITLE, document_header, page_section};

use crate::config::{RenderConfig, ReportConfig};
use crate::error::Result;
use crate::output::truncate_message;
use crate::series::{ExclusionPolicy, TimelineSeries};
use crate::snapshot::{CommitRecord, ReleaseVersionSet};

/// Pages in every report.
pub const PAGE_COUNT: usize = 6;

/// One line of the commit history table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitRow {
    pub version_id: String,
    pub commit_id: String,
    /// Wrapped and truncated to fit the message cell.
    pub message: String,
}

impl CommitRow {
    #[must_use]
    pub fn from_record(record: &CommitRecord, wrap_width: usize, max_lines: usize) -> Self {
        Self {
            version_id: record.version_id.clone(),
            commit_id: record.commit_id.clone(),
            message: truncate_message(&record.commit_message, wrap_width, max_lines),
        }
    }
}

/// Everything the renderer draws.
#[derive(Debug, Clone, Copy)]
pub struct ReportInput<'a> {
    pub series: &'a TimelineSeries,
    pub releases: &'a ReleaseVersionSet,
    /// Already windowed to the most recent records, in version order.
    pub commits: &'a [CommitRow],
}

/// What a rendered report contains.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportSummary {
    pub pages: usize,
    pub versions: usize,
    pub highlighted: usize,
    pub plotted_files: usize,
    pub excluded_files: usize,
    pub commits: usize,
}

/// Renders reports with an explicit style; holds no global state.
#[derive(Debug, Clone)]
pub struct ReportRenderer {
    render: RenderConfig,
    policy: ExclusionPolicy,
    commit_window: usize,
}

impl ReportRenderer {
    #[must_use]
    pub const fn new(render: RenderConfig, policy: ExclusionPolicy, commit_window: usize) -> Self {
        Self {
            render,
            policy,
            commit_window,
        }
    }

    #[must_use]
    pub fn from_config(config: &ReportConfig) -> Self {
        Self::new(
            config.render.clone(),
            ExclusionPolicy::new(config.exclusion_threshold),
            config.commit_window,
        )
    }

    #[must_use]
    pub const fn render_config(&self) -> &RenderConfig {
        &self.render
    }

    /// Build all six pages in document order, stopping at the first failure.
    ///
    /// # Errors
    /// Returns a render error from the first page that cannot be built.
    pub fn pages(&self, input: &ReportInput<'_>) -> Result<(Vec<Page>, ReportSummary)> {
        let mut pages = Vec::new();
        let summary = self.each_page(input, |page| {
            pages.push(page);
            Ok(())
        })?;
        Ok((pages, summary))
    }

    /// Build the pages one at a time, handing each to `sink` before the next
    /// one is drawn.
    fn each_page(
        &self,
        input: &ReportInput<'_>,
        mut sink: impl FnMut(Page) -> Result<()>,
    ) -> Result<ReportSummary> {
        let series = input.series;
        let highlights = input.releases.highlighted_indices(&series.versions);
        let ctx = PageContext {
            render: &self.render,
            versions: &series.versions,
            highlights: &highlights,
        };
        let outcome = self.policy.partition(&series.file_references);

        sink(pages::core_page(&ctx, series)?)?;
        sink(pages::load_page(&ctx, series)?)?;
        sink(pages::references_page(
            &ctx,
            &outcome,
            series.file_references.max_value(),
        )?)?;
        sink(pages::scores_page(&ctx, series)?)?;
        sink(pages::warnings_page(&ctx, series)?)?;
        sink(pages::commits_page(
            &self.render,
            input.commits,
            self.commit_window,
        )?)?;

        Ok(ReportSummary {
            pages: PAGE_COUNT,
            versions: series.len(),
            highlighted: highlights.len(),
            plotted_files: outcome.plotted.len(),
            excluded_files: outcome.excluded.len(),
            commits: input.commits.len(),
        })
    }

    /// Render into any writer and return it after the document is closed.
    ///
    /// # Errors
    /// Returns an error if a page fails to render or the writer fails.
    pub fn render_to<W: Write>(
        &self,
        input: &ReportInput<'_>,
        writer: W,
    ) -> Result<(W, ReportSummary)> {
        let mut document = ReportDocument::new(writer, &self.render)?;
        let summary = self.append_pages(&mut document, input)?;
        Ok((document.finish()?, summary))
    }

    /// Render the report to `path`.
    ///
    /// # Errors
    /// Returns an error if the file cannot be created, a page fails to
    /// render, or writing fails. The file is flushed and closed either way.
    pub fn write_report(&self, input: &ReportInput<'_>, path: &Path) -> Result<ReportSummary> {
        let mut document = ReportDocument::create(path, &self.render)?;
        let summary = self.append_pages(&mut document, input)?;
        document.finish()?;
        Ok(summary)
    }

    fn append_pages<W: Write>(
        &self,
        document: &mut ReportDocument<W>,
        input: &ReportInput<'_>,
    ) -> Result<ReportSummary> {
        self.each_page(input, |page| document.append(&page))
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
