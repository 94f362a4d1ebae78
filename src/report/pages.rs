//! Builders for the six report pages, in document order.

use crate::config::RenderConfig;
use crate::error::Result;
use crate::output::svg::{
    Annotation, ChartColor, LegendLayout, Marker, Series, SideNote, Table, TimelineChart,
    ValueAxis,
};
use crate::series::{ExclusionOutcome, TimelineSeries};

use super::CommitRow;
use super::document::{Figure, Page};

pub const CORE_TITLE: &str = "Core System Evolution: File Count & Lines of Code";
pub const LOAD_TITLE: &str = "Load Modules Evolution: File Count & Lines of Code";
pub const REFERENCES_TITLE: &str = "Core References Evolution Per File";
pub const SCORES_TITLE: &str = "Pylint Scores Evolution";
pub const WARNINGS_TITLE: &str = "Load Dependency Warnings Evolution";

/// Relative widths of the Version / Commit ID / Message columns.
const COMMIT_COLUMNS: [f64; 3] = [0.06, 0.30, 0.64];

/// Extra x domain, in version slots, right of the last version on the
/// reference page.
const REFERENCE_X_EXTENSION: f64 = 20.0;
const EXCLUDED_NOTE_OFFSET: f64 = 10.0;
const REFERENCE_LABEL_OFFSET: f64 = 15.0;

/// Shared inputs of the chart pages.
#[derive(Debug, Clone, Copy)]
pub struct PageContext<'a> {
    pub render: &'a RenderConfig,
    pub versions: &'a [String],
    /// Version indices that get a release marker.
    pub highlights: &'a [usize],
}

impl PageContext<'_> {
    fn chart(&self, title: &str, left: ValueAxis) -> TimelineChart {
        TimelineChart::new(title, self.versions.to_vec(), left)
            .with_size(self.render.page_width, self.render.page_height)
            .with_title_font_size(self.render.title_font_size)
    }

    fn highlighted(&self, chart: TimelineChart) -> TimelineChart {
        chart.with_highlights(
            self.highlights.to_vec(),
            ChartColor::hex(&self.render.highlight_color),
        )
    }

    fn palette_color(&self, index: usize) -> ChartColor {
        let palette = &self.render.palette;
        palette
            .get(index % palette.len().max(1))
            .map_or_else(|| ChartColor::css_var("fg"), |c| ChartColor::hex(c))
    }
}

#[allow(clippy::cast_precision_loss)]
fn as_values(series: &[u64]) -> Vec<f64> {
    series.iter().map(|&v| v as f64).collect()
}

fn seal(title: &str, svg: String) -> Result<Page> {
    let mut figure = Figure::new(title);
    figure.draw(svg);
    figure.into_page()
}

/// Annotation offsets of the file-count and lines series, in pixels.
#[derive(Debug, Clone, Copy)]
struct SizeOffsets {
    files: (f64, f64),
    lines: (f64, f64),
}

fn size_page(
    ctx: &PageContext<'_>,
    title: &str,
    files: &[u64],
    lines: &[u64],
    offsets: SizeOffsets,
) -> Result<Page> {
    let files_color = ChartColor::hex(&ctx.render.files_color);
    let lines_color = ChartColor::hex(&ctx.render.lines_color);

    let files_axis = ValueAxis::new("File Count", files_color.clone()).with_series(
        Series::new("File Count", as_values(files), files_color)
            .with_marker(Marker::Cross)
            .with_last_value_arrow(offsets.files.0, offsets.files.1),
    );
    let lines_axis = ValueAxis::new("Lines of Code", lines_color.clone()).with_series(
        Series::new("Lines of Code", as_values(lines), lines_color)
            .with_marker(Marker::Circle)
            .with_last_value_arrow(offsets.lines.0, offsets.lines.1),
    );

    let chart = ctx
        .highlighted(ctx.chart(title, files_axis))
        .with_right_axis(lines_axis)
        .with_legend(LegendLayout::Split);
    seal(title, chart.build()?)
}

/// Page 1: core file count and lines of code.
///
/// # Errors
/// Returns a render error if the series are not aligned with the versions.
pub fn core_page(ctx: &PageContext<'_>, series: &TimelineSeries) -> Result<Page> {
    let offsets = SizeOffsets {
        files: (10.0, 0.0),
        lines: (10.0, 0.0),
    };
    size_page(ctx, CORE_TITLE, &series.core_files, &series.core_lines, offsets)
}

/// Page 2: load module file count and lines of code. The two end labels
/// are pushed apart vertically.
///
/// # Errors
/// Returns a render error if the series are not aligned with the versions.
pub fn load_page(ctx: &PageContext<'_>, series: &TimelineSeries) -> Result<Page> {
    let offsets = SizeOffsets {
        files: (10.0, -10.0),
        lines: (10.0, 10.0),
    };
    size_page(ctx, LOAD_TITLE, &series.load_files, &series.load_lines, offsets)
}

/// Page 3: one line per plotted file, excluded files listed beside the plot.
///
/// # Errors
/// Returns a render error if a file series is not aligned with the versions.
#[allow(clippy::cast_precision_loss)]
pub fn references_page(
    ctx: &PageContext<'_>,
    outcome: &ExclusionOutcome<'_>,
    max_value: u64,
) -> Result<Page> {
    let mut axis = ValueAxis::new("Core References Count", ChartColor::css_var("fg"));
    for (index, (file, values)) in outcome.plotted.iter().enumerate() {
        let last = values.last().copied().unwrap_or(0);
        axis = axis.with_series(
            Series::new(*file, as_values(values), ctx.palette_color(index))
                .with_marker(Marker::Circle)
                .with_annotation(Annotation::label(
                    format!("{file} ({last})"),
                    REFERENCE_LABEL_OFFSET,
                )),
        );
    }

    let count = ctx.versions.len() as f64;
    let mut chart = ctx
        .chart(REFERENCES_TITLE, axis)
        .with_x_limit(count + REFERENCE_X_EXTENSION)
        .with_legend(LegendLayout::Hidden);

    if !outcome.excluded.is_empty() {
        let lines = std::iter::once("Excluded Files:".to_string())
            .chain(outcome.excluded.iter().map(ToString::to_string))
            .collect();
        chart = chart.with_side_note(SideNote {
            x: count + EXCLUDED_NOTE_OFFSET,
            y: max_value as f64 / 4.0,
            lines,
        });
    }

    seal(REFERENCES_TITLE, chart.build()?)
}

/// Page 4: core and load quality scores.
///
/// # Errors
/// Returns a render error if the series are not aligned with the versions.
pub fn scores_page(ctx: &PageContext<'_>, series: &TimelineSeries) -> Result<Page> {
    let axis = ValueAxis::new("Scores", ChartColor::css_var("fg"))
        .with_series(
            Series::new(
                "Core Score",
                series.core_scores.clone(),
                ChartColor::hex(&ctx.render.core_score_color),
            )
            .with_marker(Marker::Circle),
        )
        .with_series(
            Series::new(
                "Load Score",
                series.load_scores.clone(),
                ChartColor::hex(&ctx.render.load_score_color),
            )
            .with_marker(Marker::Cross),
        );

    let chart = ctx
        .highlighted(ctx.chart(SCORES_TITLE, axis))
        .with_legend(LegendLayout::Centered);
    seal(SCORES_TITLE, chart.build()?)
}

/// Page 5: load dependency warnings.
///
/// # Errors
/// Returns a render error if the series is not aligned with the versions.
pub fn warnings_page(ctx: &PageContext<'_>, series: &TimelineSeries) -> Result<Page> {
    let axis = ValueAxis::new("Warnings", ChartColor::css_var("fg")).with_series(
        Series::new(
            "Dependency Warnings",
            as_values(&series.dependency_warnings),
            ChartColor::hex(&ctx.render.warnings_color),
        )
        .with_marker(Marker::Circle),
    );

    let chart = ctx
        .chart(WARNINGS_TITLE, axis)
        .with_legend(LegendLayout::Centered);
    seal(WARNINGS_TITLE, chart.build()?)
}

/// Title of the commit page for a history window.
#[must_use]
pub fn commits_title(window: usize) -> String {
    format!("Version Commit History (last {window})")
}

/// Page 6: commit history table, rows already windowed and formatted.
///
/// # Errors
/// Returns a render error if the table cannot be laid out.
pub fn commits_page(render: &RenderConfig, rows: &[CommitRow], window: usize) -> Result<Page> {
    let title = commits_title(window);
    let headers = ["Version", "Commit ID", "Message"]
        .iter()
        .map(ToString::to_string)
        .collect();
    let cells = rows
        .iter()
        .map(|row| {
            vec![
                row.version_id.clone(),
                row.commit_id.clone(),
                row.message.clone(),
            ]
        })
        .collect();

    let table = Table::new(title.as_str(), headers, COMMIT_COLUMNS.to_vec())
        .with_size(render.page_width, render.table_page_height)
        .with_rows(cells);
    seal(&title, table.build()?)
}

#[cfg(test)]
#[path = "pages_tests.rs"]
mod tests;
