//! Version timeline chart: one x position per version, a left value axis,
//! an optional right value axis, release highlight markers and labels at the
//! end of each line.

use super::builder::SvgBuilder;
use super::element::{Axis, Line, Text};
use super::format::{format_tick, format_value};
use super::scale::LinearScale;
use super::style::{ChartColor, Marker, TextAnchor};
use crate::error::{Result, TimelineError};

const MARGIN_LEFT: f64 = 90.0;
const MARGIN_RIGHT: f64 = 90.0;
const MARGIN_TOP: f64 = 100.0;
const MARGIN_BOTTOM: f64 = 120.0;

const Y_TICKS: usize = 6;
const TICK_FONT: f64 = 10.0;
const X_LABEL_FONT: f64 = 8.0;
const AXIS_TITLE_FONT: f64 = 12.0;
const LEGEND_FONT: f64 = 10.0;

/// Width of the line sample drawn in front of a legend label.
const LEGEND_SAMPLE: f64 = 20.0;

/// Text placed next to the last point of a series.
#[derive(Debug, Clone, PartialEq)]
pub struct Annotation {
    pub text: String,
    /// Offset from the point in pixels; positive `dy` moves down.
    pub dx: f64,
    pub dy: f64,
    pub arrow: bool,
    pub font_size: f64,
}

impl Annotation {
    /// Value label connected to its point by an arrow.
    #[must_use]
    pub fn arrow(text: impl Into<String>, dx: f64, dy: f64) -> Self {
        Self {
            text: text.into(),
            dx,
            dy,
            arrow: true,
            font_size: 9.0,
        }
    }

    /// Plain label to the right of the point.
    #[must_use]
    pub fn label(text: impl Into<String>, dx: f64) -> Self {
        Self {
            text: text.into(),
            dx,
            dy: 0.0,
            arrow: false,
            font_size: 8.0,
        }
    }
}

/// One line of values, aligned with the chart's version labels.
#[derive(Debug, Clone)]
pub struct Series {
    pub label: String,
    pub values: Vec<f64>,
    pub color: ChartColor,
    pub marker: Marker,
    pub annotation: Option<Annotation>,
}

impl Series {
    #[must_use]
    pub fn new(label: impl Into<String>, values: Vec<f64>, color: ChartColor) -> Self {
        Self {
            label: label.into(),
            values,
            color,
            marker: Marker::Circle,
            annotation: None,
        }
    }

    #[must_use]
    pub const fn with_marker(mut self, marker: Marker) -> Self {
        self.marker = marker;
        self
    }

    #[must_use]
    pub fn with_annotation(mut self, annotation: Annotation) -> Self {
        self.annotation = Some(annotation);
        self
    }

    /// Annotate the last value with an arrow, using its exact value as text.
    #[must_use]
    pub fn with_last_value_arrow(self, dx: f64, dy: f64) -> Self {
        match self.values.last() {
            Some(&last) => self.with_annotation(Annotation::arrow(format_value(last), dx, dy)),
            None => self,
        }
    }
}

/// A value axis and the series scaled against it.
#[derive(Debug, Clone)]
pub struct ValueAxis {
    pub title: String,
    pub color: ChartColor,
    pub series: Vec<Series>,
}

impl ValueAxis {
    #[must_use]
    pub fn new(title: impl Into<String>, color: ChartColor) -> Self {
        Self {
            title: title.into(),
            color,
            series: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_series(mut self, series: Series) -> Self {
        self.series.push(series);
        self
    }

    fn scale(&self, extra: Option<f64>) -> LinearScale {
        LinearScale::fit(
            self.series
                .iter()
                .flat_map(|s| s.values.iter().copied())
                .chain(extra),
        )
    }
}

/// How series labels are laid out above the plot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LegendLayout {
    /// Left-axis series top-left, right-axis series top-right.
    #[default]
    Split,
    /// All series centered, two per row.
    Centered,
    Hidden,
}

/// Free text block positioned in data coordinates of the left axis.
#[derive(Debug, Clone, PartialEq)]
pub struct SideNote {
    pub x: f64,
    pub y: f64,
    pub lines: Vec<String>,
}

/// Pixel geometry of the plotting area and its x domain.
#[derive(Debug, Clone, Copy)]
struct PlotArea {
    left: f64,
    top: f64,
    width: f64,
    height: f64,
    x_min: f64,
    x_max: f64,
}

impl PlotArea {
    fn x_at(&self, index: f64) -> f64 {
        ((index - self.x_min) / (self.x_max - self.x_min)).mul_add(self.width, self.left)
    }

    fn y_at(&self, scale: &LinearScale, value: f64) -> f64 {
        scale.fraction(value).mul_add(-self.height, self.bottom())
    }

    fn bottom(&self) -> f64 {
        self.top + self.height
    }

    fn right(&self) -> f64 {
        self.left + self.width
    }

    fn center_x(&self) -> f64 {
        self.left + self.width / 2.0
    }
}

/// Line chart over a sequence of versions.
#[derive(Debug, Clone)]
pub struct TimelineChart {
    title: String,
    title_font_size: f64,
    width: f64,
    height: f64,
    x_labels: Vec<String>,
    left: ValueAxis,
    right: Option<ValueAxis>,
    highlights: Vec<usize>,
    highlight_color: ChartColor,
    x_limit: Option<f64>,
    side_note: Option<SideNote>,
    legend: LegendLayout,
}

impl TimelineChart {
    #[must_use]
    pub fn new(title: impl Into<String>, x_labels: Vec<String>, left: ValueAxis) -> Self {
        Self {
            title: title.into(),
            title_font_size: 18.0,
            width: 1500.0,
            height: 800.0,
            x_labels,
            left,
            right: None,
            highlights: Vec::new(),
            highlight_color: ChartColor::hex("#B8860B"),
            x_limit: None,
            side_note: None,
            legend: LegendLayout::default(),
        }
    }

    #[must_use]
    pub const fn with_size(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    #[must_use]
    pub const fn with_title_font_size(mut self, size: f64) -> Self {
        self.title_font_size = size;
        self
    }

    #[must_use]
    pub fn with_right_axis(mut self, axis: ValueAxis) -> Self {
        self.right = Some(axis);
        self
    }

    /// Draw a dashed vertical marker at each version index.
    #[must_use]
    pub fn with_highlights(mut self, indices: Vec<usize>, color: ChartColor) -> Self {
        self.highlights = indices;
        self.highlight_color = color;
        self
    }

    /// Extend the x domain to `limit` (in version-index units).
    #[must_use]
    pub const fn with_x_limit(mut self, limit: f64) -> Self {
        self.x_limit = Some(limit);
        self
    }

    #[must_use]
    pub fn with_side_note(mut self, note: SideNote) -> Self {
        self.side_note = Some(note);
        self
    }

    #[must_use]
    pub const fn with_legend(mut self, legend: LegendLayout) -> Self {
        self.legend = legend;
        self
    }

    fn all_series(&self) -> impl Iterator<Item = &Series> {
        self.left
            .series
            .iter()
            .chain(self.right.iter().flat_map(|axis| axis.series.iter()))
    }

    fn validate(&self) -> Result<()> {
        let expected = self.x_labels.len();
        if let Some(series) = self.all_series().find(|s| s.values.len() != expected) {
            return Err(TimelineError::Render(format!(
                "series '{}' in chart '{}' has {} values for {expected} versions",
                series.label,
                self.title,
                series.values.len()
            )));
        }
        if let Some(index) = self.highlights.iter().find(|&&i| i >= expected) {
            return Err(TimelineError::Render(format!(
                "highlight index {index} is out of range in chart '{}'",
                self.title
            )));
        }
        if !(self.width > MARGIN_LEFT + MARGIN_RIGHT && self.height > MARGIN_TOP + MARGIN_BOTTOM)
        {
            return Err(TimelineError::Render(format!(
                "chart '{}' is too small: {}x{}",
                self.title, self.width, self.height
            )));
        }
        Ok(())
    }

    #[allow(clippy::cast_precision_loss)]
    fn plot_area(&self) -> PlotArea {
        let last = self.x_labels.len().max(1) as f64 - 1.0;
        PlotArea {
            left: MARGIN_LEFT,
            top: MARGIN_TOP,
            width: self.width - MARGIN_LEFT - MARGIN_RIGHT,
            height: self.height - MARGIN_TOP - MARGIN_BOTTOM,
            x_min: -0.5,
            x_max: self.x_limit.unwrap_or(last + 0.5).max(last + 0.5),
        }
    }

    /// Render the chart to a standalone `<svg>` element.
    ///
    /// # Errors
    /// Returns [`TimelineError::Render`] when a series is not aligned with the
    /// version labels, a highlight is out of range, or the canvas is too small.
    pub fn build(&self) -> Result<String> {
        self.validate()?;

        let area = self.plot_area();
        let left_scale = self
            .left
            .scale(self.side_note.as_ref().map(|note| note.y));
        let right_scale = self.right.as_ref().map(|axis| axis.scale(None));

        let mut svg = SvgBuilder::new(self.width, self.height)
            .with_title(self.title.as_str())
            .with_background(ChartColor::css_var("bg"));

        svg.push(
            &Text::new(self.width / 2.0, 40.0, self.title.as_str())
                .with_anchor(TextAnchor::Middle)
                .with_font_size(self.title_font_size)
                .bold(),
        );

        self.draw_grid(&mut svg, &area, &left_scale);
        self.draw_axes(&mut svg, &area, &left_scale, right_scale.as_ref());
        self.draw_highlights(&mut svg, &area);

        self.draw_axis_series(&mut svg, &area, &self.left, &left_scale);
        if let (Some(axis), Some(scale)) = (&self.right, &right_scale) {
            self.draw_axis_series(&mut svg, &area, axis, scale);
        }

        if let Some(note) = &self.side_note {
            let text = Text::multiline(area.x_at(note.x), 0.0, note.lines.clone()).with_font_size(8.0);
            let y = area.y_at(&left_scale, note.y) - text.block_height() / 2.0;
            svg.push(&Text { y, ..text });
        }

        self.draw_legend(&mut svg, &area);

        if self.x_labels.is_empty() {
            svg.push(
                &Text::new(area.center_x(), area.top + area.height / 2.0, "No version data")
                    .with_anchor(TextAnchor::Middle)
                    .with_font_size(14.0),
            );
        }

        Ok(svg.build())
    }

    #[allow(clippy::cast_precision_loss)]
    fn draw_grid(&self, svg: &mut SvgBuilder, area: &PlotArea, scale: &LinearScale) {
        let faint = |points| {
            Line::new(points, ChartColor::css_var("grid"))
                .with_marker(Marker::None)
                .with_stroke_width(1.0)
                .with_dash("4 4")
                .with_opacity(0.1)
        };

        let (_, ticks) = scale.ticks(Y_TICKS);
        for tick in ticks {
            let y = area.y_at(scale, tick);
            svg.push(&faint(vec![(area.left, y), (area.right(), y)]));
        }

        for index in 0..self.x_labels.len() {
            let x = area.x_at(index as f64);
            svg.push(&faint(vec![(x, area.top), (x, area.bottom())]));
        }
    }

    fn value_labels(scale: &LinearScale) -> Vec<(f64, String)> {
        let (step, ticks) = scale.ticks(Y_TICKS);
        ticks
            .into_iter()
            .map(|tick| (scale.fraction(tick), format_tick(tick, step)))
            .collect()
    }

    fn draw_axes(
        &self,
        svg: &mut SvgBuilder,
        area: &PlotArea,
        left_scale: &LinearScale,
        right_scale: Option<&LinearScale>,
    ) {
        #[allow(clippy::cast_precision_loss)]
        let version_labels = self
            .x_labels
            .iter()
            .enumerate()
            .map(|(i, label)| ((area.x_at(i as f64) - area.left) / area.width, label.clone()))
            .collect();

        svg.push(
            &Axis::horizontal(area.left, area.bottom(), area.width)
                .with_labels(version_labels)
                .with_font_size(X_LABEL_FONT)
                .with_vertical_labels(true),
        );
        svg.push(
            &Text::new(area.center_x(), self.height - 15.0, "Versions")
                .with_anchor(TextAnchor::Middle)
                .with_font_size(AXIS_TITLE_FONT),
        );

        let mid_y = area.top + area.height / 2.0;
        svg.push(
            &Axis::left(area.left, area.bottom(), area.height)
                .with_labels(Self::value_labels(left_scale))
                .with_color(self.left.color.clone())
                .with_font_size(TICK_FONT),
        );
        svg.push(
            &Text::new(area.left - 65.0, mid_y, self.left.title.as_str())
                .with_anchor(TextAnchor::Middle)
                .with_color(self.left.color.clone())
                .with_font_size(AXIS_TITLE_FONT)
                .rotated(-90.0),
        );

        if let (Some(axis), Some(scale)) = (&self.right, right_scale) {
            svg.push(
                &Axis::right(area.right(), area.bottom(), area.height)
                    .with_labels(Self::value_labels(scale))
                    .with_color(axis.color.clone())
                    .with_font_size(TICK_FONT),
            );
            svg.push(
                &Text::new(area.right() + 75.0, mid_y, axis.title.as_str())
                    .with_anchor(TextAnchor::Middle)
                    .with_color(axis.color.clone())
                    .with_font_size(AXIS_TITLE_FONT)
                    .rotated(90.0),
            );
        }
    }

    fn draw_highlights(&self, svg: &mut SvgBuilder, area: &PlotArea) {
        for &index in &self.highlights {
            #[allow(clippy::cast_precision_loss)]
            let x = area.x_at(index as f64);
            svg.push(
                &Line::new(vec![(x, area.top), (x, area.bottom())], self.highlight_color.clone())
                    .with_marker(Marker::None)
                    .with_dash("6 4")
                    .with_opacity(0.7),
            );
        }
    }

    fn draw_axis_series(
        &self,
        svg: &mut SvgBuilder,
        area: &PlotArea,
        axis: &ValueAxis,
        scale: &LinearScale,
    ) {
        for series in &axis.series {
            #[allow(clippy::cast_precision_loss)]
            let points: Vec<(f64, f64)> = series
                .values
                .iter()
                .enumerate()
                .map(|(i, &v)| (area.x_at(i as f64), area.y_at(scale, v)))
                .collect();
            let tooltips = self
                .x_labels
                .iter()
                .zip(&series.values)
                .map(|(version, &v)| format!("{} {version}: {}", series.label, format_value(v)))
                .collect();

            svg.push(
                &Line::new(points.clone(), series.color.clone())
                    .with_marker(series.marker)
                    .with_tooltips(tooltips),
            );

            if let (Some(annotation), Some(&point)) = (&series.annotation, points.last()) {
                draw_annotation(svg, annotation, point, &series.color);
            }
        }
    }

    fn draw_legend(&self, svg: &mut SvgBuilder, area: &PlotArea) {
        let y = area.top - 25.0;
        match self.legend {
            LegendLayout::Hidden => {}
            LegendLayout::Split => {
                let mut x = area.left;
                for series in &self.left.series {
                    x += draw_legend_entry(svg, x, y, series);
                }
                if let Some(axis) = &self.right {
                    let total: f64 = axis.series.iter().map(legend_entry_width).sum();
                    let mut x = area.right() - total;
                    for series in &axis.series {
                        x += draw_legend_entry(svg, x, y, series);
                    }
                }
            }
            LegendLayout::Centered => {
                let entries: Vec<&Series> = self.all_series().collect();
                let rows = entries.chunks(2).collect::<Vec<_>>();
                #[allow(clippy::cast_precision_loss)]
                let first_y = (rows.len() as f64 - 1.0).mul_add(-16.0, y);
                for (row_index, row) in rows.iter().enumerate() {
                    let total: f64 = row.iter().map(|s| legend_entry_width(s)).sum();
                    let mut x = area.center_x() - total / 2.0;
                    #[allow(clippy::cast_precision_loss)]
                    let row_y = (row_index as f64).mul_add(16.0, first_y);
                    for series in *row {
                        x += draw_legend_entry(svg, x, row_y, series);
                    }
                }
            }
        }
    }
}

#[allow(clippy::cast_precision_loss)]
fn legend_entry_width(series: &Series) -> f64 {
    let text = series.label.chars().count() as f64 * LEGEND_FONT * 0.6;
    LEGEND_SAMPLE + 6.0 + text + 16.0
}

/// Draw a line sample and label; returns the horizontal space used.
fn draw_legend_entry(svg: &mut SvgBuilder, x: f64, y: f64, series: &Series) -> f64 {
    svg.push(
        &Line::new(vec![(x, y), (x + LEGEND_SAMPLE, y)], series.color.clone())
            .with_marker(Marker::None),
    );
    svg.push(
        &Line::new(vec![(x + LEGEND_SAMPLE / 2.0, y)], series.color.clone())
            .with_marker(series.marker),
    );
    svg.push(
        &Text::new(x + LEGEND_SAMPLE + 6.0, y + LEGEND_FONT / 3.0, series.label.as_str())
            .with_font_size(LEGEND_FONT),
    );
    legend_entry_width(series)
}

fn draw_annotation(
    svg: &mut SvgBuilder,
    annotation: &Annotation,
    (px, py): (f64, f64),
    color: &ChartColor,
) {
    let tx = px + annotation.dx;
    let ty = py + annotation.dy;

    if annotation.arrow {
        svg.push(
            &Line::new(vec![(tx, ty), (px, py)], color.clone())
                .with_marker(Marker::None)
                .with_stroke_width(1.0),
        );
        let (dx, dy) = (px - tx, py - ty);
        let length = dx.hypot(dy);
        if length > 0.0 {
            let (ux, uy) = (dx / length, dy / length);
            let (bx, by) = (ux.mul_add(-5.0, px), uy.mul_add(-5.0, py));
            svg.push_raw(format!(
                r#"<path d="M{},{} L{px},{py} L{},{}" fill="none" stroke="{}" stroke-width="1"/>"#,
                uy.mul_add(-3.0, bx),
                ux.mul_add(3.0, by),
                uy.mul_add(3.0, bx),
                ux.mul_add(-3.0, by),
                color.to_css()
            ));
        }
    }

    let (text_x, text_color) = if annotation.arrow {
        (tx + 2.0, color.clone())
    } else {
        (tx, ChartColor::css_var("fg"))
    };
    svg.push(
        &Text::new(text_x, ty + annotation.font_size / 3.0, annotation.text.as_str())
            .with_color(text_color)
            .with_font_size(annotation.font_size),
    );
}

#[cfg(test)]
#[path = "timeline_chart_tests.rs"]
mod tests;
