//! Primitive SVG elements: axes, lines, text, rectangles.

use std::fmt::Write;

use super::format::html_escape;
use super::style::{ChartColor, Marker, TextAnchor};

/// Axis orientation for charts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisOrientation {
    Horizontal,
    /// Ticks and labels on the left of the axis line.
    Left,
    /// Ticks and labels on the right of the axis line.
    Right,
}

/// Base trait for SVG elements.
pub trait SvgElement {
    /// Render the element to an SVG string.
    fn render(&self) -> String;
}

/// Tick position and label for axis rendering.
struct TickInfo {
    start_x: f64,
    start_y: f64,
    end_x: f64,
    end_y: f64,
    label_x: f64,
    label_y: f64,
    anchor: TextAnchor,
}

/// Axis component for charts.
///
/// Label positions are fractions of `length`, measured from `(x, y)`
/// rightwards for horizontal axes and upwards for vertical ones.
#[derive(Debug, Clone)]
pub struct Axis {
    pub orientation: AxisOrientation,
    pub x: f64,
    pub y: f64,
    pub length: f64,
    pub labels: Vec<(f64, String)>,
    pub color: ChartColor,
    pub tick_length: f64,
    pub font_size: f64,
    /// Rotate horizontal labels to read bottom-up.
    pub vertical_labels: bool,
}

impl Axis {
    fn with_orientation(orientation: AxisOrientation, x: f64, y: f64, length: f64) -> Self {
        Self {
            orientation,
            x,
            y,
            length,
            labels: Vec::new(),
            color: ChartColor::css_var("fg"),
            tick_length: 5.0,
            font_size: 10.0,
            vertical_labels: false,
        }
    }

    #[must_use]
    pub fn horizontal(x: f64, y: f64, length: f64) -> Self {
        Self::with_orientation(AxisOrientation::Horizontal, x, y, length)
    }

    #[must_use]
    pub fn left(x: f64, y: f64, length: f64) -> Self {
        Self::with_orientation(AxisOrientation::Left, x, y, length)
    }

    #[must_use]
    pub fn right(x: f64, y: f64, length: f64) -> Self {
        Self::with_orientation(AxisOrientation::Right, x, y, length)
    }

    #[must_use]
    pub fn with_labels(mut self, labels: Vec<(f64, String)>) -> Self {
        self.labels = labels;
        self
    }

    #[must_use]
    pub fn with_color(mut self, color: ChartColor) -> Self {
        self.color = color;
        self
    }

    #[must_use]
    pub const fn with_font_size(mut self, size: f64) -> Self {
        self.font_size = size;
        self
    }

    #[must_use]
    pub const fn with_vertical_labels(mut self, vertical: bool) -> Self {
        self.vertical_labels = vertical;
        self
    }

    fn calculate_tick(&self, pos: f64) -> TickInfo {
        match self.orientation {
            AxisOrientation::Horizontal => {
                let tick_x = pos.mul_add(self.length, self.x);
                TickInfo {
                    start_x: tick_x,
                    start_y: self.y,
                    end_x: tick_x,
                    end_y: self.y + self.tick_length,
                    label_x: tick_x,
                    label_y: self.y + self.tick_length + self.font_size + 2.0,
                    anchor: TextAnchor::Middle,
                }
            }
            AxisOrientation::Left => {
                let tick_y = pos.mul_add(-self.length, self.y);
                TickInfo {
                    start_x: self.x,
                    start_y: tick_y,
                    end_x: self.x - self.tick_length,
                    end_y: tick_y,
                    label_x: self.x - self.tick_length - 4.0,
                    label_y: tick_y + self.font_size / 3.0,
                    anchor: TextAnchor::End,
                }
            }
            AxisOrientation::Right => {
                let tick_y = pos.mul_add(-self.length, self.y);
                TickInfo {
                    start_x: self.x,
                    start_y: tick_y,
                    end_x: self.x + self.tick_length,
                    end_y: tick_y,
                    label_x: self.x + self.tick_length + 4.0,
                    label_y: tick_y + self.font_size / 3.0,
                    anchor: TextAnchor::Start,
                }
            }
        }
    }

    fn write_label(&self, output: &mut String, tick: &TickInfo, label: &str, color: &str) {
        let escaped_label = html_escape(label);
        if self.vertical_labels && self.orientation == AxisOrientation::Horizontal {
            let x = tick.label_x + self.font_size / 3.0;
            let y = self.y + self.tick_length + 3.0;
            let _ = writeln!(
                output,
                r#"<text x="{x}" y="{y}" text-anchor="end" fill="{color}" font-size="{}" transform="rotate(-90 {x} {y})">{escaped_label}</text>"#,
                self.font_size
            );
        } else {
            let _ = writeln!(
                output,
                r#"<text x="{}" y="{}" text-anchor="{}" fill="{color}" font-size="{}">{escaped_label}</text>"#,
                tick.label_x, tick.label_y, tick.anchor, self.font_size
            );
        }
    }
}

impl SvgElement for Axis {
    fn render(&self) -> String {
        let mut output = String::new();
        let color = self.color.to_css();

        let (end_x, end_y) = match self.orientation {
            AxisOrientation::Horizontal => (self.x + self.length, self.y),
            AxisOrientation::Left | AxisOrientation::Right => (self.x, self.y - self.length),
        };

        let _ = writeln!(
            output,
            r#"<line x1="{}" y1="{}" x2="{end_x}" y2="{end_y}" stroke="{color}" stroke-width="1"/>"#,
            self.x, self.y
        );

        for (pos, label) in &self.labels {
            let tick = self.calculate_tick(*pos);

            let _ = writeln!(
                output,
                r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{color}" stroke-width="1"/>"#,
                tick.start_x, tick.start_y, tick.end_x, tick.end_y
            );

            self.write_label(&mut output, &tick, label, &color);
        }

        output
    }
}

/// A polyline with optional point markers.
#[derive(Debug, Clone)]
pub struct Line {
    pub points: Vec<(f64, f64)>,
    pub color: ChartColor,
    pub stroke_width: f64,
    pub marker: Marker,
    pub marker_size: f64,
    /// SVG `stroke-dasharray`, solid when `None`.
    pub dash: Option<String>,
    pub opacity: f64,
    /// Tooltip text, one per point.
    pub tooltips: Vec<String>,
}

impl Line {
    #[must_use]
    pub const fn new(points: Vec<(f64, f64)>, color: ChartColor) -> Self {
        Self {
            points,
            color,
            stroke_width: 1.5,
            marker: Marker::None,
            marker_size: 4.0,
            dash: None,
            opacity: 1.0,
            tooltips: Vec::new(),
        }
    }

    #[must_use]
    pub const fn with_marker(mut self, marker: Marker) -> Self {
        self.marker = marker;
        self
    }

    #[must_use]
    pub const fn with_stroke_width(mut self, width: f64) -> Self {
        self.stroke_width = width;
        self
    }

    #[must_use]
    pub fn with_dash(mut self, dash: impl Into<String>) -> Self {
        self.dash = Some(dash.into());
        self
    }

    #[must_use]
    pub const fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity;
        self
    }

    #[must_use]
    pub fn with_tooltips(mut self, tooltips: Vec<String>) -> Self {
        self.tooltips = tooltips;
        self
    }

    fn write_marker(&self, output: &mut String, (x, y): (f64, f64), color: &str, i: usize) {
        let size = self.marker_size;
        let title = self
            .tooltips
            .get(i)
            .map(|t| format!("<title>{}</title>", html_escape(t)))
            .unwrap_or_default();
        match self.marker {
            Marker::Circle => {
                let _ = writeln!(
                    output,
                    r#"<circle cx="{x}" cy="{y}" r="{size}" fill="{color}">{title}</circle>"#
                );
            }
            Marker::Cross => {
                let _ = writeln!(
                    output,
                    r#"<path d="M{},{} L{},{} M{},{} L{},{}" stroke="{color}" stroke-width="1.5">{title}</path>"#,
                    x - size,
                    y - size,
                    x + size,
                    y + size,
                    x - size,
                    y + size,
                    x + size,
                    y - size
                );
            }
            Marker::None => {}
        }
    }
}

impl SvgElement for Line {
    fn render(&self) -> String {
        if self.points.is_empty() {
            return String::new();
        }

        let color = self.color.to_css();

        let mut path = String::new();
        for (i, (x, y)) in self.points.iter().enumerate() {
            if i == 0 {
                let _ = write!(path, "M{x},{y}");
            } else {
                let _ = write!(path, " L{x},{y}");
            }
        }

        let dash = self
            .dash
            .as_ref()
            .map(|d| format!(r#" stroke-dasharray="{d}""#))
            .unwrap_or_default();

        let mut output = String::new();
        let _ = writeln!(
            output,
            r#"<path d="{path}" fill="none" stroke="{color}" stroke-width="{}" stroke-opacity="{}"{dash} stroke-linecap="round" stroke-linejoin="round"/>"#,
            self.stroke_width, self.opacity
        );

        for (i, point) in self.points.iter().enumerate() {
            self.write_marker(&mut output, *point, &color, i);
        }

        output
    }
}

/// Text block; lines after the first are stacked below it.
#[derive(Debug, Clone)]
pub struct Text {
    pub x: f64,
    pub y: f64,
    pub lines: Vec<String>,
    pub color: ChartColor,
    pub font_size: f64,
    pub anchor: TextAnchor,
    pub bold: bool,
    /// Rotation in degrees around `(x, y)`.
    pub rotate: Option<f64>,
}

impl Text {
    #[must_use]
    pub fn new(x: f64, y: f64, content: impl Into<String>) -> Self {
        Self {
            x,
            y,
            lines: vec![content.into()],
            color: ChartColor::css_var("fg"),
            font_size: 10.0,
            anchor: TextAnchor::Start,
            bold: false,
            rotate: None,
        }
    }

    #[must_use]
    pub fn multiline(x: f64, y: f64, lines: Vec<String>) -> Self {
        Self {
            lines,
            ..Self::new(x, y, String::new())
        }
    }

    #[must_use]
    pub fn with_color(mut self, color: ChartColor) -> Self {
        self.color = color;
        self
    }

    #[must_use]
    pub const fn with_font_size(mut self, size: f64) -> Self {
        self.font_size = size;
        self
    }

    #[must_use]
    pub const fn with_anchor(mut self, anchor: TextAnchor) -> Self {
        self.anchor = anchor;
        self
    }

    #[must_use]
    pub const fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    #[must_use]
    pub const fn rotated(mut self, degrees: f64) -> Self {
        self.rotate = Some(degrees);
        self
    }

    /// Height of the block at 1.2 line spacing.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn block_height(&self) -> f64 {
        self.lines.len() as f64 * self.font_size * 1.2
    }
}

impl SvgElement for Text {
    fn render(&self) -> String {
        let color = self.color.to_css();
        let weight = if self.bold {
            r#" font-weight="bold""#
        } else {
            ""
        };
        let transform = self
            .rotate
            .map(|deg| format!(r#" transform="rotate({deg} {} {})""#, self.x, self.y))
            .unwrap_or_default();

        let mut output = format!(
            r#"<text x="{}" y="{}" text-anchor="{}" fill="{color}" font-size="{}"{weight}{transform}>"#,
            self.x, self.y, self.anchor, self.font_size
        );
        if let [single] = self.lines.as_slice() {
            output.push_str(&html_escape(single));
        } else {
            for (i, line) in self.lines.iter().enumerate() {
                let dy = if i == 0 { 0.0 } else { self.font_size * 1.2 };
                let _ = write!(
                    output,
                    r#"<tspan x="{}" dy="{dy}">{}</tspan>"#,
                    self.x,
                    html_escape(line)
                );
            }
        }
        output.push_str("</text>\n");
        output
    }
}

/// Filled rectangle with an optional border.
#[derive(Debug, Clone)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub fill: ChartColor,
    pub stroke: Option<ChartColor>,
}

impl SvgElement for Rect {
    fn render(&self) -> String {
        let stroke = self
            .stroke
            .as_ref()
            .map(|c| format!(r#" stroke="{}" stroke-width="1""#, c.to_css()))
            .unwrap_or_default();
        format!(
            "<rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"{}\"{stroke}/>\n",
            self.x,
            self.y,
            self.width,
            self.height,
            self.fill.to_css()
        )
    }
}

#[cfg(test)]
#[path = "element_tests.rs"]
mod tests;
