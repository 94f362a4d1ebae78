//! Full-page table drawn as SVG cells.

use super::builder::SvgBuilder;
use super::element::{Rect, Text};
use super::style::{ChartColor, TextAnchor};
use crate::error::{Result, TimelineError};

/// Fraction of the page kept free on every side.
const PAGE_MARGIN: f64 = 0.05;
const CELL_PADDING: f64 = 6.0;
const TITLE_FONT: f64 = 16.0;

/// Rows below this count use the larger font.
const LARGE_FONT_ROWS: usize = 10;

/// Table whose rows are stretched to fill the page height.
#[derive(Debug, Clone)]
pub struct Table {
    title: String,
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
    column_widths: Vec<f64>,
    width: f64,
    height: f64,
    header_fill: ChartColor,
    row_fill: ChartColor,
    border: ChartColor,
}

impl Table {
    /// Create a table; `column_widths` are fractions of the table width.
    #[must_use]
    pub fn new(title: impl Into<String>, headers: Vec<String>, column_widths: Vec<f64>) -> Self {
        Self {
            title: title.into(),
            headers,
            rows: Vec::new(),
            column_widths,
            width: 1500.0,
            height: 1100.0,
            header_fill: ChartColor::hex("#404040"),
            row_fill: ChartColor::hex("#202020"),
            border: ChartColor::hex("#808080"),
        }
    }

    #[must_use]
    pub const fn with_size(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    #[must_use]
    pub fn with_rows(mut self, rows: Vec<Vec<String>>) -> Self {
        self.rows = rows;
        self
    }

    /// Font size for the current number of data rows.
    #[must_use]
    pub const fn font_size(&self) -> f64 {
        if self.rows.len() < LARGE_FONT_ROWS {
            12.0
        } else {
            10.0
        }
    }

    /// Height of every row, header included, so the table spans the page.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn row_height(&self) -> f64 {
        let usable = self.height * 2.0f64.mul_add(-PAGE_MARGIN, 1.0) - TITLE_FONT * 2.0;
        usable / (self.rows.len() + 1) as f64
    }

    fn validate(&self) -> Result<()> {
        let columns = self.headers.len();
        if self.column_widths.len() != columns {
            return Err(TimelineError::Render(format!(
                "table '{}' has {} column widths for {columns} columns",
                self.title,
                self.column_widths.len()
            )));
        }
        if let Some((index, row)) = self
            .rows
            .iter()
            .enumerate()
            .find(|(_, row)| row.len() != columns)
        {
            return Err(TimelineError::Render(format!(
                "row {} of table '{}' has {} cells, expected {columns}",
                index + 1,
                self.title,
                row.len()
            )));
        }
        Ok(())
    }

    /// Render the table to a standalone `<svg>` element.
    ///
    /// # Errors
    /// Returns [`TimelineError::Render`] when the rows or column widths do
    /// not match the header.
    #[allow(clippy::cast_precision_loss)]
    pub fn build(&self) -> Result<String> {
        self.validate()?;

        let left = self.width * PAGE_MARGIN;
        let table_width = self.width * 2.0f64.mul_add(-PAGE_MARGIN, 1.0);
        let top = self.height.mul_add(PAGE_MARGIN, TITLE_FONT * 2.0);
        let row_height = self.row_height();
        let font_size = self.font_size();

        let mut svg = SvgBuilder::new(self.width, self.height)
            .with_title(self.title.as_str())
            .with_background(ChartColor::css_var("bg"));
        svg.push(
            &Text::new(self.width / 2.0, self.height * PAGE_MARGIN + TITLE_FONT, self.title.as_str())
                .with_anchor(TextAnchor::Middle)
                .with_font_size(TITLE_FONT)
                .bold(),
        );

        let all_rows = std::iter::once(&self.headers).chain(self.rows.iter());
        for (row_index, row) in all_rows.enumerate() {
            let y = (row_index as f64).mul_add(row_height, top);
            let header = row_index == 0;
            let mut x = left;
            for (cell, fraction) in row.iter().zip(&self.column_widths) {
                let cell_width = table_width * fraction;
                svg.push(&Rect {
                    x,
                    y,
                    width: cell_width,
                    height: row_height,
                    fill: if header {
                        self.header_fill.clone()
                    } else {
                        self.row_fill.clone()
                    },
                    stroke: Some(self.border.clone()),
                });
                svg.push(&cell_text(cell, (x, y), row_height, font_size, header));
                x += cell_width;
            }
        }

        Ok(svg.build())
    }
}

/// Cell text, left-aligned and vertically centered in its row.
fn cell_text(cell: &str, (x, y): (f64, f64), row_height: f64, font_size: f64, header: bool) -> Text {
    let lines: Vec<String> = cell.lines().map(str::to_string).collect();
    let text = Text::multiline(x + CELL_PADDING, 0.0, lines)
        .with_font_size(font_size)
        .with_color(ChartColor::css_var("fg"));
    let baseline = (row_height - text.block_height()).mul_add(0.5, y) + font_size;
    let text = Text { y: baseline, ..text };
    if header { text.bold() } else { text }
}

#[cfg(test)]
#[path = "table_tests.rs"]
mod tests;
