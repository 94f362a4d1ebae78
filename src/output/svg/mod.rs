//! SVG building blocks for report pages.
//!
//! Elements render to plain strings; colors are either fixed hex values or
//! `var(--color-*)` references resolved by the report stylesheet.

mod builder;
mod element;
mod format;
mod scale;
mod style;
mod table;
mod timeline_chart;

pub use builder::SvgBuilder;
pub use element::{Axis, AxisOrientation, Line, Rect, SvgElement, Text};
pub use format::{format_number, format_tick, format_value, html_escape};
pub use scale::LinearScale;
pub use style::{ChartColor, Marker, TextAnchor};
pub use table::Table;
pub use timeline_chart::{Annotation, LegendLayout, Series, SideNote, TimelineChart, ValueAxis};

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
