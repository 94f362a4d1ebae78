//! Paginated report document.
//!
//! A [`Figure`] is drawn on its own, sealed into a [`Page`] and only then
//! appended to a [`ReportDocument`]. Pages are written in append order.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::config::RenderConfig;
use crate::error::{Result, TimelineError};

use super::template::{DOCUMENT_FOOTER, document_header, page_section};

/// Drawing surface for one page, independent of any document.
#[derive(Debug, Clone)]
pub struct Figure {
    title: String,
    svg: Option<String>,
}

impl Figure {
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            svg: None,
        }
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Replace the figure content with a rendered SVG element.
    pub fn draw(&mut self, svg: String) {
        self.svg = Some(svg);
    }

    /// Seal the figure into a page.
    ///
    /// # Errors
    /// Returns [`TimelineError::Render`] if nothing was drawn.
    pub fn into_page(self) -> Result<Page> {
        match self.svg {
            Some(svg) => Ok(Page {
                title: self.title,
                svg,
            }),
            None => Err(TimelineError::Render(format!(
                "figure '{}' has no content",
                self.title
            ))),
        }
    }
}

/// A finished page, ready to be appended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    title: String,
    svg: String,
}

impl Page {
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn svg(&self) -> &str {
        &self.svg
    }
}

/// Output document; the writer is flushed when the document is dropped,
/// including on early returns after a failed page.
#[derive(Debug)]
pub struct ReportDocument<W: Write> {
    writer: Option<W>,
    /// Named in write errors when the document is a file.
    path: Option<PathBuf>,
    pages: usize,
}

impl ReportDocument<BufWriter<File>> {
    /// Create (or truncate) the document file and write its head.
    ///
    /// # Errors
    /// Returns an error if the file cannot be created or written.
    pub fn create(path: &Path, render: &RenderConfig) -> Result<Self> {
        let file = File::create(path).map_err(|source| TimelineError::FileWrite {
            path: path.to_path_buf(),
            source,
        })?;
        Self::start(BufWriter::new(file), Some(path.to_path_buf()), render)
    }
}

impl<W: Write> ReportDocument<W> {
    /// Start a document on `writer`, applying the render style to its head.
    ///
    /// # Errors
    /// Returns an error if the head cannot be written.
    pub fn new(writer: W, render: &RenderConfig) -> Result<Self> {
        Self::start(writer, None, render)
    }

    fn start(writer: W, path: Option<PathBuf>, render: &RenderConfig) -> Result<Self> {
        let mut document = Self {
            writer: Some(writer),
            path,
            pages: 0,
        };
        let header = document_header(render);
        let result = document.writer()?.write_all(header.as_bytes());
        result.map_err(|source| document.write_error(source))?;
        Ok(document)
    }

    fn write_error(&self, source: io::Error) -> TimelineError {
        match &self.path {
            Some(path) => TimelineError::FileWrite {
                path: path.clone(),
                source,
            },
            None => TimelineError::Io(source),
        }
    }

    /// Number of pages appended so far.
    #[must_use]
    pub const fn page_count(&self) -> usize {
        self.pages
    }

    fn writer(&mut self) -> Result<&mut W> {
        self.writer
            .as_mut()
            .ok_or_else(|| TimelineError::Render("document already finished".to_string()))
    }

    /// Append a page after all pages appended before it.
    ///
    /// # Errors
    /// Returns an error if writing fails.
    pub fn append(&mut self, page: &Page) -> Result<()> {
        let number = self.pages + 1;
        let section = page_section(number, page.title(), page.svg());
        let result = self.writer()?.write_all(section.as_bytes());
        result.map_err(|source| self.write_error(source))?;
        self.pages = number;
        Ok(())
    }

    /// Close the document and hand back the flushed writer.
    ///
    /// # Errors
    /// Returns an error if the footer cannot be written or flushed.
    pub fn finish(mut self) -> Result<W> {
        let mut writer = self
            .writer
            .take()
            .ok_or_else(|| TimelineError::Render("document already finished".to_string()))?;
        writer
            .write_all(DOCUMENT_FOOTER.as_bytes())
            .and_then(|()| writer.flush())
            .map_err(|source| self.write_error(source))?;
        Ok(writer)
    }
}

impl<W: Write> Drop for ReportDocument<W> {
    fn drop(&mut self) {
        if let Some(writer) = self.writer.as_mut() {
            let _ = writer.flush();
        }
    }
}

#[cfg(test)]
#[path = "document_tests.rs"]
mod tests;
