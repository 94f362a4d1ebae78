//! Configuration semantic validation.
//!
//! Runs after parsing; rejects values that would make the report layout
//! impossible rather than merely unusual.

use crate::config::ReportConfig;
use crate::{Result, TimelineError};

/// Room for at least one character plus the three-character ellipsis.
const MIN_WRAP_WIDTH: usize = 4;

/// Validates semantic correctness of a configuration.
///
/// # Errors
/// Returns an error if the message cell geometry is too small, the commit
/// window is empty, an extension is blank, or the render geometry is not
/// positive.
pub fn validate_config(config: &ReportConfig) -> Result<()> {
    validate_message_cell(config)?;
    validate_inputs(config)?;
    validate_render(config)?;
    Ok(())
}

fn validate_message_cell(config: &ReportConfig) -> Result<()> {
    if config.message_wrap_width < MIN_WRAP_WIDTH {
        return Err(TimelineError::Config(format!(
            "message_wrap_width must be at least {MIN_WRAP_WIDTH}, got {}",
            config.message_wrap_width
        )));
    }
    if config.message_max_lines == 0 {
        return Err(TimelineError::Config(
            "message_max_lines must be at least 1".to_string(),
        ));
    }
    if config.commit_window == 0 {
        return Err(TimelineError::Config(
            "commit_window must be at least 1".to_string(),
        ));
    }
    Ok(())
}

fn validate_inputs(config: &ReportConfig) -> Result<()> {
    for (key, ext) in [
        ("snapshot_extension", &config.snapshot_extension),
        ("metadata_extension", &config.metadata_extension),
    ] {
        if ext.trim().is_empty() {
            return Err(TimelineError::Config(format!("{key} must not be empty")));
        }
    }
    if config.snapshot_extension == config.metadata_extension {
        return Err(TimelineError::Config(format!(
            "snapshot_extension and metadata_extension must differ, both are '{}'",
            config.snapshot_extension
        )));
    }
    Ok(())
}

fn validate_render(config: &ReportConfig) -> Result<()> {
    let render = &config.render;
    for (key, value) in [
        ("render.page_width", render.page_width),
        ("render.page_height", render.page_height),
        ("render.table_page_height", render.table_page_height),
        ("render.title_font_size", render.title_font_size),
    ] {
        if !(value.is_finite() && value > 0.0) {
            return Err(TimelineError::Config(format!(
                "{key} must be a positive number, got {value}"
            )));
        }
    }
    if render.palette.is_empty() {
        return Err(TimelineError::Config(
            "render.palette must contain at least one color".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
#[path = "validation_tests.rs"]
mod tests;
