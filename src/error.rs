use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TimelineError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to read file: {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file: {path}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read directory: {path}")]
    DirectoryRead {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("Failed to parse snapshot {path}: {source}")]
    SnapshotParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid snapshot {path}: {reason}")]
    InvalidSnapshot { path: PathBuf, reason: String },

    #[error("Render error: {0}")]
    Render(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

impl TimelineError {
    /// Short category label used by the stderr diagnostics.
    #[must_use]
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::Config(_) | Self::TomlParse(_) => "Configuration",
            Self::FileRead { .. }
            | Self::FileWrite { .. }
            | Self::DirectoryRead { .. }
            | Self::Io(_) => "IO",
            Self::SnapshotParse { .. } | Self::InvalidSnapshot { .. } => "Snapshot",
            Self::Render(_) => "Render",
        }
    }

    /// Actionable hint for the user, when one exists.
    #[must_use]
    pub const fn suggestion(&self) -> Option<&'static str> {
        match self {
            Self::SnapshotParse { .. } | Self::InvalidSnapshot { .. } => Some(
                "Regenerate the snapshot; every version must carry `summary` and `files` objects",
            ),
            Self::DirectoryRead { .. } => Some("Check that the input folder exists and is readable"),
            Self::TomlParse(_) => Some("Check the syntax of .quality-timeline.toml"),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, TimelineError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
