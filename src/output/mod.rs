mod error_output;
mod message;
pub mod svg;

pub use error_output::ErrorOutput;
pub use message::{ELLIPSIS, truncate_message};

/// Color output mode for terminal diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Auto-detect: use colors if stderr is a TTY and `NO_COLOR` is not set
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
