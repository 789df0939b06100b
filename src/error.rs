//! Error types for the highlighting engine

use thiserror::Error;

/// Result type alias for highlighting operations
pub type Result<T> = std::result::Result<T, HighlightError>;

/// Highlighting error types
///
/// Only construction and the theme/config edges can fail. A highlighting
/// pass over arbitrary text never produces an error.
#[derive(Error, Debug)]
pub enum HighlightError {
    #[error("invalid built-in pattern `{name}`: {source}")]
    InvalidPattern {
        name: String,
        #[source]
        source: regex::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("theme parse error: {0}")]
    ThemeParse(#[from] serde_json::Error),

    #[error("config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("invalid color: {0}")]
    InvalidColor(String),

    #[error("theme not found: {0}")]
    ThemeNotFound(String),
}
