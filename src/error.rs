//! Application error types.
//!
//! Provides unified error handling with actionable context for debugging.

use thiserror::Error;

/// Application result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Application error types with specific context for actionable debugging
#[derive(Debug, Error)]
pub enum Error {
    /// IO error with path context
    #[error("IO error at {path:?}: {source}")]
    Io {
        /// The underlying IO error.
        source: std::io::Error,
        /// File path where the error occurred, if known.
        path: Option<std::path::PathBuf>,
    },

    /// Input could not be read as lyric text
    #[error("Invalid input: {message}")]
    InvalidInput {
        /// What was wrong with the input.
        message: String,
    },

    /// Lyric analysis failed; wraps the underlying cause
    #[error("Failed to analyze lyrics: {source}")]
    Analysis {
        /// The failure that stopped the analysis.
        source: Box<Error>,
    },

    /// Lyrics rejected before analysis (length bounds)
    #[error("{message}. {hint}")]
    Validation {
        /// Description of the rejected input.
        message: String,
        /// Actionable guidance for fixing the input.
        hint: &'static str,
    },

    /// Configuration error with guidance
    #[error("Configuration error: {message}. {hint}")]
    Config {
        /// Description of the configuration problem.
        message: String,
        /// Actionable guidance for fixing the issue.
        hint: &'static str,
    },

    /// System clipboard error
    #[error("Clipboard unavailable: {0}")]
    Clipboard(String),

    /// Saved lyrics error
    #[error("Saved lyrics error: {0}")]
    Library(String),

    /// Generic message error (escape hatch)
    #[error("{0}")]
    Msg(String),
}

impl Error {
    /// Create an IO error with path context
    pub fn io(source: std::io::Error, path: impl Into<Option<std::path::PathBuf>>) -> Self {
        Self::Io { source, path: path.into() }
    }

    /// Create an invalid input error
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput { message: message.into() }
    }

    /// Wrap a failure as an analysis error
    pub fn analysis(source: Self) -> Self {
        Self::Analysis { source: Box::new(source) }
    }

    /// Create a validation error with actionable hint
    pub fn validation(message: impl Into<String>, hint: &'static str) -> Self {
        Self::Validation { message: message.into(), hint }
    }

    /// Create a config error with actionable hint
    pub fn config(message: impl Into<String>, hint: &'static str) -> Self {
        Self::Config { message: message.into(), hint }
    }
}

// Convenience conversions
impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Io { source: e, path: None }
    }
}

impl From<arboard::Error> for Error {
    fn from(e: arboard::Error) -> Self {
        Self::Clipboard(e.to_string())
    }
}

impl From<String> for Error {
    fn from(s: String) -> Self {
        Self::Msg(s)
    }
}

impl From<&str> for Error {
    fn from(s: &str) -> Self {
        Self::Msg(s.to_string())
    }
}
