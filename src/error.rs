//! Error handling types for orikaeshi.
//!
//! The engine surfaces exactly three failure modes: parse failures on the
//! input, configuration problems trapped by the collaborators, and broken
//! internal invariants. Unbreakable lines are not an error.

use thiserror::Error;

/// Error type shared by the engine and its collaborators
#[derive(Debug, Error)]
pub enum FormatError {
    /// Source text could not be parsed at all
    #[error("parse error: {message}")]
    Parse { message: String },

    /// Configuration file could not be read or deserialized
    #[error("invalid configuration: {message}")]
    Config { message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Broken internal invariant (overlapping edits, bad edit bounds).
    /// Indicates a bug in the planner, not bad user input.
    #[error("internal error: {message}")]
    Internal { message: String },
}

/// Result type for formatting operations
pub type FormatResult<T> = Result<T, FormatError>;

/// Helper functions for common error patterns
impl FormatError {
    /// Create a parse error
    pub fn parse(message: impl Into<String>) -> Self {
        FormatError::Parse {
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        FormatError::Config {
            message: message.into(),
        }
    }

    /// Create an internal error
    pub fn internal(message: impl Into<String>) -> Self {
        FormatError::Internal {
            message: message.into(),
        }
    }
}
