//! Word source error types.

use derive_more::{Display, Error};
use tracing::instrument;

/// A word source could not produce a word.
#[derive(Debug, Clone, Display, Error)]
#[display("Word source error: {} at {}:{}", message, file, line)]
pub struct WordSourceError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl WordSourceError {
    /// Creates a new word source error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

impl From<std::io::Error> for WordSourceError {
    #[track_caller]
    fn from(err: std::io::Error) -> Self {
        Self::new(format!("I/O error: {}", err))
    }
}
