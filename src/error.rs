use std::path::PathBuf;

use thiserror::Error;

/// Custom error types for clipmark
#[derive(Debug, Error)]
pub enum ClipmarkError {
    #[error("Bookmark file {} is corrupt: {source}", path.display())]
    CorruptBookmarkFile {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Bookmark index {index} is out of range (have {len})")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Could not run '{command}': {reason}")]
    ExternalProcessFailure { command: String, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ClipmarkError>;

impl ClipmarkError {
    pub(crate) fn process(command: impl Into<String>, reason: impl ToString) -> Self {
        ClipmarkError::ExternalProcessFailure {
            command: command.into(),
            reason: reason.to_string(),
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
