//! Persistence error types.

use std::path::PathBuf;
use thiserror::Error;

/// Persistence operation error.
#[derive(Debug, Error)]
pub enum PersistenceError {
    /// File I/O error.
    #[error("Failed to {operation} file: {path}")]
    Io {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Atomic write failed (temp file couldn't be renamed).
    #[error("Failed to complete save operation")]
    AtomicWriteFailed {
        temp_path: PathBuf,
        target_path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The draft slot holds bytes that do not deserialize to a protocol.
    ///
    /// Deliberately distinct from an absent draft: callers must be able
    /// to warn the user instead of silently discarding their work.
    #[error("Draft at {path} is corrupt and cannot be loaded")]
    MalformedDraft {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The counter slot holds something that is not an integer.
    #[error("Sequence counter at {path} is corrupt: {value:?}")]
    MalformedCounter { path: PathBuf, value: String },

    /// Snapshot serialization failed.
    #[error("Failed to serialize protocol snapshot")]
    Serialization {
        #[source]
        source: serde_json::Error,
    },
}

impl PersistenceError {
    /// A message suitable for direct display to the user.
    pub fn user_message(&self) -> String {
        match self {
            Self::Io {
                operation, path, ..
            } => format!("Could not {} the file at {}", operation, path.display()),
            Self::AtomicWriteFailed { target_path, .. } => format!(
                "Could not save the file to {}. Check disk space and permissions.",
                target_path.display()
            ),
            Self::MalformedDraft { path, .. } => format!(
                "The saved draft at {} is corrupt. Unsaved work was not discarded; \
                 the draft slot was left untouched.",
                path.display()
            ),
            Self::MalformedCounter { path, .. } => format!(
                "The sequence counter at {} is unreadable.",
                path.display()
            ),
            Self::Serialization { .. } => {
                "An error occurred while writing the protocol snapshot.".to_string()
            }
        }
    }
}

/// Result type alias for persistence operations.
pub type Result<T> = std::result::Result<T, PersistenceError>;
