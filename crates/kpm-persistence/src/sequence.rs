//! The file-backed identifier sequence counter.

use std::fs;
use std::path::{Path, PathBuf};

use kpm_model::SequenceSource;
use tracing::debug;

use crate::atomic::write_atomic;
use crate::error::{PersistenceError, Result};

/// A monotonically increasing counter stored as a decimal integer in a
/// single file.
///
/// [`next`](Self::next) hands out the stored value and persists its
/// successor, so the file always names the value the next call will
/// return. An absent file starts the sequence at 1. Every call consumes
/// a value; callers deciding when to tick is what keeps gaps meaningful.
#[derive(Debug, Clone)]
pub struct SequenceCounter {
    path: PathBuf,
}

impl SequenceCounter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The value the next call to [`next`](Self::next) will return.
    pub fn peek(&self) -> Result<u32> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(1),
            Err(source) => {
                return Err(PersistenceError::Io {
                    operation: "read",
                    path: self.path.clone(),
                    source,
                });
            }
        };
        text.trim()
            .parse()
            .map_err(|_| PersistenceError::MalformedCounter {
                path: self.path.clone(),
                value: text.trim().to_string(),
            })
    }

    /// Consume and return the current value, persisting its successor.
    pub fn next(&mut self) -> Result<u32> {
        let current = self.peek()?;
        write_atomic(&self.path, format!("{}\n", current + 1).as_bytes())?;
        debug!(value = current, "sequence value consumed");
        Ok(current)
    }
}

impl SequenceSource for SequenceCounter {
    type Error = PersistenceError;

    fn next_sequence(&mut self) -> Result<u32> {
        self.next()
    }
}
