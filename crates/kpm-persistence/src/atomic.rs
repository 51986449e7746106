//! Atomic file writes.
//!
//! Every write goes through a sibling temp file that is flushed to disk
//! and renamed over the target, so a crash mid-write leaves the previous
//! contents intact.

use std::fs;
use std::io::Write as _;
use std::path::Path;

use crate::error::{PersistenceError, Result};

/// Write `bytes` to `path` atomically, creating parent directories.
pub(crate) fn write_atomic(path: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|source| PersistenceError::Io {
            operation: "create directory for",
            path: parent.to_path_buf(),
            source,
        })?;
    }

    let mut temp_path = path.as_os_str().to_owned();
    temp_path.push(".tmp");
    let temp_path = std::path::PathBuf::from(temp_path);

    let mut file = fs::File::create(&temp_path).map_err(|source| PersistenceError::Io {
        operation: "create",
        path: temp_path.clone(),
        source,
    })?;
    file.write_all(bytes).map_err(|source| PersistenceError::Io {
        operation: "write",
        path: temp_path.clone(),
        source,
    })?;
    file.sync_all().map_err(|source| PersistenceError::Io {
        operation: "sync",
        path: temp_path.clone(),
        source,
    })?;
    drop(file);

    fs::rename(&temp_path, path).map_err(|source| {
        // Leave no orphaned temp file behind.
        let _ = fs::remove_file(&temp_path);
        PersistenceError::AtomicWriteFailed {
            temp_path: temp_path.clone(),
            target_path: path.to_path_buf(),
            source,
        }
    })
}
