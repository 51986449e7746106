//! The single-slot draft store.

use std::fs;
use std::path::{Path, PathBuf};

use kpm_model::Protokoll;
use tracing::info;

use crate::atomic::write_atomic;
use crate::error::{PersistenceError, Result};

/// A named slot holding at most one in-progress protocol.
///
/// Saving replaces the slot wholesale; loading an absent slot yields
/// `Ok(None)`. A slot that exists but fails to deserialize is reported
/// as [`PersistenceError::MalformedDraft`] so the caller can warn the
/// user instead of quietly starting over.
#[derive(Debug, Clone)]
pub struct DraftSlot {
    path: PathBuf,
}

impl DraftSlot {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Persist a snapshot of the protocol, replacing any previous draft.
    pub fn save(&self, protokoll: &Protokoll) -> Result<()> {
        let json = serde_json::to_vec_pretty(protokoll)
            .map_err(|source| PersistenceError::Serialization { source })?;
        write_atomic(&self.path, &json)?;
        info!(path = %self.path.display(), "draft saved");
        Ok(())
    }

    /// Load the stored draft, if any.
    pub fn load(&self) -> Result<Option<Protokoll>> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(PersistenceError::Io {
                    operation: "read",
                    path: self.path.clone(),
                    source,
                });
            }
        };
        let protokoll =
            serde_json::from_slice(&bytes).map_err(|source| PersistenceError::MalformedDraft {
                path: self.path.clone(),
                source,
            })?;
        Ok(Some(protokoll))
    }

    /// Remove the stored draft. Absence is not an error.
    pub fn clear(&self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(source) => Err(PersistenceError::Io {
                operation: "remove",
                path: self.path.clone(),
                source,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slot_in(dir: &tempfile::TempDir) -> DraftSlot {
        DraftSlot::new(dir.path().join("entwurf.json"))
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let slot = slot_in(&dir);

        let mut protokoll = Protokoll::new();
        protokoll.state = "Bayern".to_string();
        protokoll.fach = "Chirurgie".to_string();
        slot.save(&protokoll).unwrap();

        let geladen = slot.load().unwrap().expect("draft present");
        assert_eq!(geladen, protokoll);
    }

    #[test]
    fn absent_draft_loads_as_none() {
        let dir = tempfile::tempdir().unwrap();
        assert!(slot_in(&dir).load().unwrap().is_none());
    }

    #[test]
    fn corrupt_draft_is_reported_not_discarded() {
        let dir = tempfile::tempdir().unwrap();
        let slot = slot_in(&dir);
        fs::write(slot.path(), b"{ not json").unwrap();

        let err = slot.load().unwrap_err();
        assert!(matches!(err, PersistenceError::MalformedDraft { .. }));
        // The slot contents must survive the failed load.
        assert_eq!(fs::read(slot.path()).unwrap(), b"{ not json");
    }

    #[test]
    fn save_creates_missing_directories() {
        let dir = tempfile::tempdir().unwrap();
        let slot = DraftSlot::new(dir.path().join("tief/verschachtelt/entwurf.json"));
        slot.save(&Protokoll::new()).unwrap();
        assert!(slot.load().unwrap().is_some());
    }

    #[test]
    fn clear_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let slot = slot_in(&dir);
        slot.save(&Protokoll::new()).unwrap();
        slot.clear().unwrap();
        slot.clear().unwrap();
        assert!(slot.load().unwrap().is_none());
    }
}
