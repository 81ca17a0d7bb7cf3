//! Scan/export session state, independent of any UI toolkit.
//!
//! A [`Session`] owns the current [`ModCollection`] and the directory it
//! was scanned from. UI layers dispatch [`Command`]s to it instead of
//! sharing mutable lists; the collection is replaced wholesale on every
//! scan.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::info;

use crate::export::{export_collection, ExportError};
use crate::modinfo::{scan_mods, ModCollection};

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Failed to scan {dir}: {source}")]
    Scan {
        dir: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Export(#[from] ExportError),
}

/// Operations a UI can request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Rebuild the collection from a workshop content directory.
    Scan(PathBuf),
    /// Write the four export artifacts into a target directory.
    Export(PathBuf),
    /// Drop the current collection.
    Clear,
}

/// What a successfully dispatched [`Command`] produced.
#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    Scanned(usize),
    Exported(Vec<PathBuf>),
    Cleared,
}

#[derive(Debug, Default)]
pub struct Session {
    collection: ModCollection,
    scanned_dir: Option<PathBuf>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn collection(&self) -> &ModCollection {
        &self.collection
    }

    /// Directory the current collection was scanned from, if any.
    pub fn scanned_dir(&self) -> Option<&Path> {
        self.scanned_dir.as_deref()
    }

    pub fn mod_count(&self) -> usize {
        self.collection.len()
    }

    /// Execute a command against the current state.
    ///
    /// A failed `Scan` leaves the previous collection in place.
    pub fn dispatch(&mut self, command: Command) -> Result<Outcome, SessionError> {
        match command {
            Command::Scan(dir) => {
                let collection = scan_mods(&dir).map_err(|source| SessionError::Scan {
                    dir: dir.clone(),
                    source,
                })?;
                info!(
                    "scanned {} mods under {}",
                    collection.len(),
                    dir.display()
                );
                self.collection = collection;
                self.scanned_dir = Some(dir);
                Ok(Outcome::Scanned(self.collection.len()))
            }
            Command::Export(target_dir) => {
                let files = export_collection(&self.collection, &target_dir)?;
                info!("exported {} files to {}", files.len(), target_dir.display());
                Ok(Outcome::Exported(files))
            }
            Command::Clear => {
                self.collection = ModCollection::new();
                self.scanned_dir = None;
                Ok(Outcome::Cleared)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;

    fn write_mod(root: &Path, container: &str, info: &str) {
        let mod_dir = root.join(container).join("mods").join("m");
        fs::create_dir_all(&mod_dir).unwrap();
        fs::write(mod_dir.join("mod.info"), info).unwrap();
    }

    #[test]
    fn test_scan_then_clear() {
        let temp_dir = tempfile::tempdir().unwrap();
        let root = temp_dir.path().join("workshop");
        write_mod(&root, "1000", "id=1000\nname=Alpha\n");

        let mut session = Session::new();
        let outcome = session.dispatch(Command::Scan(root.clone())).unwrap();
        assert_eq!(outcome, Outcome::Scanned(1));
        assert_eq!(session.mod_count(), 1);
        assert_eq!(session.scanned_dir(), Some(root.as_path()));

        assert_eq!(session.dispatch(Command::Clear).unwrap(), Outcome::Cleared);
        assert_eq!(session.mod_count(), 0);
        assert_eq!(session.scanned_dir(), None);
    }

    #[test]
    fn test_rescan_replaces_collection() {
        let temp_dir = tempfile::tempdir().unwrap();
        let first = temp_dir.path().join("a");
        let second = temp_dir.path().join("b");
        write_mod(&first, "1000", "id=1000\nname=Alpha\n");
        write_mod(&second, "2000", "id=2000\nname=Beta\n");
        write_mod(&second, "3000", "id=3000\nname=Gamma\n");

        let mut session = Session::new();
        session.dispatch(Command::Scan(first)).unwrap();
        session.dispatch(Command::Scan(second.clone())).unwrap();

        assert_eq!(session.mod_count(), 2);
        assert_eq!(session.scanned_dir(), Some(second.as_path()));
        assert!(!session
            .collection()
            .workshop_items()
            .contains(&"1000"));
    }

    #[test]
    fn test_failed_scan_keeps_previous_collection() {
        let temp_dir = tempfile::tempdir().unwrap();
        let root = temp_dir.path().join("workshop");
        write_mod(&root, "1000", "id=1000\nname=Alpha\n");

        let mut session = Session::new();
        session.dispatch(Command::Scan(root)).unwrap();

        let missing = temp_dir.path().join("missing");
        assert!(session.dispatch(Command::Scan(missing)).is_err());
        assert_eq!(session.mod_count(), 1);
    }

    #[test]
    fn test_export_command() {
        let temp_dir = tempfile::tempdir().unwrap();
        let root = temp_dir.path().join("workshop");
        write_mod(&root, "1000", "id=1000\nname=Alpha\n");

        let mut session = Session::new();
        session.dispatch(Command::Scan(root)).unwrap();

        let target = temp_dir.path().join("out");
        let outcome = session.dispatch(Command::Export(target.clone())).unwrap();
        let Outcome::Exported(files) = outcome else {
            panic!("expected Exported outcome");
        };
        assert_eq!(files.len(), 4);
        assert!(target.join("ModInfo.csv").is_file());
    }
}
