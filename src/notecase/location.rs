//! # Storage Location
//!
//! Decides which directory holds the notes. A persisted override (the `notes_dir`
//! preference) wins when it points at a writable directory; otherwise the default
//! location is used. Whatever is returned exists and is writable.
//!
//! Writability is checked by probing: create the directory, write a marker file,
//! delete it. An override that fails the probe is cleared from the preferences
//! rather than left in place.

use crate::config::{PreferenceStore, NOTES_DIR_KEY};
use crate::error::{NotecaseError, Result};
use directories::ProjectDirs;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

const PROBE_FILENAME: &str = ".notecase-write-probe";

/// Anything that can hand out the notes directory for an operation.
pub trait NotesDirectory {
    fn notes_dir(&self) -> Result<PathBuf>;
}

/// A fixed directory, created on demand.
impl NotesDirectory for PathBuf {
    fn notes_dir(&self) -> Result<PathBuf> {
        ensure_dir(self)?;
        Ok(self.clone())
    }
}

impl<D: NotesDirectory + ?Sized> NotesDirectory for &D {
    fn notes_dir(&self) -> Result<PathBuf> {
        (**self).notes_dir()
    }
}

#[derive(Debug, Clone)]
pub struct StorageLocator<P: PreferenceStore> {
    prefs: P,
    default_dir: PathBuf,
}

impl<P: PreferenceStore> StorageLocator<P> {
    pub fn new(prefs: P, default_dir: PathBuf) -> Self {
        Self { prefs, default_dir }
    }

    /// The persisted override, if any.
    pub fn override_path(&self) -> Result<Option<PathBuf>> {
        Ok(self.prefs.get(NOTES_DIR_KEY)?.map(PathBuf::from))
    }

    /// Returns a directory that exists and is writable.
    pub fn resolve(&self) -> Result<PathBuf> {
        if let Some(path) = self.override_path()? {
            if probe_writable(&path) {
                return Ok(path);
            }
            warn!(path = %path.display(), "notes directory override is not writable, discarding it");
            self.prefs.remove(NOTES_DIR_KEY)?;
        }

        ensure_dir(&self.default_dir)?;
        debug!(path = %self.default_dir.display(), "using default notes directory");
        Ok(self.default_dir.clone())
    }

    /// Persists `path` as the override, or clears it with `None`.
    ///
    /// A path that fails the write probe clears the override instead. Returns the
    /// override in effect afterwards.
    pub fn set_override(&self, path: Option<&Path>) -> Result<Option<PathBuf>> {
        let Some(path) = path else {
            self.prefs.remove(NOTES_DIR_KEY)?;
            return Ok(None);
        };

        let path = absolutize(path)?;
        if !probe_writable(&path) {
            warn!(path = %path.display(), "rejecting unwritable notes directory");
            self.prefs.remove(NOTES_DIR_KEY)?;
            return Ok(None);
        }

        self.prefs
            .set(NOTES_DIR_KEY, &path.to_string_lossy())?;
        Ok(Some(path))
    }
}

impl<P: PreferenceStore> NotesDirectory for StorageLocator<P> {
    fn notes_dir(&self) -> Result<PathBuf> {
        self.resolve()
    }
}

/// `<data dir>/notes` for this platform.
pub fn platform_default_dir() -> Result<PathBuf> {
    let dirs = ProjectDirs::from("com", "notecase", "notecase").ok_or_else(|| {
        NotecaseError::StorageUnavailable {
            path: PathBuf::new(),
            source: io::Error::new(io::ErrorKind::NotFound, "no home directory"),
        }
    })?;
    Ok(dirs.data_dir().join("notes"))
}

fn ensure_dir(path: &Path) -> Result<()> {
    fs::create_dir_all(path).map_err(|source| NotecaseError::StorageUnavailable {
        path: path.to_path_buf(),
        source,
    })
}

fn absolutize(path: &Path) -> Result<PathBuf> {
    if path.is_absolute() {
        Ok(path.to_path_buf())
    } else {
        Ok(std::env::current_dir()
            .map_err(NotecaseError::Io)?
            .join(path))
    }
}

/// Create-and-probe: the directory must accept a new file.
fn probe_writable(path: &Path) -> bool {
    if fs::create_dir_all(path).is_err() {
        return false;
    }
    let marker = path.join(PROBE_FILENAME);
    let ok = fs::write(&marker, b"probe").is_ok();
    let _ = fs::remove_file(&marker);
    ok
}
