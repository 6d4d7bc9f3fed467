use super::sink::UploadSink;
use super::{archive, cipher};
use crate::error::{NotecaseError, Result};
use crate::location::NotesDirectory;
use crate::model::now_millis;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

const PACKED_NAME: &str = "notes_backup.zip";
const SEALED_NAME: &str = "notes_backup.enc";

/// Runs exports and imports against the notes directory.
pub struct BackupPipeline<D: NotesDirectory> {
    location: D,
}

impl<D: NotesDirectory> BackupPipeline<D> {
    pub fn new(location: D) -> Self {
        Self { location }
    }

    /// Packs, seals and uploads the notes directory.
    ///
    /// The intermediate `notes_backup.zip` and `notes_backup.enc` in `output_dir` are
    /// removed afterwards whether or not the upload succeeded.
    pub fn export_encrypted<S: UploadSink + ?Sized>(
        &self,
        password: &str,
        output_dir: &Path,
        sink: &mut S,
    ) -> Result<()> {
        let notes_dir = self.location.notes_dir()?;
        fs::create_dir_all(output_dir).map_err(NotecaseError::Io)?;

        let packed_path = output_dir.join(PACKED_NAME);
        let sealed_path = output_dir.join(SEALED_NAME);
        let _cleanup = Artifacts(vec![packed_path.clone(), sealed_path.clone()]);

        let packed = archive::pack(&notes_dir)?;
        fs::write(&packed_path, &packed).map_err(NotecaseError::Io)?;

        let sealed = cipher::encrypt(&packed, password)?;
        fs::write(&sealed_path, &sealed).map_err(NotecaseError::Io)?;

        sink.upload(&sealed_path)?;
        info!(bytes = sealed.len(), "encrypted backup exported");
        Ok(())
    }

    /// Packs the notes directory into `notes_export_{millis}.zip` and leaves it there.
    pub fn export_plain(&self, output_dir: &Path) -> Result<PathBuf> {
        let notes_dir = self.location.notes_dir()?;
        fs::create_dir_all(output_dir).map_err(NotecaseError::Io)?;

        let target = output_dir.join(format!("notes_export_{}.zip", now_millis()));
        let packed = archive::pack(&notes_dir)?;
        fs::write(&target, packed).map_err(NotecaseError::Io)?;

        info!(path = %target.display(), "plain archive exported");
        Ok(target)
    }

    /// Unpacks an archive straight into the live notes directory.
    pub fn import_archive(&self, archive_bytes: &[u8]) -> Result<Vec<String>> {
        let notes_dir = self.location.notes_dir()?;
        let written = archive::unpack(archive_bytes, &notes_dir)?;
        info!(files = written.len(), "archive imported");
        Ok(written)
    }

    /// Opens a sealed backup and imports the archive inside it.
    pub fn import_encrypted(&self, sealed: &[u8], password: &str) -> Result<Vec<String>> {
        let archive_bytes = cipher::decrypt(sealed, password)?;
        self.import_archive(&archive_bytes)
    }
}

/// Files removed when the guard goes out of scope.
struct Artifacts(Vec<PathBuf>);

impl Drop for Artifacts {
    fn drop(&mut self) {
        for path in &self.0 {
            match fs::remove_file(path) {
                Ok(()) => debug!(path = %path.display(), "removed backup artifact"),
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
                Err(e) => warn!(path = %path.display(), error = %e, "could not remove backup artifact"),
            }
        }
    }
}
