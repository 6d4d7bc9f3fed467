use crate::error::{NotecaseError, Result};
use chrono::Utc;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Takes a sealed backup file off the device.
///
/// Called once per export; an error is reported to the caller as-is.
pub trait UploadSink {
    fn upload(&mut self, file: &Path) -> Result<()>;
}

impl<F> UploadSink for F
where
    F: FnMut(&Path) -> Result<()>,
{
    fn upload(&mut self, file: &Path) -> Result<()> {
        self(file)
    }
}

/// Copies sealed backups into a destination directory, e.g. a synced folder or
/// a mounted drive. Each upload gets a timestamped name.
#[derive(Debug)]
pub struct DirectorySink {
    destination: PathBuf,
    uploaded: Vec<PathBuf>,
}

impl DirectorySink {
    pub fn new(destination: impl Into<PathBuf>) -> Self {
        Self {
            destination: destination.into(),
            uploaded: Vec::new(),
        }
    }

    pub fn uploaded(&self) -> &[PathBuf] {
        &self.uploaded
    }

    fn target_for(&self) -> PathBuf {
        let stamp = Utc::now().format("%Y%m%d-%H%M%S%.3f");
        self.destination.join(format!("notes_backup_{}.enc", stamp))
    }
}

impl UploadSink for DirectorySink {
    fn upload(&mut self, file: &Path) -> Result<()> {
        fs::create_dir_all(&self.destination)
            .map_err(|e| NotecaseError::Upload(format!("{}: {}", self.destination.display(), e)))?;
        let target = self.target_for();
        fs::copy(file, &target)
            .map_err(|e| NotecaseError::Upload(format!("{}: {}", target.display(), e)))?;
        info!(target = %target.display(), "backup uploaded");
        self.uploaded.push(target);
        Ok(())
    }
}
