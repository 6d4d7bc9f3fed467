use crate::backup::BackupPipeline;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{NotecaseError, Result};
use crate::location::NotesDirectory;
use std::fs;
use std::path::Path;

/// Restores notes from a backup file into the live directory.
///
/// With a password the file is treated as a sealed backup, otherwise as a plain zip.
/// Matching files are overwritten and the archive's index replaces the current one.
pub fn run<D: NotesDirectory>(
    pipeline: &BackupPipeline<D>,
    source: &Path,
    password: Option<&str>,
) -> Result<CmdResult> {
    let bytes = fs::read(source).map_err(NotecaseError::Io)?;
    let written = match password {
        Some(password) => pipeline.import_encrypted(&bytes, password)?,
        None => pipeline.import_archive(&bytes)?,
    };

    let mut result = CmdResult::default();
    if written.is_empty() {
        result.add_message(CmdMessage::warning(format!(
            "No notes found in {}",
            source.display()
        )));
    } else {
        result.add_message(CmdMessage::success(format!(
            "Restored {} file(s) from {}",
            written.len(),
            source.display()
        )));
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backup::{archive, cipher};
    use crate::commands::MessageLevel;
    use tempfile::TempDir;

    fn packed_source(temp: &TempDir) -> Vec<u8> {
        let src = temp.path().join("src");
        fs::create_dir_all(&src).unwrap();
        fs::write(src.join("a.txt"), "alpha").unwrap();
        archive::pack(&src).unwrap()
    }

    #[test]
    fn imports_plain_zip() {
        let temp = TempDir::new().unwrap();
        let zip_path = temp.path().join("export.zip");
        fs::write(&zip_path, packed_source(&temp)).unwrap();
        let target = temp.path().join("notes");

        let result = run(&BackupPipeline::new(target.clone()), &zip_path, None).unwrap();
        assert_eq!(result.messages[0].level, MessageLevel::Success);
        assert_eq!(fs::read_to_string(target.join("a.txt")).unwrap(), "alpha");
    }

    #[test]
    fn imports_sealed_backup() {
        let temp = TempDir::new().unwrap();
        let enc_path = temp.path().join("backup.enc");
        fs::write(&enc_path, cipher::encrypt(&packed_source(&temp), "pw").unwrap()).unwrap();
        let target = temp.path().join("notes");

        run(&BackupPipeline::new(target.clone()), &enc_path, Some("pw")).unwrap();
        assert!(target.join("a.txt").exists());
    }

    #[test]
    fn empty_archive_warns() {
        let temp = TempDir::new().unwrap();
        let empty = temp.path().join("empty");
        fs::create_dir_all(&empty).unwrap();
        let zip_path = temp.path().join("empty.zip");
        fs::write(&zip_path, archive::pack(&empty).unwrap()).unwrap();

        let result = run(
            &BackupPipeline::new(temp.path().join("notes")),
            &zip_path,
            None,
        )
        .unwrap();
        assert_eq!(result.messages[0].level, MessageLevel::Warning);
    }
}
