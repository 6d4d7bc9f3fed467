use crate::backup::{BackupPipeline, UploadSink};
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::location::NotesDirectory;
use std::path::Path;

/// Unencrypted zip of the notes directory, left in `output_dir`.
pub fn plain<D: NotesDirectory>(pipeline: &BackupPipeline<D>, output_dir: &Path) -> Result<CmdResult> {
    let path = pipeline.export_plain(output_dir)?;
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Exported to {}",
        path.display()
    )));
    Ok(result.with_paths(vec![path]))
}

/// Password protected backup handed to `sink`.
pub fn encrypted<D: NotesDirectory, S: UploadSink + ?Sized>(
    pipeline: &BackupPipeline<D>,
    password: &str,
    output_dir: &Path,
    sink: &mut S,
) -> Result<CmdResult> {
    pipeline.export_encrypted(password, output_dir, sink)?;
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success("Encrypted backup uploaded."));
    Ok(result)
}
