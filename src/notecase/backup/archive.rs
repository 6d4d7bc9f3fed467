use crate::error::{NotecaseError, Result};
use crate::index::write_atomic;
use crate::model::{bare_file_name, is_notes_file};
use std::fs;
use std::io::{Cursor, Read, Write};
use std::path::Path;
use tracing::debug;
use zip::write::FileOptions;
use zip::{CompressionMethod, ZipArchive, ZipWriter};

/// Zips the note files and index found directly in `dir`.
///
/// Entries are bare file names, sorted so identical directories pack identically.
pub fn pack(dir: &Path) -> Result<Vec<u8>> {
    let mut names = Vec::new();
    for entry in fs::read_dir(dir).map_err(NotecaseError::Io)? {
        let entry = entry.map_err(NotecaseError::Io)?;
        if !entry.file_type().map_err(NotecaseError::Io)?.is_file() {
            continue;
        }
        if let Some(name) = entry.file_name().to_str() {
            if is_notes_file(name) {
                names.push(name.to_string());
            }
        }
    }
    names.sort();

    let options = FileOptions::default().compression_method(CompressionMethod::Deflated);
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    for name in &names {
        let bytes = fs::read(dir.join(name)).map_err(NotecaseError::Io)?;
        writer.start_file(name.as_str(), options)?;
        writer.write_all(&bytes).map_err(NotecaseError::Io)?;
    }
    let cursor = writer.finish()?;

    debug!(entries = names.len(), dir = %dir.display(), "packed notes archive");
    Ok(cursor.into_inner())
}

/// Extracts note files and the index from `archive` into `target`.
///
/// Embedded paths are stripped to the bare file name; anything that is not a note
/// file or the index is dropped silently. Existing files are overwritten.
/// Returns the names written.
pub fn unpack(archive: &[u8], target: &Path) -> Result<Vec<String>> {
    let mut zip = ZipArchive::new(Cursor::new(archive))?;
    fs::create_dir_all(target).map_err(NotecaseError::Io)?;

    let mut written = Vec::new();
    for i in 0..zip.len() {
        let mut file = zip.by_index(i)?;
        if file.is_dir() {
            continue;
        }
        let Some(name) = bare_file_name(file.name()) else {
            debug!(entry = %file.name(), "dropping archive entry without a file name");
            continue;
        };
        if !is_notes_file(name) {
            debug!(entry = %file.name(), "dropping archive entry");
            continue;
        }
        let name = name.to_string();

        let mut bytes = Vec::new();
        file.read_to_end(&mut bytes).map_err(NotecaseError::Io)?;
        write_atomic(target, &target.join(&name), &bytes)?;
        written.push(name);
    }

    debug!(entries = written.len(), target = %target.display(), "unpacked notes archive");
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::INDEX_FILE_NAME;
    use tempfile::TempDir;

    fn zip_of(entries: &[(&str, &str)]) -> Vec<u8> {
        let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
        for (name, content) in entries {
            if name.ends_with('/') {
                writer.add_directory(*name, FileOptions::default()).unwrap();
            } else {
                writer.start_file(*name, FileOptions::default()).unwrap();
                writer.write_all(content.as_bytes()).unwrap();
            }
        }
        writer.finish().unwrap().into_inner()
    }

    fn entry_names(archive: &[u8]) -> Vec<String> {
        let zip = ZipArchive::new(Cursor::new(archive)).unwrap();
        zip.file_names().map(String::from).collect()
    }

    #[test]
    fn pack_includes_notes_and_index_only() {
        let src = TempDir::new().unwrap();
        fs::write(src.path().join("b.txt"), "bee").unwrap();
        fs::write(src.path().join("a.txt"), "ay").unwrap();
        fs::write(src.path().join(INDEX_FILE_NAME), "{}").unwrap();
        fs::write(src.path().join("c.jpg"), [0xff, 0xd8]).unwrap();
        fs::create_dir(src.path().join("sub.txt")).unwrap();

        let archive = pack(src.path()).unwrap();
        assert_eq!(
            entry_names(&archive),
            vec!["a.txt", "b.txt", INDEX_FILE_NAME]
        );
    }

    #[test]
    fn pack_is_deterministic() {
        let src = TempDir::new().unwrap();
        fs::write(src.path().join("x.txt"), "1").unwrap();
        fs::write(src.path().join("y.txt"), "2").unwrap();
        assert_eq!(pack(src.path()).unwrap(), pack(src.path()).unwrap());
    }

    #[test]
    fn pack_unpack_reproduces_files() {
        let src = TempDir::new().unwrap();
        let dst = TempDir::new().unwrap();
        fs::write(src.path().join("a.txt"), "first").unwrap();
        fs::write(src.path().join("b.txt"), "second\nline").unwrap();
        fs::write(src.path().join(INDEX_FILE_NAME), "{\"version\":1}").unwrap();
        fs::write(src.path().join("c.jpg"), "img").unwrap();

        let written = unpack(&pack(src.path()).unwrap(), dst.path()).unwrap();
        assert_eq!(written.len(), 3);
        for name in ["a.txt", "b.txt", INDEX_FILE_NAME] {
            assert_eq!(
                fs::read(src.path().join(name)).unwrap(),
                fs::read(dst.path().join(name)).unwrap()
            );
        }
        assert!(!dst.path().join("c.jpg").exists());
    }

    #[test]
    fn unpack_strips_paths() {
        let dst = TempDir::new().unwrap();
        let archive = zip_of(&[
            ("../../escape.txt", "nope"),
            ("nested/dir/note.txt", "ok"),
            ("C:\\windows\\win.txt", "win"),
        ]);

        let mut written = unpack(&archive, &dst.path().join("notes")).unwrap();
        written.sort();
        assert_eq!(written, vec!["escape.txt", "note.txt", "win.txt"]);
        assert!(dst.path().join("notes").join("escape.txt").exists());
        assert!(!dst.path().join("escape.txt").exists());
    }

    #[test]
    fn unpack_drops_foreign_entries_and_directories() {
        let dst = TempDir::new().unwrap();
        let archive = zip_of(&[
            ("folder/", ""),
            ("script.sh", "rm -rf"),
            ("other.json", "{}"),
            ("keep.txt", "kept"),
        ]);

        let written = unpack(&archive, dst.path()).unwrap();
        assert_eq!(written, vec!["keep.txt"]);
        assert!(!dst.path().join("folder").exists());
        assert!(!dst.path().join("script.sh").exists());
    }

    #[test]
    fn unpack_overwrites_existing_files() {
        let dst = TempDir::new().unwrap();
        fs::write(dst.path().join("n.txt"), "old").unwrap();
        unpack(&zip_of(&[("n.txt", "new")]), dst.path()).unwrap();
        assert_eq!(fs::read_to_string(dst.path().join("n.txt")).unwrap(), "new");
    }

    #[test]
    fn unpack_rejects_non_zip() {
        let dst = TempDir::new().unwrap();
        assert!(matches!(
            unpack(b"definitely not a zip", dst.path()),
            Err(NotecaseError::Archive(_))
        ));
    }
}
