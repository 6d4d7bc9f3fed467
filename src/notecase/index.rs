//! # Notes Index
//!
//! The index (`notes_index.json`) caches per-note metadata so listing never has to
//! scan note files. It is the only source of listing metadata.
//!
//! ## Lifecycle
//!
//! The index has no life of its own beyond the file on disk:
//! - It is read before every store operation. A missing file reads as an empty index.
//! - It is rewritten in full after every mutating operation (read-modify-write).
//!
//! ## Corruption
//!
//! A file that fails to parse is reported as [`NotecaseError::IndexCorrupt`] and the
//! operation fails. Nothing is rebuilt or overwritten behind the user's back.
//!
//! ## Format
//!
//! ```text
//! { "version": 1, "notes": [ { "id", "title", "labels", "fileName", "lastModifiedEpochMs" } ] }
//! ```

use crate::error::{NotecaseError, Result};
use crate::model::{NoteIndexEntry, NotesIndex, INDEX_FILE_NAME};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;
use uuid::Uuid;

impl NotesIndex {
    pub fn find(&self, id: &str) -> Option<&NoteIndexEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// Replaces the entry with the same id, or appends. Either way it ends up last.
    pub fn upsert(&mut self, entry: NoteIndexEntry) {
        self.entries.retain(|e| e.id != entry.id);
        self.entries.push(entry);
    }

    /// Removes the entry for `id`, returning it if present.
    pub fn remove(&mut self, id: &str) -> Option<NoteIndexEntry> {
        let pos = self.entries.iter().position(|e| e.id == id)?;
        Some(self.entries.remove(pos))
    }

    /// Entries newest first. Ties keep the most recently written entry in front.
    pub fn newest_first(&self) -> Vec<&NoteIndexEntry> {
        let mut entries: Vec<&NoteIndexEntry> = self.entries.iter().rev().collect();
        entries.sort_by(|a, b| b.last_modified.cmp(&a.last_modified));
        entries
    }

    /// Every label in use, deduplicated and sorted.
    pub fn labels(&self) -> Vec<String> {
        let mut labels: Vec<String> = self
            .entries
            .iter()
            .flat_map(|e| e.labels.iter().cloned())
            .collect();
        labels.sort();
        labels.dedup();
        labels
    }
}

pub fn index_path(dir: &Path) -> PathBuf {
    dir.join(INDEX_FILE_NAME)
}

/// Reads the index in `dir`, synthesizing an empty one if the file is absent.
pub fn load_index(dir: &Path) -> Result<NotesIndex> {
    let path = index_path(dir);
    if !path.exists() {
        return Ok(NotesIndex::default());
    }
    let content = fs::read_to_string(&path).map_err(NotecaseError::Io)?;
    serde_json::from_str(&content).map_err(|source| NotecaseError::IndexCorrupt { path, source })
}

/// Rewrites the whole index file, pretty printed.
pub fn save_index(dir: &Path, index: &NotesIndex) -> Result<()> {
    let content = serde_json::to_string_pretty(index).map_err(NotecaseError::Serialization)?;
    write_atomic(dir, &index_path(dir), content.as_bytes())?;
    debug!(entries = index.entries.len(), dir = %dir.display(), "index rewritten");
    Ok(())
}

/// Writes via a temp file in the same directory and renames it over `target`.
pub(crate) fn write_atomic(dir: &Path, target: &Path, bytes: &[u8]) -> Result<()> {
    let tmp = dir.join(format!(".notecase-{}.tmp", Uuid::new_v4()));
    fs::write(&tmp, bytes).map_err(NotecaseError::Io)?;
    if let Err(e) = fs::rename(&tmp, target) {
        let _ = fs::remove_file(&tmp);
        return Err(NotecaseError::Io(e));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn entry(id: &str, ts: i64, labels: &[&str]) -> NoteIndexEntry {
        NoteIndexEntry {
            id: id.to_string(),
            title: format!("title {}", id),
            labels: labels.iter().map(|s| s.to_string()).collect(),
            file_name: format!("{}.txt", id),
            last_modified: ts,
        }
    }

    #[test]
    fn missing_file_reads_as_empty_index() {
        let dir = TempDir::new().unwrap();
        let index = load_index(dir.path()).unwrap();
        assert_eq!(index, NotesIndex::default());
    }

    #[test]
    fn save_then_load() {
        let dir = TempDir::new().unwrap();
        let mut index = NotesIndex::default();
        index.upsert(entry("a", 1, &["x"]));
        save_index(dir.path(), &index).unwrap();

        let loaded = load_index(dir.path()).unwrap();
        assert_eq!(loaded, index);

        let raw = fs::read_to_string(index_path(dir.path())).unwrap();
        assert!(raw.contains('\n'), "index should be pretty printed");
    }

    #[test]
    fn corrupt_index_is_an_error() {
        let dir = TempDir::new().unwrap();
        fs::write(index_path(dir.path()), "{ not json").unwrap();

        match load_index(dir.path()) {
            Err(NotecaseError::IndexCorrupt { path, .. }) => {
                assert_eq!(path, index_path(dir.path()));
            }
            other => panic!("expected IndexCorrupt, got {:?}", other),
        }
    }

    #[test]
    fn save_leaves_no_temp_files() {
        let dir = TempDir::new().unwrap();
        save_index(dir.path(), &NotesIndex::default()).unwrap();
        for e in fs::read_dir(dir.path()).unwrap() {
            let name = e.unwrap().file_name().to_string_lossy().to_string();
            assert!(!name.ends_with(".tmp"), "leftover tmp file: {}", name);
        }
    }

    #[test]
    fn upsert_replaces_and_moves_to_end() {
        let mut index = NotesIndex::default();
        index.upsert(entry("a", 1, &[]));
        index.upsert(entry("b", 2, &[]));
        index.upsert(entry("a", 3, &[]));

        let ids: Vec<_> = index.entries.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a"]);
        assert_eq!(index.find("a").unwrap().last_modified, 3);
    }

    #[test]
    fn remove_missing_is_none() {
        let mut index = NotesIndex::default();
        index.upsert(entry("a", 1, &[]));
        assert!(index.remove("zzz").is_none());
        assert!(index.remove("a").is_some());
        assert!(index.entries.is_empty());
    }

    #[test]
    fn newest_first_breaks_ties_by_write_order() {
        let mut index = NotesIndex::default();
        index.upsert(entry("old", 5, &[]));
        index.upsert(entry("a", 10, &[]));
        index.upsert(entry("b", 10, &[]));

        let ids: Vec<_> = index.newest_first().iter().map(|e| e.id.clone()).collect();
        assert_eq!(ids, vec!["b", "a", "old"]);
    }

    #[test]
    fn labels_are_sorted_and_unique() {
        let mut index = NotesIndex::default();
        index.upsert(entry("1", 1, &["b", "a"]));
        index.upsert(entry("2", 2, &["a", "c"]));
        assert_eq!(index.labels(), vec!["a", "b", "c"]);
    }
}
