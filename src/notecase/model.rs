use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Extension of note content files.
pub const NOTE_FILE_EXT: &str = ".txt";

/// Name of the metadata index file inside the notes directory.
pub const INDEX_FILE_NAME: &str = "notes_index.json";

/// Current schema version written into the index.
pub const INDEX_VERSION: u32 = 1;

/// A single note. Identity is `id`; everything else is overwritten on re-save.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: String,
    pub title: String,
    pub content: String,
    pub labels: Vec<String>,
    #[serde(rename = "lastModifiedEpochMs")]
    pub last_modified: i64,
}

impl Note {
    /// A note that has not been saved yet (blank id).
    pub fn new(title: impl Into<String>, content: impl Into<String>, labels: Vec<String>) -> Self {
        Self {
            id: String::new(),
            title: title.into(),
            content: content.into(),
            labels,
            last_modified: 0,
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn has_label(&self, label: &str) -> bool {
        self.labels.iter().any(|l| l == label)
    }

    pub(crate) fn from_entry(entry: &NoteIndexEntry, content: String) -> Self {
        Self {
            id: entry.id.clone(),
            title: entry.title.clone(),
            content,
            labels: entry.labels.clone(),
            last_modified: entry.last_modified,
        }
    }
}

/// Cached metadata for one note, as stored in the index file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NoteIndexEntry {
    pub id: String,
    pub title: String,
    pub labels: Vec<String>,
    pub file_name: String,
    #[serde(rename = "lastModifiedEpochMs")]
    pub last_modified: i64,
}

impl NoteIndexEntry {
    pub fn for_note(note: &Note, file_name: impl Into<String>) -> Self {
        Self {
            id: note.id.clone(),
            title: note.title.clone(),
            labels: note.labels.clone(),
            file_name: file_name.into(),
            last_modified: note.last_modified,
        }
    }

    /// Path of the backing file, or `None` when `file_name` is not a bare note
    /// file name and would point outside `dir`.
    pub fn note_path(&self, dir: &Path) -> Option<PathBuf> {
        match bare_file_name(&self.file_name) {
            Some(name) if name == self.file_name && name.ends_with(NOTE_FILE_EXT) => {
                Some(dir.join(name))
            }
            _ => None,
        }
    }
}

/// The whole index file. Entry order is write order: re-saved notes move to the end.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotesIndex {
    #[serde(default = "default_version")]
    pub version: u32,
    #[serde(default, rename = "notes")]
    pub entries: Vec<NoteIndexEntry>,
}

fn default_version() -> u32 {
    INDEX_VERSION
}

impl Default for NotesIndex {
    fn default() -> Self {
        Self {
            version: INDEX_VERSION,
            entries: Vec::new(),
        }
    }
}

/// File name backing a note id.
pub fn note_file_name(id: &str) -> String {
    format!("{}{}", id, NOTE_FILE_EXT)
}

/// Whether a bare file name belongs in a notes directory snapshot.
pub fn is_notes_file(name: &str) -> bool {
    name.ends_with(NOTE_FILE_EXT) || name == INDEX_FILE_NAME
}

/// Last path component of `name`, whatever separator produced it.
pub fn bare_file_name(name: &str) -> Option<&str> {
    let name = name.rsplit(['/', '\\']).next()?;
    match name {
        "" | "." | ".." => None,
        _ => Some(name),
    }
}

/// Fresh opaque note id.
pub fn new_note_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// Current time in milliseconds since the epoch.
pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

/// Splits comma separated label input, trimming items and dropping blanks and repeats.
pub fn parse_labels(input: &str) -> Vec<String> {
    let mut labels: Vec<String> = Vec::new();
    for label in input.split(',').map(str::trim).filter(|l| !l.is_empty()) {
        if !labels.iter().any(|l| l == label) {
            labels.push(label.to_string());
        }
    }
    labels
}
