use super::NotesRepository;
use crate::error::{NotecaseError, Result};
use crate::index::{load_index, save_index, write_atomic};
use crate::location::NotesDirectory;
use crate::model::{new_note_id, note_file_name, now_millis, Note, NoteIndexEntry};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

pub struct FileNotesStore<D: NotesDirectory> {
    location: D,
}

impl<D: NotesDirectory> FileNotesStore<D> {
    pub fn new(location: D) -> Self {
        Self { location }
    }

    /// The directory the next operation will run against.
    pub fn notes_dir(&self) -> Result<PathBuf> {
        self.location.notes_dir()
    }

    /// Content of the entry's file; `None` when it is missing or the entry names
    /// something other than a note file in `dir`. Invalid UTF-8 is replaced.
    fn read_content(&self, dir: &Path, entry: &NoteIndexEntry) -> Result<Option<String>> {
        let Some(path) = entry.note_path(dir) else {
            warn!(id = %entry.id, file = %entry.file_name, "ignoring entry with invalid file name");
            return Ok(None);
        };
        match fs::read(path) {
            Ok(bytes) => Ok(Some(String::from_utf8_lossy(&bytes).into_owned())),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(NotecaseError::Io(e)),
        }
    }
}

impl<D: NotesDirectory> NotesRepository for FileNotesStore<D> {
    fn list(&self) -> Result<Vec<Note>> {
        let dir = self.notes_dir()?;
        let index = load_index(&dir)?;

        let mut notes = Vec::with_capacity(index.entries.len());
        for entry in index.newest_first() {
            match self.read_content(&dir, entry)? {
                Some(content) => notes.push(Note::from_entry(entry, content)),
                None => debug!(id = %entry.id, file = %entry.file_name, "skipping entry with missing file"),
            }
        }
        Ok(notes)
    }

    fn load(&self, id: &str) -> Result<Option<Note>> {
        let dir = self.notes_dir()?;
        let index = load_index(&dir)?;
        let Some(entry) = index.find(id) else {
            return Ok(None);
        };
        Ok(self
            .read_content(&dir, entry)?
            .map(|content| Note::from_entry(entry, content)))
    }

    fn save(&mut self, mut note: Note) -> Result<Note> {
        let dir = self.notes_dir()?;
        if note.id.trim().is_empty() {
            note.id = new_note_id();
        }
        let file_name = note_file_name(&note.id);

        write_atomic(&dir, &dir.join(&file_name), note.content.as_bytes())?;
        note.last_modified = now_millis();

        let mut index = load_index(&dir)?;
        index.upsert(NoteIndexEntry::for_note(&note, file_name));
        save_index(&dir, &index)?;

        info!(id = %note.id, "note saved");
        Ok(note)
    }

    fn delete(&mut self, id: &str) -> Result<()> {
        let dir = self.notes_dir()?;
        let mut index = load_index(&dir)?;
        let Some(entry) = index.remove(id) else {
            return Ok(());
        };

        if let Some(path) = entry.note_path(&dir) {
            match fs::remove_file(path) {
                Ok(()) => {}
                Err(e) if e.kind() == ErrorKind::NotFound => {}
                Err(e) => return Err(NotecaseError::Io(e)),
            }
        }
        save_index(&dir, &index)?;

        info!(id = %id, "note deleted");
        Ok(())
    }

    fn available_labels(&self) -> Result<Vec<String>> {
        let dir = self.notes_dir()?;
        Ok(load_index(&dir)?.labels())
    }
}
