use super::NotesRepository;
use crate::error::Result;
use crate::model::{new_note_id, note_file_name, now_millis, Note, NoteIndexEntry, NotesIndex};
use std::collections::HashMap;

/// Keeps the index and file contents in memory, mirroring [`super::fs::FileNotesStore`].
#[derive(Debug, Default)]
pub struct InMemoryNotesStore {
    index: NotesIndex,
    files: HashMap<String, String>,
}

impl InMemoryNotesStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drops a note's content while keeping its index entry.
    #[cfg(test)]
    pub(crate) fn lose_file(&mut self, id: &str) {
        self.files.remove(&note_file_name(id));
    }
}

impl NotesRepository for InMemoryNotesStore {
    fn list(&self) -> Result<Vec<Note>> {
        Ok(self
            .index
            .newest_first()
            .into_iter()
            .filter_map(|entry| {
                self.files
                    .get(&entry.file_name)
                    .map(|content| Note::from_entry(entry, content.clone()))
            })
            .collect())
    }

    fn load(&self, id: &str) -> Result<Option<Note>> {
        Ok(self.index.find(id).and_then(|entry| {
            self.files
                .get(&entry.file_name)
                .map(|content| Note::from_entry(entry, content.clone()))
        }))
    }

    fn save(&mut self, mut note: Note) -> Result<Note> {
        if note.id.trim().is_empty() {
            note.id = new_note_id();
        }
        let file_name = note_file_name(&note.id);
        self.files.insert(file_name.clone(), note.content.clone());
        note.last_modified = now_millis();
        self.index.upsert(NoteIndexEntry::for_note(&note, file_name));
        Ok(note)
    }

    fn delete(&mut self, id: &str) -> Result<()> {
        if let Some(entry) = self.index.remove(id) {
            self.files.remove(&entry.file_name);
        }
        Ok(())
    }

    fn available_labels(&self) -> Result<Vec<String>> {
        Ok(self.index.labels())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn behaves_like_file_store() {
        let mut store = InMemoryNotesStore::new();
        let a = store
            .save(Note::new("A", "a", vec!["x".into()]))
            .unwrap();
        let b = store.save(Note::new("B", "b", vec![])).unwrap();

        let ids: Vec<_> = store.list().unwrap().into_iter().map(|n| n.id).collect();
        assert_eq!(ids, vec![b.id.clone(), a.id.clone()]);

        store.lose_file(&a.id);
        assert_eq!(store.load(&a.id).unwrap(), None);
        assert_eq!(store.list().unwrap().len(), 1);
        assert_eq!(store.available_labels().unwrap(), vec!["x"]);

        store.delete(&b.id).unwrap();
        store.delete(&b.id).unwrap();
        assert!(store.list().unwrap().is_empty());
    }
}
