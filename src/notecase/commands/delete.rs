use crate::commands::{describe, CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::NotesRepository;

pub fn run<S: NotesRepository>(store: &mut S, id: &str) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    let Some(note) = store.load(id)? else {
        // An entry whose file is gone still gets removed from the index.
        store.delete(id)?;
        result.add_message(CmdMessage::warning(format!("No note with id {}", id)));
        return Ok(result);
    };

    store.delete(id)?;
    result.add_message(CmdMessage::success(format!(
        "Note deleted: {}",
        describe(&note)
    )));
    Ok(result.with_affected_notes(vec![note]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{create, list};
    use crate::commands::MessageLevel;
    use crate::store::memory::InMemoryNotesStore;

    #[test]
    fn deletes_note() {
        let mut store = InMemoryNotesStore::new();
        let id = create::run(&mut store, "T".into(), "".into(), vec![])
            .unwrap()
            .affected_notes[0]
            .id
            .clone();

        let result = run(&mut store, &id).unwrap();
        assert_eq!(result.affected_notes.len(), 1);
        assert_eq!(store.load(&id).unwrap(), None);
        assert!(list::run(&store, None).unwrap().listed_notes.is_empty());
    }

    #[test]
    fn unknown_id_warns() {
        let mut store = InMemoryNotesStore::new();
        let result = run(&mut store, "ghost").unwrap();
        assert!(result.affected_notes.is_empty());
        assert_eq!(result.messages[0].level, MessageLevel::Warning);
    }

    #[test]
    fn entry_without_file_is_still_removed() {
        let mut store = InMemoryNotesStore::new();
        let id = create::run(&mut store, "T".into(), "".into(), vec!["x".into()])
            .unwrap()
            .affected_notes[0]
            .id
            .clone();
        store.lose_file(&id);

        run(&mut store, &id).unwrap();
        assert!(store.available_labels().unwrap().is_empty());
    }
}
