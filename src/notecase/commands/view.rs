use crate::commands::CmdResult;
use crate::error::{NotecaseError, Result};
use crate::store::NotesRepository;

pub fn run<S: NotesRepository>(store: &S, id: &str) -> Result<CmdResult> {
    let note = store
        .load(id)?
        .ok_or_else(|| NotecaseError::NoteNotFound(id.to_string()))?;
    Ok(CmdResult::default().with_listed_notes(vec![note]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::create;
    use crate::store::memory::InMemoryNotesStore;

    #[test]
    fn views_existing_note() {
        let mut store = InMemoryNotesStore::new();
        let id = create::run(&mut store, "T".into(), "body".into(), vec![])
            .unwrap()
            .affected_notes[0]
            .id
            .clone();
        let result = run(&store, &id).unwrap();
        assert_eq!(result.listed_notes[0].content, "body");
    }

    #[test]
    fn missing_note_is_an_error() {
        let store = InMemoryNotesStore::new();
        assert!(matches!(
            run(&store, "x"),
            Err(NotecaseError::NoteNotFound(id)) if id == "x"
        ));
    }
}
