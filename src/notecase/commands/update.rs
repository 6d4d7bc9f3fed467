use crate::commands::{describe, CmdMessage, CmdResult, NoteUpdate};
use crate::error::{NotecaseError, Result};
use crate::store::NotesRepository;

pub fn run<S: NotesRepository>(store: &mut S, id: &str, update: NoteUpdate) -> Result<CmdResult> {
    let mut note = store
        .load(id)?
        .ok_or_else(|| NotecaseError::NoteNotFound(id.to_string()))?;

    let mut result = CmdResult::default();
    if update.is_empty() {
        result.add_message(CmdMessage::info("Nothing to change."));
        return Ok(result.with_affected_notes(vec![note]));
    }

    if let Some(title) = update.title {
        note.title = title;
    }
    if let Some(content) = update.content {
        note.content = content;
    }
    if let Some(labels) = update.labels {
        note.labels = labels;
    }

    let saved = store.save(note)?;
    result.add_message(CmdMessage::success(format!(
        "Note updated: {}",
        describe(&saved)
    )));
    Ok(result.with_affected_notes(vec![saved]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::create;
    use crate::store::memory::InMemoryNotesStore;

    fn seeded() -> (InMemoryNotesStore, String) {
        let mut store = InMemoryNotesStore::new();
        let id = create::run(&mut store, "T".into(), "old".into(), vec!["a".into()])
            .unwrap()
            .affected_notes[0]
            .id
            .clone();
        (store, id)
    }

    #[test]
    fn updates_only_given_fields() {
        let (mut store, id) = seeded();
        run(
            &mut store,
            &id,
            NoteUpdate {
                content: Some("new".into()),
                ..Default::default()
            },
        )
        .unwrap();

        let note = store.load(&id).unwrap().unwrap();
        assert_eq!(note.title, "T");
        assert_eq!(note.content, "new");
        assert_eq!(note.labels, vec!["a"]);
    }

    #[test]
    fn empty_update_does_not_touch_note() {
        let (mut store, id) = seeded();
        let before = store.load(&id).unwrap().unwrap();
        let result = run(&mut store, &id, NoteUpdate::default()).unwrap();
        assert_eq!(store.load(&id).unwrap().unwrap(), before);
        assert_eq!(result.messages[0].content, "Nothing to change.");
    }

    #[test]
    fn unknown_id_is_not_found() {
        let (mut store, _) = seeded();
        assert!(matches!(
            run(&mut store, "nope", NoteUpdate::default()),
            Err(NotecaseError::NoteNotFound(_))
        ));
    }
}
