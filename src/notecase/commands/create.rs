use crate::commands::{describe, CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Note;
use crate::store::NotesRepository;

pub fn run<S: NotesRepository>(
    store: &mut S,
    title: String,
    content: String,
    labels: Vec<String>,
) -> Result<CmdResult> {
    let note = store.save(Note::new(title, content, labels))?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Note created: {}",
        describe(&note)
    )));
    Ok(result.with_affected_notes(vec![note]))
}
