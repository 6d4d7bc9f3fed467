use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::NotesRepository;

/// Notes newest first, optionally only those carrying `label`.
pub fn run<S: NotesRepository>(store: &S, label: Option<&str>) -> Result<CmdResult> {
    let mut notes = store.list()?;
    if let Some(label) = label {
        notes.retain(|n| n.has_label(label));
    }
    Ok(CmdResult::default().with_listed_notes(notes))
}
