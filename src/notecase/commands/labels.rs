use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::NotesRepository;

pub fn run<S: NotesRepository>(store: &S) -> Result<CmdResult> {
    Ok(CmdResult::default().with_labels(store.available_labels()?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::create;
    use crate::store::memory::InMemoryNotesStore;

    #[test]
    fn merges_labels_across_notes() {
        let mut store = InMemoryNotesStore::new();
        create::run(&mut store, "1".into(), "".into(), vec!["b".into(), "a".into()]).unwrap();
        create::run(&mut store, "2".into(), "".into(), vec!["a".into(), "c".into()]).unwrap();
        assert_eq!(run(&store).unwrap().labels, vec!["a", "b", "c"]);
    }
}
