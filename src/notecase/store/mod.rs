//! # Storage Layer
//!
//! The [`NotesRepository`] trait is the note CRUD surface the rest of the crate
//! talks to.
//!
//! ## Implementations
//!
//! - [`fs::FileNotesStore`]: production storage.
//!   - One plain UTF-8 file per note: `{id}.txt`
//!   - Metadata cached in `notes_index.json` (see [`crate::index`])
//!   - The directory comes from a [`crate::location::NotesDirectory`] on every call
//!
//! - [`memory::InMemoryNotesStore`]: same semantics without a filesystem, for testing
//!   the command and API layers.
//!
//! ## Storage Layout
//!
//! ```text
//! notes/
//! ├── notes_index.json    # Metadata cache, the only source of listings
//! └── {id}.txt            # Note content
//! ```
//!
//! ## Consistency
//!
//! There is no locking. A save writes the note file first and the index second;
//! a crash in between leaves an orphaned file that listings never see. Listings
//! skip index entries whose file is gone.

use crate::error::Result;
use crate::model::Note;

pub mod fs;
pub mod memory;

pub trait NotesRepository {
    /// All notes, newest first. Entries whose file is missing are skipped.
    fn list(&self) -> Result<Vec<Note>>;

    /// A note by id, or `None` if either the entry or its file is missing.
    fn load(&self, id: &str) -> Result<Option<Note>>;

    /// Creates or overwrites a note. Blank ids get a fresh one; `last_modified`
    /// is always refreshed.
    fn save(&mut self, note: Note) -> Result<Note>;

    /// Removes a note. Unknown ids are a no-op.
    fn delete(&mut self, id: &str) -> Result<()>;

    /// Labels across all notes, deduplicated and sorted.
    fn available_labels(&self) -> Result<Vec<String>>;
}
