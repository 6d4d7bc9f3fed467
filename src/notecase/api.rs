//! # API Facade
//!
//! A thin facade over the command layer and the single entry point for every
//! notecase operation, whatever the UI.
//!
//! The facade dispatches to `commands::*`, builds the backup pipeline against the
//! current notes location, and returns `Result<CmdResult>`. It never prints and
//! holds no business logic of its own.
//!
//! `NotecaseApi<S, P>` is generic over the note store and the preference store:
//! - Production: `NotecaseApi<FileNotesStore<StorageLocator<Settings>>, Settings>`
//! - Testing: any [`NotesRepository`] with [`crate::config::MemoryPreferences`]

use crate::backup::{BackupPipeline, UploadSink};
use crate::commands;
use crate::config::PreferenceStore;
use crate::error::Result;
use crate::location::StorageLocator;
use crate::store::fs::FileNotesStore;
use crate::store::NotesRepository;
use std::path::Path;

pub struct NotecaseApi<S: NotesRepository, P: PreferenceStore> {
    store: S,
    locator: StorageLocator<P>,
}

impl<P: PreferenceStore + Clone> NotecaseApi<FileNotesStore<StorageLocator<P>>, P> {
    /// File-backed API where the store and backups share one locator.
    pub fn open(locator: StorageLocator<P>) -> Self {
        Self::new(FileNotesStore::new(locator.clone()), locator)
    }
}

impl<S: NotesRepository, P: PreferenceStore> NotecaseApi<S, P> {
    pub fn new(store: S, locator: StorageLocator<P>) -> Self {
        Self { store, locator }
    }

    pub fn list_notes(&self, label: Option<&str>) -> Result<commands::CmdResult> {
        commands::list::run(&self.store, label)
    }

    pub fn view_note(&self, id: &str) -> Result<commands::CmdResult> {
        commands::view::run(&self.store, id)
    }

    pub fn create_note(
        &mut self,
        title: String,
        content: String,
        labels: Vec<String>,
    ) -> Result<commands::CmdResult> {
        commands::create::run(&mut self.store, title, content, labels)
    }

    pub fn update_note(
        &mut self,
        id: &str,
        update: commands::NoteUpdate,
    ) -> Result<commands::CmdResult> {
        commands::update::run(&mut self.store, id, update)
    }

    pub fn delete_note(&mut self, id: &str) -> Result<commands::CmdResult> {
        commands::delete::run(&mut self.store, id)
    }

    pub fn labels(&self) -> Result<commands::CmdResult> {
        commands::labels::run(&self.store)
    }

    pub fn export_plain(&self, output_dir: &Path) -> Result<commands::CmdResult> {
        commands::export::plain(&self.pipeline(), output_dir)
    }

    pub fn export_encrypted<U: UploadSink + ?Sized>(
        &self,
        password: &str,
        output_dir: &Path,
        sink: &mut U,
    ) -> Result<commands::CmdResult> {
        commands::export::encrypted(&self.pipeline(), password, output_dir, sink)
    }

    /// Restores a backup file, then reloads the listing from the new index.
    pub fn import_backup(
        &self,
        source: &Path,
        password: Option<&str>,
    ) -> Result<commands::CmdResult> {
        let mut result = commands::import::run(&self.pipeline(), source, password)?;
        result.listed_notes = self.store.list()?;
        Ok(result)
    }

    pub fn notes_location(&self) -> Result<commands::CmdResult> {
        commands::location::show(&self.locator)
    }

    pub fn set_notes_location(&self, path: Option<&Path>) -> Result<commands::CmdResult> {
        commands::location::set(&self.locator, path)
    }

    fn pipeline(&self) -> BackupPipeline<&StorageLocator<P>> {
        BackupPipeline::new(&self.locator)
    }
}

pub use crate::commands::{CmdMessage, CmdResult, MessageLevel, NoteUpdate};
