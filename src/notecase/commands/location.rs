use crate::commands::{CmdMessage, CmdResult};
use crate::config::PreferenceStore;
use crate::error::Result;
use crate::location::StorageLocator;
use std::path::Path;

/// Reports the directory notes currently live in.
pub fn show<P: PreferenceStore>(locator: &StorageLocator<P>) -> Result<CmdResult> {
    let dir = locator.resolve()?;
    let mut result = CmdResult::default();
    if locator.override_path()?.is_none() {
        result.add_message(CmdMessage::info("Using the default location."));
    }
    Ok(result.with_paths(vec![dir]))
}

/// Sets (or with `None` clears) the notes directory override.
pub fn set<P: PreferenceStore>(locator: &StorageLocator<P>, path: Option<&Path>) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    match (path, locator.set_override(path)?) {
        (None, _) => result.add_message(CmdMessage::success(
            "Notes location reset to the default.",
        )),
        (Some(_), Some(stored)) => result.add_message(CmdMessage::success(format!(
            "Notes location set to {}",
            stored.display()
        ))),
        (Some(requested), None) => result.add_message(CmdMessage::warning(format!(
            "{} is not writable; using the default location.",
            requested.display()
        ))),
    }
    let dir = locator.resolve()?;
    Ok(result.with_paths(vec![dir]))
}
