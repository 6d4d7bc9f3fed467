//! # Settings
//!
//! Persisted user preferences live in a flat JSON map, `settings.json`, inside the
//! platform config directory (or `NOTECASE_CONFIG_DIR`). Components never reach for
//! it globally: they receive a [`PreferenceStore`] explicitly.
//!
//! | Key | Description |
//! |-----|-------------|
//! | `notes_dir` | Absolute path overriding the default notes directory |

use crate::error::{NotecaseError, Result};
use crate::index::write_atomic;
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

const SETTINGS_FILENAME: &str = "settings.json";

/// Key holding the notes directory override.
pub const NOTES_DIR_KEY: &str = "notes_dir";

/// String key-value preferences.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
    fn remove(&self, key: &str) -> Result<()>;
}

impl<P: PreferenceStore + ?Sized> PreferenceStore for &P {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<()> {
        (**self).remove(key)
    }
}

/// File-backed preferences. Every call reads (and on change rewrites) the file.
#[derive(Debug, Clone)]
pub struct Settings {
    config_dir: PathBuf,
}

impl Settings {
    pub fn new<P: AsRef<Path>>(config_dir: P) -> Self {
        Self {
            config_dir: config_dir.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> PathBuf {
        self.config_dir.join(SETTINGS_FILENAME)
    }

    fn load(&self) -> Result<BTreeMap<String, String>> {
        let path = self.path();
        if !path.exists() {
            return Ok(BTreeMap::new());
        }
        let content = fs::read_to_string(&path).map_err(NotecaseError::Io)?;
        serde_json::from_str(&content).map_err(NotecaseError::Serialization)
    }

    fn save(&self, values: &BTreeMap<String, String>) -> Result<()> {
        if !self.config_dir.exists() {
            fs::create_dir_all(&self.config_dir).map_err(NotecaseError::Io)?;
        }
        let content = serde_json::to_string_pretty(values).map_err(NotecaseError::Serialization)?;
        write_atomic(&self.config_dir, &self.path(), content.as_bytes())
    }
}

impl PreferenceStore for Settings {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.load()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut values = self.load()?;
        values.insert(key.to_string(), value.to_string());
        self.save(&values)
    }

    fn remove(&self, key: &str) -> Result<()> {
        let mut values = self.load()?;
        if values.remove(key).is_some() {
            self.save(&values)?;
        }
        Ok(())
    }
}

/// In-process preferences for tests and embedding.
#[derive(Debug, Default)]
pub struct MemoryPreferences {
    values: Mutex<HashMap<String, String>>,
}

impl MemoryPreferences {
    pub fn new() -> Self {
        Self::default()
    }

    fn values(&self) -> std::sync::MutexGuard<'_, HashMap<String, String>> {
        // A poisoned map is still a valid map.
        self.values.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl PreferenceStore for MemoryPreferences {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.values().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.values().remove(key);
        Ok(())
    }
}
