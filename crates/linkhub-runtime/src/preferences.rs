//! Persisted user preferences.
//!
//! The store is injected into the hub rather than reached through global
//! state: it is read once at startup and written on every change.

use crate::Result;
use linkhub_types::ThemeId;
use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};

/// Preference key holding the last selected theme id
pub const THEME_KEY: &str = "link-hub-theme";

pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// Preferences kept in a TOML file of string values
#[derive(Debug)]
pub struct FilePreferences {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl FilePreferences {
    /// Open the store at `path`. A missing or unreadable file starts empty.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let values = match Self::read(&path) {
            Ok(values) => values,
            Err(err) => {
                log::warn!("ignoring preferences at {}: {}", path.display(), err);
                BTreeMap::new()
            }
        };
        Self { path, values }
    }

    pub fn path_in(data_dir: &Path) -> PathBuf {
        data_dir.join("preferences.toml")
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(path: &Path) -> Result<BTreeMap<String, String>> {
        if !path.exists() {
            return Ok(BTreeMap::new());
        }
        let content = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    fn write(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, toml::to_string(&self.values)?)?;
        Ok(())
    }
}

impl PreferenceStore for FilePreferences {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        self.write()
    }
}

/// In-memory store, nothing survives the process
#[derive(Debug, Default, Clone)]
pub struct MemoryPreferences {
    values: HashMap<String, String>,
}

impl MemoryPreferences {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: &str, value: &str) -> Self {
        self.values.insert(key.to_string(), value.to_string());
        self
    }
}

impl PreferenceStore for MemoryPreferences {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Stored theme, or the default theme when absent or unrecognized.
pub fn load_theme(store: &dyn PreferenceStore) -> ThemeId {
    match store.get(THEME_KEY) {
        Some(value) => value.parse().unwrap_or_else(|_| {
            log::warn!("unknown stored theme '{}', using {}", value, ThemeId::default());
            ThemeId::default()
        }),
        None => ThemeId::default(),
    }
}

pub fn save_theme(store: &mut dyn PreferenceStore, theme: ThemeId) -> Result<()> {
    store.set(THEME_KEY, theme.as_str())
}
