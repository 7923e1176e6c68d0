//! Durable key-value storage for the theme preference

use crate::error::{Result, ThemeError};
use rustc_hash::FxHashMap;
use serde_json::{Map, Value};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Storage key for the theme preference
pub const THEME_STORAGE_KEY: &str = "dy-auto-work-theme";

/// Application directory under the user config dir
const APP_DIR: &str = "dy-auto-work";

/// Preference file name
const PREFERENCES_FILE: &str = "preferences.json";

/// String key-value store that survives restarts
pub trait PreferenceStorage: Send + Sync {
    /// Read a value; `Ok(None)` when the key was never written
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Write a value, replacing any previous one
    fn set(&self, key: &str, value: &str) -> Result<()>;
}

#[derive(Default)]
struct MemoryState {
    values: FxHashMap<String, String>,
    writes: usize,
}

/// In-process storage
///
/// Clones share the same map, so a clone handed to a second store behaves
/// like the same storage seen after a restart.
#[derive(Clone, Default)]
pub struct MemoryStorage {
    state: Arc<Mutex<MemoryState>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage pre-seeded with one value
    pub fn with_value(key: &str, value: &str) -> Self {
        let storage = Self::new();
        storage
            .state
            .lock()
            .unwrap()
            .values
            .insert(key.to_string(), value.to_string());
        storage
    }

    /// Number of writes performed through [`PreferenceStorage::set`]
    pub fn write_count(&self) -> usize {
        self.state.lock().unwrap().writes
    }
}

impl PreferenceStorage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.state.lock().unwrap().values.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut state = self.state.lock().unwrap();
        state.values.insert(key.to_string(), value.to_string());
        state.writes += 1;
        Ok(())
    }
}

/// JSON file storage
///
/// The file holds a JSON object. Keys this storage writes hold strings;
/// entries written by anything else are left untouched, whatever their
/// type. A missing or unparseable file reads as empty and the next write
/// replaces it.
pub struct FileStorage {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    /// Storage at [`default_storage_path`]
    pub fn open_default() -> Option<Self> {
        default_storage_path().map(Self::new)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<Map<String, Value>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Map::new()),
            Err(source) => {
                return Err(ThemeError::Storage {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        match serde_json::from_str(&content) {
            Ok(values) => Ok(values),
            Err(err) => {
                tracing::warn!(
                    "Ignoring unreadable preference file {}: {}",
                    self.path.display(),
                    err
                );
                Ok(Map::new())
            }
        }
    }

    fn store(&self, values: &Map<String, Value>) -> Result<()> {
        let io_err = |source| ThemeError::Storage {
            path: self.path.clone(),
            source,
        };

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(io_err)?;
            }
        }

        let encoded = serde_json::to_string_pretty(values)?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, encoded).map_err(io_err)?;
        fs::rename(&tmp, &self.path).map_err(io_err)
    }
}

impl PreferenceStorage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        match self.load()?.remove(key) {
            Some(Value::String(value)) => Ok(Some(value)),
            Some(other) => {
                tracing::debug!(key, "Ignoring non-string preference value: {}", other);
                Ok(None)
            }
            None => Ok(None),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let _guard = self.write_lock.lock().unwrap();
        let mut values = self.load()?;
        values.insert(key.to_string(), Value::String(value.to_string()));
        self.store(&values)
    }
}

/// Default preference file: `<config dir>/dy-auto-work/preferences.json`
pub fn default_storage_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join(PREFERENCES_FILE))
}
