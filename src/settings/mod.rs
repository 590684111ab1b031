//! Persisted user settings.
//!
//! A synchronous boolean key-value store. Reads return the last written
//! value or the key's default; writes go straight to disk when the store is
//! file-backed and notify subscribers when a value actually changes.
//!
//! On disk the store is a flat JSON object:
//!
//! ```json
//! { "haptics_enabled": false }
//! ```

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::core::DeckError;

/// Key of the haptic feedback flag.
pub const HAPTICS_ENABLED_KEY: &str = "haptics_enabled";

/// Typed view over the store.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    pub haptics_enabled: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            haptics_enabled: true,
        }
    }
}

type SettingsListener = Box<dyn FnMut(&Settings)>;

/// Boolean preference store with change notification.
pub struct SettingsStore {
    path: Option<PathBuf>,
    values: FxHashMap<String, bool>,
    listeners: Vec<SettingsListener>,
}

impl std::fmt::Debug for SettingsStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SettingsStore")
            .field("path", &self.path)
            .field("values", &self.values)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl SettingsStore {
    /// A store that lives only as long as the process.
    pub fn in_memory() -> Self {
        Self {
            path: None,
            values: FxHashMap::default(),
            listeners: Vec::new(),
        }
    }

    /// Open a file-backed store. A missing file means all defaults.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, DeckError> {
        let path = path.as_ref().to_path_buf();
        let values = match fs::read_to_string(&path) {
            Ok(text) => serde_json::from_str(&text).map_err(|source| DeckError::MalformedSettings {
                path: path.clone(),
                source,
            })?,
            Err(err) if err.kind() == ErrorKind::NotFound => FxHashMap::default(),
            Err(source) => return Err(DeckError::SettingsUnreadable { path, source }),
        };
        log::debug!("opened settings {:?}", path);
        Ok(Self {
            path: Some(path),
            values,
            listeners: Vec::new(),
        })
    }

    /// Stored value for `key`, if it was ever written.
    #[must_use]
    pub fn get_bool(&self, key: &str) -> Option<bool> {
        self.values.get(key).copied()
    }

    /// Write `value` under `key`.
    ///
    /// Persists before notifying. Writing the value already stored does
    /// nothing.
    pub fn set_bool(&mut self, key: &str, value: bool) -> Result<(), DeckError> {
        if self.get_bool(key) == Some(value) {
            return Ok(());
        }
        let previous = self.values.insert(key.to_string(), value);
        if let Err(err) = self.persist() {
            match previous {
                Some(old) => self.values.insert(key.to_string(), old),
                None => self.values.remove(key),
            };
            return Err(err);
        }

        let settings = self.settings();
        for listener in &mut self.listeners {
            listener(&settings);
        }
        Ok(())
    }

    /// Current settings, with defaults for unset keys.
    #[must_use]
    pub fn settings(&self) -> Settings {
        let defaults = Settings::default();
        Settings {
            haptics_enabled: self
                .get_bool(HAPTICS_ENABLED_KEY)
                .unwrap_or(defaults.haptics_enabled),
        }
    }

    pub fn haptics_enabled(&self) -> bool {
        self.settings().haptics_enabled
    }

    pub fn set_haptics_enabled(&mut self, enabled: bool) -> Result<(), DeckError> {
        self.set_bool(HAPTICS_ENABLED_KEY, enabled)
    }

    /// Call `listener` with the new settings after each change.
    pub fn subscribe(&mut self, listener: impl FnMut(&Settings) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    fn persist(&self) -> Result<(), DeckError> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        let text = serde_json::to_string_pretty(&self.values).map_err(|source| {
            DeckError::MalformedSettings {
                path: path.clone(),
                source,
            }
        })?;
        fs::write(path, text).map_err(|source| DeckError::SettingsWrite {
            path: path.clone(),
            source,
        })
    }
}
