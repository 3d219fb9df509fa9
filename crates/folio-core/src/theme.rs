//! Light/dark theme preference.
//!
//! The document attribute is the source of truth for the active theme; the
//! persisted value only seeds it at startup. An unset attribute means the
//! stylesheet default and is treated as "not dark" when toggling.

use std::collections::HashMap;
use std::fmt;

/// Storage key of the persisted preference.
pub const THEME_STORAGE_KEY: &str = "theme";
/// Document attribute carrying the active theme.
pub const THEME_ATTRIBUTE: &str = "data-theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

impl Theme {
    /// Parse an exact `"dark"` / `"light"` value.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "dark" => Some(Self::Dark),
            "light" => Some(Self::Light),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    /// Theme after a toggle click given the current attribute value.
    #[must_use]
    pub fn toggled_from(current: Option<&str>) -> Self {
        match current.and_then(Self::parse) {
            Some(Self::Dark) => Self::Light,
            _ => Self::Dark,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors from preference storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    /// No storage is available (disabled, private mode, sandboxed frame).
    Unavailable(String),
    /// The write was rejected (quota, security).
    Write(String),
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unavailable(msg) => write!(f, "storage unavailable: {msg}"),
            Self::Write(msg) => write!(f, "storage write failed: {msg}"),
        }
    }
}

impl std::error::Error for StorageError {}

/// Key-value preference storage.
pub trait PreferenceStore {
    /// Human-readable name for logging.
    fn name(&self) -> &str;

    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// In-memory preference storage for tests and storage-less hosts.
#[derive(Debug, Default, Clone)]
pub struct MemoryPreferences {
    entries: HashMap<String, String>,
}

impl MemoryPreferences {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate one entry.
    #[must_use]
    pub fn with_entry(mut self, key: &str, value: &str) -> Self {
        self.entries.insert(key.to_string(), value.to_string());
        self
    }
}

impl PreferenceStore for MemoryPreferences {
    fn name(&self) -> &str {
        "MemoryPreferences"
    }

    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Reads and persists the theme preference.
#[derive(Debug, Clone)]
pub struct ThemeController<S> {
    store: S,
    key: String,
}

impl<S: PreferenceStore> ThemeController<S> {
    #[must_use]
    pub fn new(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Theme to apply at startup, if the persisted value is valid.
    ///
    /// Storage errors and unknown values both yield `None` (keep default).
    #[must_use]
    pub fn initial(&self) -> Option<Theme> {
        match self.store.get(&self.key) {
            Ok(saved) => saved.as_deref().and_then(Theme::parse),
            Err(err) => {
                tracing::warn!(store = self.store.name(), error = %err, "theme preference unreadable");
                None
            }
        }
    }

    /// Flip the theme given the current attribute and persist the result.
    ///
    /// The returned theme must be applied even if persisting failed.
    pub fn toggle(&mut self, current: Option<&str>) -> Theme {
        let next = Theme::toggled_from(current);
        if let Err(err) = self.store.set(&self.key, next.as_str()) {
            tracing::warn!(store = self.store.name(), error = %err, "theme preference not saved");
        }
        tracing::info!(theme = %next, "theme toggled");
        next
    }
}
