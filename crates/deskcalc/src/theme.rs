//! Theme preference and its injected persistence capability.
//!
//! The engine knows nothing about themes; frontends own a [`Theme`] and
//! persist it through whatever [`ThemeStore`] they were handed - a JSON
//! file on native builds, `localStorage` in the browser, a plain map in
//! tests. Store failures are reported, never fatal: the calculator
//! falls back to the default theme and keeps working.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The two display themes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Light background, dark text
    Light,
    /// Dark background, light text (the default when nothing is stored)
    #[default]
    Dark,
}

impl Theme {
    /// Key under which the preference is persisted
    pub const STORAGE_KEY: &'static str = "calculatorTheme";

    /// The other theme
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Stable name used in storage slots and CSS-style class names
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parses a stored name; anything unrecognized is `None`
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Failures from a preference store
#[derive(Debug, Error)]
pub enum StoreError {
    /// The underlying file could not be read or written
    #[error("failed to access preference store: {0}")]
    Io(#[from] std::io::Error),
    /// The store content was not valid preference JSON
    #[error("malformed preference store: {0}")]
    Malformed(#[from] serde_json::Error),
    /// The platform storage slot was unavailable
    #[error("preference storage unavailable: {0}")]
    Unavailable(String),
}

/// Injected get/set capability for the persisted theme preference.
///
/// Implementations decide where the value lives; callers only see the
/// preference. A store that has never been written returns `Ok(None)`.
pub trait ThemeStore: fmt::Debug {
    /// Reads the stored preference, if any
    fn load(&self) -> Result<Option<Theme>, StoreError>;
    /// Persists the preference
    fn save(&mut self, theme: Theme) -> Result<(), StoreError>;
}

/// In-memory store for tests and storage-less environments
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    theme: Option<Theme>,
}

impl MemoryStore {
    /// Creates an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-seeded with a preference
    #[must_use]
    pub fn with_theme(theme: Theme) -> Self {
        Self { theme: Some(theme) }
    }
}

impl ThemeStore for MemoryStore {
    fn load(&self) -> Result<Option<Theme>, StoreError> {
        Ok(self.theme)
    }

    fn save(&mut self, theme: Theme) -> Result<(), StoreError> {
        self.theme = Some(theme);
        Ok(())
    }
}

/// On-disk preference file shape
#[derive(Debug, Serialize, Deserialize)]
struct Preferences {
    theme: Theme,
}

/// JSON-file store used by the native frontends.
///
/// A missing file means no preference yet; a malformed one is an error
/// the caller may log and ignore.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Creates a store backed by the given file path
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The backing file path
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ThemeStore for JsonFileStore {
    fn load(&self) -> Result<Option<Theme>, StoreError> {
        if !self.path.exists() {
            return Ok(None);
        }
        let raw = fs::read_to_string(&self.path)?;
        let prefs: Preferences = serde_json::from_str(&raw)?;
        Ok(Some(prefs.theme))
    }

    fn save(&mut self, theme: Theme) -> Result<(), StoreError> {
        let prefs = Preferences { theme };
        let raw = serde_json::to_string_pretty(&prefs)?;
        fs::write(&self.path, raw)?;
        Ok(())
    }
}
