// this_file: crates/glyphcode-gen/src/settings.rs

//! Persisted generation preferences.
//!
//! The core never reads or writes storage; it only receives value
//! snapshots. This store loads a snapshot at construction time and saves
//! one on change, as a plain JSON document.

use glyphcode_core::{Format, SourceCodeOptions, DEFAULT_ARRAY_NAME};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors from saving settings. Loading never fails; it degrades to
/// defaults.
#[derive(Error, Debug)]
pub enum SettingsError {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Snapshot of everything the generation pipeline needs to reproduce its
/// output across sessions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub options: SourceCodeOptions,
    pub format: Format,
    pub array_name: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            options: SourceCodeOptions::default(),
            format: Format::default(),
            array_name: DEFAULT_ARRAY_NAME.to_string(),
        }
    }
}

impl Settings {
    /// Clamp values that may be out of range in a hand-edited file.
    pub fn normalized(mut self) -> Self {
        self.options.indentation = self.options.indentation.normalized();
        if self.array_name.is_empty() {
            self.array_name = DEFAULT_ARRAY_NAME.to_string();
        }
        self
    }
}

/// JSON-backed settings store.
pub struct SettingsStore {
    path: PathBuf,
}

impl SettingsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load settings, falling back to defaults when the file is missing or
    /// unreadable.
    pub fn load(&self) -> Settings {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) => {
                log::debug!(
                    target: "glyphcode::settings",
                    "no settings at {}: {}",
                    self.path.display(),
                    e
                );
                return Settings::default();
            }
        };
        match serde_json::from_str::<Settings>(&text) {
            Ok(settings) => settings.normalized(),
            Err(e) => {
                log::warn!(
                    target: "glyphcode::settings",
                    "ignoring malformed settings at {}: {}",
                    self.path.display(),
                    e
                );
                Settings::default()
            }
        }
    }

    /// Persist settings as pretty-printed JSON.
    pub fn save(&self, settings: &Settings) -> Result<(), SettingsError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let json = serde_json::to_string_pretty(settings)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}
