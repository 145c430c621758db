//! Persisted preference store
//!
//! Small string key-value store scoped to the user, surviving across page
//! loads. The behaviors depend only on the `PreferenceStore` trait; the
//! file-backed implementation keeps a flat JSON object on disk and writes
//! it through atomically on every `set`, so a preference written by one
//! session is visible to the next.

use anyhow::{Context, Result};
use std::collections::HashMap;
use std::path::PathBuf;
use tracing::{debug, info, instrument};

/// String key-value preference access.
pub trait PreferenceStore {
    /// Read a preference, `None` when it has never been written.
    fn get(&self, key: &str) -> Option<String>;

    /// Write a preference. Implementations persist before returning.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// JSON file-backed preference store.
#[derive(Debug, Clone)]
pub struct FilePreferenceStore {
    entries: HashMap<String, String>,
    file_path: PathBuf,
}

impl FilePreferenceStore {
    /// Create a store at the default path (~/.notespage/preferences.json).
    pub fn new() -> Self {
        Self::with_path(Self::default_path())
    }

    /// Create a store with a custom path (for testing)
    pub fn with_path(path: PathBuf) -> Self {
        FilePreferenceStore {
            entries: HashMap::new(),
            file_path: path,
        }
    }

    /// Get the default preferences file path
    pub fn default_path() -> PathBuf {
        PathBuf::from(shellexpand::tilde("~/.notespage/preferences.json").as_ref())
    }

    /// Load preferences from disk.
    ///
    /// Starts empty if the file doesn't exist.
    #[instrument(name = "prefs_load", skip(self))]
    pub fn load(&mut self) -> Result<()> {
        if !self.file_path.exists() {
            info!(path = %self.file_path.display(), "Preferences file not found, starting fresh");
            return Ok(());
        }

        let content = std::fs::read_to_string(&self.file_path).with_context(|| {
            format!(
                "Failed to read preferences file: {}",
                self.file_path.display()
            )
        })?;

        self.entries =
            serde_json::from_str(&content).context("Failed to parse preferences JSON")?;

        info!(
            path = %self.file_path.display(),
            entry_count = self.entries.len(),
            "Loaded preferences"
        );
        Ok(())
    }

    /// Save preferences to disk using atomic write (write temp + rename).
    #[instrument(name = "prefs_save", skip(self))]
    fn save(&self) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = self.file_path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        let json =
            serde_json::to_string(&self.entries).context("Failed to serialize preferences")?;

        let temp_path = self.file_path.with_extension("json.tmp");
        std::fs::write(&temp_path, &json).with_context(|| {
            format!(
                "Failed to write temp preferences file: {}",
                temp_path.display()
            )
        })?;

        // Atomic rename (on Unix, this is atomic; on Windows, it's best-effort)
        std::fs::rename(&temp_path, &self.file_path).with_context(|| {
            format!("Failed to rename temp file to {}", self.file_path.display())
        })?;

        debug!(
            path = %self.file_path.display(),
            entry_count = self.entries.len(),
            "Saved preferences (atomic)"
        );
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for FilePreferenceStore {
    fn default() -> Self {
        Self::new()
    }
}

impl PreferenceStore for FilePreferenceStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let previous = self
            .entries
            .insert(key.to_string(), value.to_string());
        if previous.as_deref() == Some(value) {
            debug!(key, value, "Preference unchanged, skipping save");
            return Ok(());
        }
        self.save()
    }
}

/// HashMap-backed store for tests and ephemeral runs.
#[derive(Debug, Clone, Default)]
pub struct MemoryPreferenceStore {
    entries: HashMap<String, String>,
}

impl MemoryPreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
