//! File-backed session store.
//!
//! One JSON file, replaced wholesale on every write and removed when
//! the window closes. Sitting beside the settings file, it is the
//! process-lifetime analogue of a browser session store: reloads keep
//! the window exactly as it was left.

use std::fs;
use std::path::PathBuf;

use oriel_core::{SessionRecord, SessionStore, StoreError};

/// [`SessionStore`] backend writing a single JSON record to disk.
#[derive(Debug, Clone)]
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    /// Store at the conventional path, beside the settings file.
    pub fn new() -> Self {
        Self {
            path: Self::state_path(),
        }
    }

    /// Store at an explicit path (tests, embedders).
    pub fn at(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    /// Get the session record path (XDG convention).
    pub fn state_path() -> PathBuf {
        #[cfg(target_os = "windows")]
        {
            if let Some(config_dir) = dirs::config_dir() {
                config_dir.join("oriel").join("session.json")
            } else {
                PathBuf::from("session.json")
            }
        }
        #[cfg(not(target_os = "windows"))]
        {
            if let Some(home_dir) = dirs::home_dir() {
                home_dir.join(".config").join("oriel").join("session.json")
            } else {
                PathBuf::from("session.json")
            }
        }
    }
}

impl Default for FileSessionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionStore for FileSessionStore {
    fn load(&mut self) -> Result<Option<SessionRecord>, StoreError> {
        if !self.path.exists() {
            return Ok(None);
        }
        let contents = fs::read_to_string(&self.path)?;
        match serde_json::from_str(&contents) {
            Ok(record) => Ok(Some(record)),
            Err(e) => Err(StoreError::Corrupt(e.to_string())),
        }
    }

    fn save(&mut self, record: &SessionRecord) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(record)
            .map_err(|e| StoreError::Corrupt(e.to_string()))?;
        fs::write(&self.path, json)?;
        Ok(())
    }

    fn clear(&mut self) -> Result<(), StoreError> {
        if self.path.exists() {
            log::debug!("removing session record at {:?}", self.path);
            fs::remove_file(&self.path)?;
        }
        Ok(())
    }
}
