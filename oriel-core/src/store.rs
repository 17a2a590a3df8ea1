//! Session persistence contract.
//!
//! One record, whole-record replacement on every write. The record
//! exists exactly while the window is visible: saving and clearing it
//! is how visibility survives a reload. Transient state (the loading
//! flag, an active gesture) is never stored.
//!
//! Any synchronous key-value backend satisfies [`SessionStore`]; the
//! file-backed implementation lives in `oriel-config`, and
//! [`MemorySessionStore`] serves tests and embedders that opt out of
//! persistence.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::geometry::{PointPx, SizePx};
use crate::state::{TargetId, WindowState};

/// Geometry and layout flags worth keeping across process lifetimes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersistedWindow {
    pub position: PointPx,
    pub size: SizePx,
    pub saved_position: PointPx,
    pub saved_size: SizePx,
    pub maximized: bool,
    pub minimized: bool,
}

/// The single stored record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionRecord {
    pub target_id: TargetId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_label: Option<String>,
    pub window: PersistedWindow,
    /// ISO 8601 timestamp of the last write.
    #[serde(default)]
    pub saved_at: String,
}

impl SessionRecord {
    /// Capture a record from live state. Returns `None` while there is
    /// nothing to persist (no target yet).
    pub fn capture(state: &WindowState) -> Option<Self> {
        let target_id = state.target_id.clone()?;
        Some(Self {
            target_id,
            target_label: state.target_label.clone(),
            window: PersistedWindow {
                position: state.position,
                size: state.size,
                saved_position: state.saved_position,
                saved_size: state.saved_size,
                maximized: state.maximized,
                minimized: state.minimized,
            },
            saved_at: chrono::Utc::now().to_rfc3339(),
        })
    }

    /// Rebuild live state from a stored record. The window re-opens
    /// exactly as it was left.
    pub fn into_state(self) -> WindowState {
        WindowState {
            target_id: Some(self.target_id),
            target_label: self.target_label,
            visible: true,
            maximized: self.window.maximized,
            minimized: self.window.minimized,
            position: self.window.position,
            size: self.window.size,
            saved_position: self.window.saved_position,
            saved_size: self.window.saved_size,
        }
    }
}

/// Errors a store backend can report.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("session store I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The stored record could not be decoded. The manager recovers by
    /// clearing the record and starting from defaults.
    #[error("session record corrupt: {0}")]
    Corrupt(String),
}

/// Synchronous key-value persistence for the one session record.
pub trait SessionStore {
    fn load(&mut self) -> Result<Option<SessionRecord>, StoreError>;
    fn save(&mut self, record: &SessionRecord) -> Result<(), StoreError>;
    fn clear(&mut self) -> Result<(), StoreError>;
}

/// In-memory store: survives nothing, fails never.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    record: Option<SessionRecord>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&self) -> Option<&SessionRecord> {
        self.record.as_ref()
    }
}

impl SessionStore for MemorySessionStore {
    fn load(&mut self) -> Result<Option<SessionRecord>, StoreError> {
        Ok(self.record.clone())
    }

    fn save(&mut self, record: &SessionRecord) -> Result<(), StoreError> {
        self.record = Some(record.clone());
        Ok(())
    }

    fn clear(&mut self) -> Result<(), StoreError> {
        self.record = None;
        Ok(())
    }
}
