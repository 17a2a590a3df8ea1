//! Configuration and on-disk persistence for the oriel floating viewer.
//!
//! This crate provides:
//!
//! - [`Settings`]: the YAML settings file (default geometry, content
//!   route, frame layout knobs) with load-or-create-default behavior
//! - [`FileSessionStore`]: the file-backed implementation of the core
//!   session-store contract, one JSON record replaced wholesale on
//!   every write

pub mod defaults;
mod error;
pub mod session_store;
pub mod settings;

pub use error::SettingsError;
pub use session_store::FileSessionStore;
pub use settings::Settings;
