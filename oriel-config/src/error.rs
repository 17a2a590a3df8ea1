//! Typed error variants for the oriel-config crate.

use std::fmt;

/// Errors that can occur when loading or saving the settings file.
///
/// Produced by `Settings::load` and `Settings::save`. Callers that only
/// want the recovery behavior can use `Settings::load_or_default`,
/// which logs and falls back instead of propagating.
#[derive(Debug)]
pub enum SettingsError {
    /// An I/O error occurred reading or writing the settings file.
    Io(std::io::Error),

    /// The settings file contained YAML that could not be parsed.
    Parse(serde_yaml_ng::Error),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::Io(e) => write!(f, "I/O error reading settings: {e}"),
            SettingsError::Parse(e) => write!(f, "YAML parse error in settings: {e}"),
        }
    }
}

impl std::error::Error for SettingsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SettingsError::Io(e) => Some(e),
            SettingsError::Parse(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for SettingsError {
    fn from(e: std::io::Error) -> Self {
        SettingsError::Io(e)
    }
}

impl From<serde_yaml_ng::Error> for SettingsError {
    fn from(e: serde_yaml_ng::Error) -> Self {
        SettingsError::Parse(e)
    }
}
