//! The YAML settings file.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use oriel_core::{PointPx, SizePx};

use crate::defaults;
use crate::error::SettingsError;

/// User-tunable settings for the viewer window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Top-left corner used the first time the window opens.
    #[serde(default = "defaults::default_position")]
    pub default_position: PointPx,

    /// Size used the first time the window opens.
    #[serde(default = "defaults::default_size")]
    pub default_size: SizePx,

    /// Path segment of the content address: `/<content_route>/<id>`.
    #[serde(default = "defaults::content_route")]
    pub content_route: String,

    /// Persist geometry and visibility across runs. When off, the
    /// session store is the in-memory backend and nothing touches disk.
    #[serde(default = "defaults::bool_true")]
    pub remember_layout: bool,

    /// Seconds the loading overlay takes to fade out once the embedded
    /// content reports completion.
    #[serde(default = "defaults::overlay_fade_secs")]
    pub overlay_fade_secs: f32,

    /// Height of the title bar (also the minimized strip height driver
    /// in the frame layer).
    #[serde(default = "defaults::title_bar_height")]
    pub title_bar_height: f32,

    /// Thickness of the invisible resize handle strips around the
    /// window edge.
    #[serde(default = "defaults::resize_handle_thickness")]
    pub resize_handle_thickness: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_position: defaults::default_position(),
            default_size: defaults::default_size(),
            content_route: defaults::content_route(),
            remember_layout: defaults::bool_true(),
            overlay_fade_secs: defaults::overlay_fade_secs(),
            title_bar_height: defaults::title_bar_height(),
            resize_handle_thickness: defaults::resize_handle_thickness(),
        }
    }
}

impl Settings {
    /// Load settings from the conventional path, creating a default
    /// file on first run.
    pub fn load() -> Result<Self, SettingsError> {
        Self::load_from(Self::settings_path())
    }

    /// Load settings from an explicit path (tests, embedders).
    pub fn load_from(path: PathBuf) -> Result<Self, SettingsError> {
        if path.exists() {
            log::info!("loading settings from {path:?}");
            let contents = fs::read_to_string(&path)?;
            Ok(serde_yaml_ng::from_str(&contents)?)
        } else {
            log::info!("settings file not found, creating default at {path:?}");
            let settings = Self::default();
            settings.save_to(&path)?;
            Ok(settings)
        }
    }

    /// Load settings, falling back to defaults on any failure. The
    /// broken file is left in place for the user to inspect.
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_else(|e| {
            log::warn!("falling back to default settings: {e}");
            Self::default()
        })
    }

    /// Save settings to the conventional path.
    pub fn save(&self) -> Result<(), SettingsError> {
        self.save_to(&Self::settings_path())
    }

    fn save_to(&self, path: &Path) -> Result<(), SettingsError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let yaml = serde_yaml_ng::to_string(self)?;
        fs::write(path, yaml)?;
        Ok(())
    }

    /// Get the settings file path (XDG convention).
    pub fn settings_path() -> PathBuf {
        #[cfg(target_os = "windows")]
        {
            if let Some(config_dir) = dirs::config_dir() {
                config_dir.join("oriel").join("config.yaml")
            } else {
                PathBuf::from("config.yaml")
            }
        }
        #[cfg(not(target_os = "windows"))]
        {
            if let Some(home_dir) = dirs::home_dir() {
                home_dir.join(".config").join("oriel").join("config.yaml")
            } else {
                PathBuf::from("config.yaml")
            }
        }
    }
}
