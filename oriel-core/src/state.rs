//! The single mutable window record and its layout rules.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::geometry::{PointPx, RectPx, SizePx};

/// Smallest width a resize gesture may commit.
pub const MIN_WIDTH: f32 = 300.0;
/// Smallest height a resize gesture may commit.
pub const MIN_HEIGHT: f32 = 200.0;

/// Fixed box used while minimized: a title-bar-only strip. The stored
/// size is untouched so un-minimizing restores the prior geometry.
pub const MINIMIZED_STRIP: SizePx = SizePx {
    width: 300.0,
    height: 48.0,
};

/// Geometry used before any settings or persisted record apply.
pub const DEFAULT_POSITION: PointPx = PointPx { x: 96.0, y: 72.0 };
pub const DEFAULT_SIZE: SizePx = SizePx {
    width: 720.0,
    height: 480.0,
};

/// Identifier of the hosted content, supplied by the caller of
/// [`open`](crate::manager::WindowManager::open). Opaque to the manager
/// beyond its use in the content path.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TargetId(String);

impl TargetId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TargetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TargetId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for TargetId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// The one mutable entity of the window manager.
///
/// `position` and `size` are the committed, non-maximized geometry;
/// while maximized the rendered box is forced to the viewport and the
/// pre-maximize values are parked in `saved_position`/`saved_size`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowState {
    /// Which hosted content is active; `None` means no window exists.
    pub target_id: Option<TargetId>,
    /// Display label for the title bar.
    pub target_label: Option<String>,
    /// Window exists and is rendered (minimized or not).
    pub visible: bool,
    /// Occupies the full viewport.
    pub maximized: bool,
    /// Collapsed to the title-bar strip; content is not rendered.
    pub minimized: bool,
    /// Top-left corner in viewport pixels.
    pub position: PointPx,
    /// Rendered box in pixels while not maximized.
    pub size: SizePx,
    /// Pre-maximize position, restored on un-maximize.
    pub saved_position: PointPx,
    /// Pre-maximize size, restored on un-maximize.
    pub saved_size: SizePx,
}

impl Default for WindowState {
    fn default() -> Self {
        Self {
            target_id: None,
            target_label: None,
            visible: false,
            maximized: false,
            minimized: false,
            position: DEFAULT_POSITION,
            size: DEFAULT_SIZE,
            saved_position: DEFAULT_POSITION,
            saved_size: DEFAULT_SIZE,
        }
    }
}

impl WindowState {
    /// Title-bar text: the label when given, else the raw target id.
    pub fn title(&self) -> &str {
        match (&self.target_label, &self.target_id) {
            (Some(label), _) => label,
            (None, Some(id)) => id.as_str(),
            (None, None) => "",
        }
    }

    /// The box the frame actually draws, after the minimized/maximized
    /// layout rules. The minimized strip wins over maximize; maximize
    /// pins the box to the viewport origin.
    pub fn rendered_bounds(&self, viewport: SizePx) -> RectPx {
        if self.minimized {
            let anchor = if self.maximized {
                PointPx::ORIGIN
            } else {
                self.position
            };
            RectPx::from_parts(anchor, MINIMIZED_STRIP)
        } else if self.maximized {
            RectPx::from_parts(PointPx::ORIGIN, viewport)
        } else {
            RectPx::from_parts(self.position, self.size)
        }
    }

    /// Committed bounds ignoring the minimized/maximized overrides.
    pub fn stored_bounds(&self) -> RectPx {
        RectPx::from_parts(self.position, self.size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_state_is_hidden() {
        let state = WindowState::default();
        assert!(!state.visible);
        assert!(!state.maximized);
        assert!(!state.minimized);
        assert_eq!(state.size, DEFAULT_SIZE);
    }

    #[test]
    fn test_rendered_bounds_minimized_wins_over_maximized() {
        let viewport = SizePx::new(1280.0, 800.0);
        let mut state = WindowState {
            visible: true,
            maximized: true,
            minimized: true,
            ..WindowState::default()
        };
        let bounds = state.rendered_bounds(viewport);
        assert_eq!(bounds.size(), MINIMIZED_STRIP);
        assert_eq!(bounds.position(), PointPx::ORIGIN);

        state.minimized = false;
        let bounds = state.rendered_bounds(viewport);
        assert_eq!(bounds.size(), viewport);
    }

    #[test]
    fn test_rendered_bounds_minimized_keeps_position() {
        let state = WindowState {
            visible: true,
            minimized: true,
            position: PointPx::new(40.0, 60.0),
            ..WindowState::default()
        };
        let bounds = state.rendered_bounds(SizePx::new(1280.0, 800.0));
        assert_eq!(bounds.position(), PointPx::new(40.0, 60.0));
        assert_eq!(bounds.size(), MINIMIZED_STRIP);
    }

    #[test]
    fn test_title_falls_back_to_target_id() {
        let mut state = WindowState {
            target_id: Some(TargetId::from("proj-42")),
            ..WindowState::default()
        };
        assert_eq!(state.title(), "proj-42");
        state.target_label = Some("Dossier 42".to_string());
        assert_eq!(state.title(), "Dossier 42");
    }
}
