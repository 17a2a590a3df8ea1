//! Default values for the settings file, referenced from
//! `#[serde(default = "...")]` attributes so partially-written files
//! deserialize cleanly.

use oriel_core::{PointPx, SizePx};

// ── Primitive helpers ──────────────────────────────────────────────────────

pub fn bool_true() -> bool {
    true
}

// ── Window geometry ────────────────────────────────────────────────────────

pub fn default_position() -> PointPx {
    PointPx::new(96.0, 72.0)
}

pub fn default_size() -> SizePx {
    SizePx::new(720.0, 480.0)
}

// ── Content addressing ─────────────────────────────────────────────────────

pub fn content_route() -> String {
    "view".to_string()
}

// ── Frame layout ───────────────────────────────────────────────────────────

pub fn title_bar_height() -> f32 {
    32.0
}

pub fn resize_handle_thickness() -> f32 {
    6.0
}

pub fn overlay_fade_secs() -> f32 {
    0.25
}
