//! The embedded-content boundary.
//!
//! The hosted document is opaque to the window manager: it receives a
//! content path and a rect to draw in, and the only thing it ever
//! sends back is "finished loading", which drives the overlay and
//! nothing else.

use std::sync::Arc;

use parking_lot::Mutex;

/// One-shot-per-load completion flag.
///
/// Surfaces may fire this from whatever thread their loading machinery
/// runs on; the shell drains it on the UI thread once per frame. It
/// never carries data across the boundary.
#[derive(Clone, Default)]
pub struct LoadSignal {
    fired: Arc<Mutex<bool>>,
}

impl LoadSignal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Report that the embedded content finished loading.
    pub fn notify(&self) {
        *self.fired.lock() = true;
    }

    /// Consume a pending completion, if any.
    pub fn take(&self) -> bool {
        std::mem::take(&mut *self.fired.lock())
    }
}

/// A hosted document surface.
///
/// Implementations render whatever lives at `content_path` into the
/// `ui` rect (a webview texture, a native document view, a remote
/// frame). The window manager never looks inside.
pub trait EmbeddedSurface {
    /// Draw the document for `content_path`. Fire `load` once when the
    /// document for this path has finished loading; a document that
    /// never fires simply keeps the loading overlay up.
    fn ui(&mut self, ui: &mut egui::Ui, content_path: &str, load: &LoadSignal);
}

/// Stand-in surface for demos and tests: paints the content path and
/// reports each new path as loaded on its first frame.
#[derive(Debug, Default)]
pub struct PlaceholderSurface {
    current: Option<String>,
}

impl PlaceholderSurface {
    pub fn new() -> Self {
        Self::default()
    }
}

impl EmbeddedSurface for PlaceholderSurface {
    fn ui(&mut self, ui: &mut egui::Ui, content_path: &str, load: &LoadSignal) {
        if self.current.as_deref() != Some(content_path) {
            self.current = Some(content_path.to_string());
            load.notify();
        }

        let rect = ui.max_rect();
        ui.painter()
            .rect_filled(rect, 0.0, egui::Color32::from_rgb(16, 17, 20));
        ui.painter().text(
            rect.center(),
            egui::Align2::CENTER_CENTER,
            content_path,
            egui::FontId::new(13.0, egui::FontFamily::Monospace),
            egui::Color32::from_rgb(120, 124, 132),
        );
    }
}
