//! Shell wiring: settings, manager, surface, and the per-frame pump.

use anyhow::Context as _;

use oriel_config::{FileSessionStore, Settings};
use oriel_core::{
    DetachedHost, HostContext, MemorySessionStore, RectPx, SessionStore, SizePx, TargetId,
    WindowManager,
};

use crate::frame_ui::FrameUi;
use crate::surface::{EmbeddedSurface, LoadSignal};

/// Viewport assumed until the first frame reports the real one.
const BOOTSTRAP_VIEWPORT: SizePx = SizePx {
    width: 1280.0,
    height: 800.0,
};

/// Owns the whole viewer: settings, the window manager, the frame
/// renderer, and the hosted surface. Embedders keep one of these and
/// call [`ViewerShell::ui`] once per egui frame.
pub struct ViewerShell {
    settings: Settings,
    manager: WindowManager,
    frame: FrameUi,
    surface: Box<dyn EmbeddedSurface>,
    load: LoadSignal,
}

impl ViewerShell {
    /// Standalone shell: settings from the conventional path (falling
    /// back to defaults on a broken file), file-backed persistence
    /// unless the settings opt out, never embedded.
    pub fn new(surface: Box<dyn EmbeddedSurface>) -> Self {
        let settings = Settings::load_or_default();
        Self::from_settings(settings, Box::new(DetachedHost), surface)
    }

    /// Like [`ViewerShell::new`] but a broken settings file is an
    /// error instead of a silent fallback.
    pub fn try_new(surface: Box<dyn EmbeddedSurface>) -> anyhow::Result<Self> {
        let settings = Settings::load().context("loading viewer settings")?;
        Ok(Self::from_settings(settings, Box::new(DetachedHost), surface))
    }

    /// Shell with explicit settings and host context. The store is
    /// chosen from `settings.remember_layout`.
    pub fn from_settings(
        settings: Settings,
        host: Box<dyn HostContext>,
        surface: Box<dyn EmbeddedSurface>,
    ) -> Self {
        let store: Box<dyn SessionStore> = if settings.remember_layout {
            Box::new(FileSessionStore::new())
        } else {
            Box::new(MemorySessionStore::new())
        };
        Self::with_parts(settings, store, host, surface)
    }

    /// Fully dependency-injected shell (tests, embedders with their
    /// own store backend).
    pub fn with_parts(
        settings: Settings,
        store: Box<dyn SessionStore>,
        host: Box<dyn HostContext>,
        surface: Box<dyn EmbeddedSurface>,
    ) -> Self {
        let initial = RectPx::from_parts(settings.default_position, settings.default_size);
        let manager = WindowManager::new(
            &settings.content_route,
            BOOTSTRAP_VIEWPORT,
            initial,
            store,
            host,
        );
        Self {
            settings,
            manager,
            frame: FrameUi::default(),
            surface,
            load: LoadSignal::new(),
        }
    }

    pub fn manager(&self) -> &WindowManager {
        &self.manager
    }

    pub fn manager_mut(&mut self) -> &mut WindowManager {
        &mut self.manager
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Handle surfaces use to report load completion; hand a clone to
    /// whatever loads the document out-of-band.
    pub fn load_signal(&self) -> LoadSignal {
        self.load.clone()
    }

    /// Open (or re-target) the viewer window.
    pub fn open(&mut self, target: impl Into<TargetId>, label: Option<&str>) {
        self.manager.open(target.into(), label);
    }

    pub fn close(&mut self) {
        self.manager.close();
    }

    /// Per-frame pump: feed the viewport resize signal, drain the
    /// load-complete signal, draw the frame.
    pub fn ui(&mut self, ctx: &egui::Context) {
        let screen = ctx.content_rect().size();
        self.manager
            .viewport_resized(SizePx::new(screen.x, screen.y));
        if self.load.take() {
            self.manager.notify_content_loaded();
        }
        self.frame.ui(
            ctx,
            &mut self.manager,
            &self.settings,
            self.surface.as_mut(),
            &self.load,
        );
    }
}
