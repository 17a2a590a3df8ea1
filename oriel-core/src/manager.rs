//! The window manager: control API, gesture guards, and persistence
//! side effects.
//!
//! One [`WindowManager`] owns the one [`WindowState`], the injected
//! store and host context, and at most one active gesture session. All
//! mutation goes through it; every successful mutation while visible is
//! written through the store, and closing removes the stored record.

use crate::geometry::{PointPx, RectPx, SizePx};
use crate::gesture::{DragSession, PointerSample, ResizeDirection, ResizeSession};
use crate::host::{HostContext, content_path};
use crate::state::{TargetId, WindowState};
use crate::store::{SessionRecord, SessionStore};

enum GestureSession {
    Drag(DragSession),
    Resize(ResizeSession),
}

/// Owner of the window state machine.
pub struct WindowManager {
    state: WindowState,
    viewport: SizePx,
    route: String,
    store: Box<dyn SessionStore>,
    host: Box<dyn HostContext>,
    gesture: Option<GestureSession>,
    content_loading: bool,
}

impl WindowManager {
    /// Build a manager and restore any persisted session.
    ///
    /// `route` is the fixed path segment of the content address;
    /// `initial` is the geometry used until a gesture or a persisted
    /// record says otherwise. An embedded instance never restores: it
    /// will not open windows locally in the first place.
    pub fn new(
        route: &str,
        viewport: SizePx,
        initial: RectPx,
        store: Box<dyn SessionStore>,
        host: Box<dyn HostContext>,
    ) -> Self {
        let mut manager = Self {
            state: WindowState {
                position: initial.position(),
                size: initial.size(),
                saved_position: initial.position(),
                saved_size: initial.size(),
                ..WindowState::default()
            },
            viewport,
            route: route.to_string(),
            store,
            host,
            gesture: None,
            content_loading: false,
        };
        manager.restore();
        manager
    }

    fn restore(&mut self) {
        if self.host.is_embedded() {
            return;
        }
        match self.store.load() {
            Ok(Some(record)) => {
                log::info!(
                    "restoring session for {} (saved {})",
                    record.target_id,
                    record.saved_at
                );
                self.state = record.into_state();
                self.content_loading = !self.state.minimized;
            }
            Ok(None) => {}
            Err(e) => {
                // Drop the bad record so the failure does not repeat on
                // the next start.
                log::warn!("discarding unreadable session record: {e}");
                if let Err(e) = self.store.clear() {
                    log::warn!("failed to clear session record: {e}");
                }
            }
        }
    }

    // ── Read side ──────────────────────────────────────────────────────

    pub fn state(&self) -> &WindowState {
        &self.state
    }

    pub fn viewport(&self) -> SizePx {
        self.viewport
    }

    pub fn gesture_active(&self) -> bool {
        self.gesture.is_some()
    }

    /// Whether the embedded content is still loading (drives the
    /// overlay, nothing else).
    pub fn content_loading(&self) -> bool {
        self.content_loading
    }

    /// Canonical address of the active content, if any.
    pub fn content_path(&self) -> Option<String> {
        self.state
            .target_id
            .as_ref()
            .map(|id| content_path(&self.route, id))
    }

    // ── Control API ────────────────────────────────────────────────────

    /// Open (or re-target) the window.
    ///
    /// Inside an embedded context this never mutates local state: the
    /// top-level context is redirected to the content path instead, so
    /// a viewer cannot nest inside itself. A blocked redirect falls
    /// back to same-context navigation.
    pub fn open(&mut self, target: TargetId, label: Option<&str>) {
        if self.host.is_embedded() {
            let path = content_path(&self.route, &target);
            log::info!("embedded context: redirecting to {path} instead of opening");
            if let Err(e) = self.host.navigate_top(&path) {
                log::warn!("top-level redirect failed ({e}), navigating locally");
                self.host.navigate_here(&path);
            }
            return;
        }

        let retarget = self.state.target_id.as_ref() != Some(&target);
        let frame_requested = retarget || !self.state.visible || self.state.minimized;

        log::info!("opening window for {target}");
        self.state.target_id = Some(target);
        self.state.target_label = label.map(str::to_string);
        self.state.visible = true;
        // Re-opening un-minimizes.
        self.state.minimized = false;
        if frame_requested {
            self.content_loading = true;
        }
        self.persist();
    }

    /// Hide the window. Geometry stays in memory so a reopen in the
    /// same process restores the last layout, but the persisted record
    /// is removed. A gesture in flight is forcibly ended so no stale
    /// session keeps mutating an invisible window.
    pub fn close(&mut self) {
        if !self.state.visible {
            return;
        }
        log::info!("closing window");
        self.gesture = None;
        self.state.visible = false;
        self.content_loading = false;
        self.persist();
    }

    /// Toggle between maximized and the remembered floating geometry.
    pub fn toggle_maximize(&mut self) {
        if !self.state.visible {
            return;
        }
        if self.state.maximized {
            self.state.position = self.state.saved_position;
            self.state.size = self.state.saved_size;
            self.state.maximized = false;
        } else {
            self.state.saved_position = self.state.position;
            self.state.saved_size = self.state.size;
            self.state.position = PointPx::ORIGIN;
            self.state.size = self.viewport;
            self.state.maximized = true;
        }
        self.persist();
    }

    /// Collapse to the title-bar strip or restore from it. The stored
    /// size is untouched; un-minimizing re-requests the content frame.
    pub fn toggle_minimize(&mut self) {
        if !self.state.visible {
            return;
        }
        self.state.minimized = !self.state.minimized;
        self.content_loading = !self.state.minimized;
        self.persist();
    }

    // ── Gesture entry points ───────────────────────────────────────────

    /// Pointer-down on the title bar. No-op while maximized or while
    /// another gesture is active.
    pub fn begin_drag(&mut self, pointer: PointerSample) {
        if !self.state.visible || self.state.maximized || self.gesture.is_some() {
            return;
        }
        let bounds = self.state.rendered_bounds(self.viewport);
        log::debug!("drag started at {},{}", pointer.x, pointer.y);
        self.gesture = Some(GestureSession::Drag(DragSession::begin(pointer, bounds)));
    }

    /// Pointer-down on a resize handle. Disabled while maximized or
    /// minimized (the strip has no handles).
    pub fn begin_resize(&mut self, direction: ResizeDirection, pointer: PointerSample) {
        if !self.state.visible
            || self.state.maximized
            || self.state.minimized
            || self.gesture.is_some()
        {
            return;
        }
        log::debug!("resize {direction:?} started");
        self.gesture = Some(GestureSession::Resize(ResizeSession::begin(
            direction,
            pointer,
            self.state.stored_bounds(),
        )));
    }

    /// Pointer move during an active gesture. Commits (and persists)
    /// on every event so the box tracks the pointer live; without an
    /// active gesture this is a no-op.
    pub fn pointer_moved(&mut self, pointer: PointerSample) {
        match &self.gesture {
            Some(GestureSession::Drag(session)) => {
                self.state.position = session.position_for(pointer, self.viewport);
            }
            Some(GestureSession::Resize(session)) => {
                let bounds = session.bounds_for(pointer, self.viewport);
                self.state.position = bounds.position();
                self.state.size = bounds.size();
            }
            None => return,
        }
        self.persist();
    }

    /// Pointer-up anywhere. Ends the gesture; no geometry correction
    /// beyond what each move already applied.
    pub fn pointer_released(&mut self) {
        if self.gesture.take().is_some() {
            log::debug!("gesture ended");
        }
    }

    // ── External signals ───────────────────────────────────────────────

    /// Host viewport resize. While maximized the window re-fits the
    /// viewport (origin pinned); otherwise only the tracked dimensions
    /// change, feeding future gesture clamps.
    pub fn viewport_resized(&mut self, viewport: SizePx) {
        if viewport == self.viewport {
            return;
        }
        self.viewport = viewport;
        if self.state.visible && self.state.maximized {
            self.state.position = PointPx::ORIGIN;
            self.state.size = viewport;
            self.persist();
        }
    }

    /// The embedded content finished loading; only the overlay cares.
    pub fn notify_content_loaded(&mut self) {
        if self.content_loading {
            log::debug!("embedded content finished loading");
            self.content_loading = false;
        }
    }

    // ── Persistence ────────────────────────────────────────────────────

    /// Write-through after a mutation: whole-record replacement while
    /// visible, record removal once hidden. Store failures are logged
    /// and swallowed; at worst one geometry update is lost.
    fn persist(&mut self) {
        if !self.state.visible {
            if let Err(e) = self.store.clear() {
                log::warn!("failed to clear session record: {e}");
            }
            return;
        }
        let Some(record) = SessionRecord::capture(&self.state) else {
            return;
        };
        if let Err(e) = self.store.save(&record) {
            log::warn!("failed to persist session record: {e}");
        }
    }
}
