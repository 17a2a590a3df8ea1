//! oriel: a floating viewer window for embedded documents.
//!
//! One draggable, resizable, minimizable/maximizable window hosting an
//! embedded document addressed by URL, with geometry and visibility
//! persisted across runs. The window-in-a-window pattern of a web
//! console, done as an embeddable egui component.
//!
//! Layering:
//!
//! - `oriel_core` — window state machine, control API, gesture
//!   sessions, geometry clamps. Pure logic, no GUI dependency.
//! - `oriel_config` — YAML settings file and the file-backed session
//!   store.
//! - this crate — the egui frame (title bar, resize handles, loading
//!   overlay) and [`ViewerShell`], which wires everything together.
//!
//! Embedders call [`ViewerShell::ui`] once per egui frame and drive
//! the window through [`ViewerShell::open`] / the manager's control
//! API. The hosted document is abstracted behind [`EmbeddedSurface`];
//! the only signal it sends back is load completion.

pub mod frame_ui;
pub mod shell;
pub mod surface;

pub use frame_ui::FrameUi;
pub use shell::ViewerShell;
pub use surface::{EmbeddedSurface, LoadSignal, PlaceholderSurface};

// Re-export the logic and persistence layers so embedders (and the
// integration tests) need only this crate.
pub use oriel_config::{FileSessionStore, Settings, SettingsError};
pub use oriel_core::{
    DetachedHost, DragSession, HostContext, MemorySessionStore, NavigationError, PersistedWindow,
    PointPx, PointerSample, RectPx, ResizeDirection, ResizeSession, SessionRecord, SessionStore,
    SizePx, StoreError, TargetId, WindowManager, WindowState, content_path,
};
pub use oriel_core::{
    DRAG_GRAB_MARGIN_X, DRAG_GRAB_MARGIN_Y, MIN_HEIGHT, MIN_WIDTH, MINIMIZED_STRIP,
};
