//! Core window management for the oriel floating viewer.
//!
//! This crate owns everything that does not touch a GUI toolkit:
//!
//! - The single [`WindowState`] record and its invariants
//! - The imperative control API ([`WindowManager`]: open, close,
//!   maximize, minimize)
//! - Drag and resize gesture sessions with the viewport clamping rules
//! - The host-detection contract that prevents recursive embedding
//! - The injected session-store contract used for persistence
//!
//! All geometry math is pure and unit-testable without an event loop.
//! The egui frame layer in the root crate adapts pointer input into
//! [`PointerSample`]s and routes them here.

pub mod geometry;
pub mod gesture;
pub mod host;
pub mod manager;
pub mod state;
pub mod store;

pub use geometry::{PointPx, RectPx, SizePx};
pub use gesture::{
    DRAG_GRAB_MARGIN_X, DRAG_GRAB_MARGIN_Y, DragSession, PointerSample, ResizeDirection,
    ResizeSession,
};
pub use host::{DetachedHost, HostContext, NavigationError, content_path};
pub use manager::WindowManager;
pub use state::{MIN_HEIGHT, MIN_WIDTH, MINIMIZED_STRIP, TargetId, WindowState};
pub use store::{MemorySessionStore, PersistedWindow, SessionRecord, SessionStore, StoreError};
