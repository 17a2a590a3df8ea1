//! Drag and resize gesture sessions.
//!
//! A session is an owned object created on pointer-down and dropped on
//! pointer-up; while it lives, every pointer move is folded through it
//! into a new committed geometry. The math here is pure: sessions never
//! touch [`WindowState`](crate::state::WindowState) themselves, the
//! [`WindowManager`](crate::manager::WindowManager) commits what they
//! return. Mouse and touch both reduce to [`PointerSample`]s, so one
//! set of rules covers every input device.

use crate::geometry::{PointPx, RectPx, SizePx, clamp_lo_wins};
use crate::state::{MIN_HEIGHT, MIN_WIDTH};

/// Horizontal strip of the window that must stay inside the viewport
/// during a drag. The box may overhang the right edge by more than
/// this, keeping a partially-offscreen window grabbable.
pub const DRAG_GRAB_MARGIN_X: f32 = 100.0;
/// Vertical counterpart of [`DRAG_GRAB_MARGIN_X`].
pub const DRAG_GRAB_MARGIN_Y: f32 = 50.0;

/// A pointer position in viewport coordinates, independent of the
/// input device that produced it. Adapters extract this per modality;
/// all gesture math below is written against it once.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerSample {
    pub x: f32,
    pub y: f32,
}

impl PointerSample {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl From<(f32, f32)> for PointerSample {
    fn from((x, y): (f32, f32)) -> Self {
        Self { x, y }
    }
}

/// An active title-bar drag.
///
/// The pointer-to-corner offset is captured once on pointer-down and
/// held constant for the whole gesture, so the box never jumps to
/// re-center under the pointer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    offset_x: f32,
    offset_y: f32,
}

impl DragSession {
    /// Start a drag from a pointer-down at `pointer` over a window
    /// currently occupying `bounds`.
    pub fn begin(pointer: PointerSample, bounds: RectPx) -> Self {
        Self {
            offset_x: pointer.x - bounds.left,
            offset_y: pointer.y - bounds.top,
        }
    }

    /// New top-left corner for a pointer move, clamped so at least the
    /// grab margins stay inside the viewport.
    pub fn position_for(&self, pointer: PointerSample, viewport: SizePx) -> PointPx {
        PointPx {
            x: clamp_lo_wins(
                pointer.x - self.offset_x,
                0.0,
                viewport.width - DRAG_GRAB_MARGIN_X,
            ),
            y: clamp_lo_wins(
                pointer.y - self.offset_y,
                0.0,
                viewport.height - DRAG_GRAB_MARGIN_Y,
            ),
        }
    }
}

/// Which edge or corner handle a resize was started from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResizeDirection {
    North,
    South,
    East,
    West,
    NorthEast,
    NorthWest,
    SouthEast,
    SouthWest,
}

impl ResizeDirection {
    pub const ALL: [ResizeDirection; 8] = [
        ResizeDirection::North,
        ResizeDirection::South,
        ResizeDirection::East,
        ResizeDirection::West,
        ResizeDirection::NorthEast,
        ResizeDirection::NorthWest,
        ResizeDirection::SouthEast,
        ResizeDirection::SouthWest,
    ];

    pub fn touches_north(self) -> bool {
        matches!(
            self,
            ResizeDirection::North | ResizeDirection::NorthEast | ResizeDirection::NorthWest
        )
    }

    pub fn touches_south(self) -> bool {
        matches!(
            self,
            ResizeDirection::South | ResizeDirection::SouthEast | ResizeDirection::SouthWest
        )
    }

    pub fn touches_east(self) -> bool {
        matches!(
            self,
            ResizeDirection::East | ResizeDirection::NorthEast | ResizeDirection::SouthEast
        )
    }

    pub fn touches_west(self) -> bool {
        matches!(
            self,
            ResizeDirection::West | ResizeDirection::NorthWest | ResizeDirection::SouthWest
        )
    }
}

/// An active edge/corner resize.
///
/// Pointer and bounds are snapshotted on pointer-down; every move is
/// interpreted as a delta against that snapshot, not against the last
/// committed box, so clamped moves don't accumulate error.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResizeSession {
    direction: ResizeDirection,
    start_pointer: PointerSample,
    start: RectPx,
}

impl ResizeSession {
    pub fn begin(direction: ResizeDirection, pointer: PointerSample, bounds: RectPx) -> Self {
        Self {
            direction,
            start_pointer: pointer,
            start: bounds,
        }
    }

    pub fn direction(&self) -> ResizeDirection {
        self.direction
    }

    /// Candidate bounds for a pointer move.
    ///
    /// Per axis: the edge opposite the handle stays fixed and the
    /// grabbed edge tracks the pointer, clamped between the viewport
    /// boundary and `opposite - MIN`. The west/north edge therefore
    /// stops moving exactly when the minimum-size clamp binds and
    /// cannot pull the box past it, and both the minimum-size and the
    /// containment invariants hold after every single move. Growth
    /// toward the east/south edge is capped at the viewport unless the
    /// box already overhangs it (a dragged-out window keeps its
    /// overhang rather than snapping below the minimum size).
    pub fn bounds_for(&self, pointer: PointerSample, viewport: SizePx) -> RectPx {
        let dx = pointer.x - self.start_pointer.x;
        let dy = pointer.y - self.start_pointer.y;
        let mut out = self.start;

        if self.direction.touches_east() {
            let cap = (viewport.width - self.start.left).max(MIN_WIDTH);
            out.width = clamp_lo_wins(self.start.width + dx, MIN_WIDTH, cap);
        }
        if self.direction.touches_west() {
            let right = self.start.right();
            let left = clamp_lo_wins(self.start.left + dx, 0.0, right - MIN_WIDTH);
            out.left = left;
            out.width = right - left;
        }
        if self.direction.touches_south() {
            let cap = (viewport.height - self.start.top).max(MIN_HEIGHT);
            out.height = clamp_lo_wins(self.start.height + dy, MIN_HEIGHT, cap);
        }
        if self.direction.touches_north() {
            let bottom = self.start.bottom();
            let top = clamp_lo_wins(self.start.top + dy, 0.0, bottom - MIN_HEIGHT);
            out.top = top;
            out.height = bottom - top;
        }

        out
    }
}
