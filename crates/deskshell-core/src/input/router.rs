//! Input router state machine

use crate::math::{Rect, Size, Vec2};
use crate::window::{ResizeEdge, WindowId};
use super::{DragState, MoveSession, ResizeSession};

/// Input router managing the one drag or resize session
pub struct InputRouter {
    /// Current drag state
    drag: Option<DragState>,
}

impl Default for InputRouter {
    fn default() -> Self {
        Self::new()
    }
}

impl InputRouter {
    /// Create a new input router
    pub fn new() -> Self {
        Self { drag: None }
    }

    /// Get current drag state
    #[inline]
    pub fn drag_state(&self) -> Option<&DragState> {
        self.drag.as_ref()
    }

    #[inline]
    pub(crate) fn drag_state_mut(&mut self) -> Option<&mut DragState> {
        self.drag.as_mut()
    }

    /// Check if currently dragging
    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Window the active session operates on
    pub fn session_window(&self) -> Option<WindowId> {
        self.drag.as_ref().map(DragState::window_id)
    }

    /// Start window move operation, replacing any running session
    pub fn start_window_move(
        &mut self,
        window_id: WindowId,
        pointer: Vec2,
        rendered: Rect,
        floating_size: Option<Size>,
        snap_enabled: bool,
    ) {
        self.drag = Some(DragState::Move(MoveSession::start(
            window_id,
            pointer,
            rendered,
            floating_size,
            snap_enabled,
        )));
    }

    /// Start window resize operation, replacing any running session
    pub fn start_window_resize(&mut self, window_id: WindowId, edge: ResizeEdge, start_rect: Rect, pointer: Vec2) {
        self.drag = Some(DragState::Resize(ResizeSession::start(window_id, edge, start_rect, pointer)));
    }

    /// End current drag operation, handing back its final state
    pub fn end_drag(&mut self) -> Option<DragState> {
        self.drag.take()
    }

    /// Drop the session without committing anything
    #[inline]
    pub fn cancel(&mut self) {
        self.drag = None;
    }
}
