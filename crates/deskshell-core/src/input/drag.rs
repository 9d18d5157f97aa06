//! Drag state for input operations

use crate::math::{Rect, Size, Vec2};
use crate::snap::EdgeZone;
use crate::viewport::Viewport;
use crate::window::WindowId;
use super::ResizeSession;

/// Current drag operation state
#[derive(Clone, Debug)]
pub enum DragState {
    /// Moving a window by its title bar
    Move(MoveSession),
    /// Resizing a window by one of its handles
    Resize(ResizeSession),
}

impl DragState {
    /// Window the session operates on
    pub fn window_id(&self) -> WindowId {
        match self {
            DragState::Move(session) => session.window_id,
            DragState::Resize(session) => session.window_id,
        }
    }

    /// Live geometry of the session
    pub fn frame(&self) -> Rect {
        match self {
            DragState::Move(session) => session.frame,
            DragState::Resize(session) => session.frame,
        }
    }
}

/// Pending pop-out of a maximized or snapped window
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PopOut {
    /// Horizontal grab point as a fraction of the rendered width
    pub grab_ratio: f32,
    /// Floating size the window returns to
    pub floating_size: Size,
}

/// Title bar drag of one window
#[derive(Clone, Debug)]
pub struct MoveSession {
    pub window_id: WindowId,
    /// Offset from window origin to cursor
    pub offset: Vec2,
    /// Set while a tiled window waits for the first move
    pub pop_out: Option<PopOut>,
    /// Live geometry
    pub frame: Rect,
    /// Pointer has moved since the session started
    pub moved: bool,
    /// Whether edge zones are detected (off for fixed-size windows)
    pub snap_enabled: bool,
    /// Zone under the pointer at the last move
    pub zone: Option<EdgeZone>,
}

impl MoveSession {
    /// Start dragging a window currently drawn at `rendered`
    ///
    /// `floating_size` is the saved floating size when the window is
    /// maximized or snapped, `None` when it is already floating.
    pub fn start(
        window_id: WindowId,
        pointer: Vec2,
        rendered: Rect,
        floating_size: Option<Size>,
        snap_enabled: bool,
    ) -> Self {
        let pop_out = floating_size.map(|floating_size| {
            let grab_ratio = if rendered.width > 0.0 {
                ((pointer.x - rendered.x) / rendered.width).clamp(0.0, 1.0)
            } else {
                0.5
            };
            PopOut { grab_ratio, floating_size }
        });

        Self {
            window_id,
            offset: pointer - rendered.position(),
            pop_out,
            frame: rendered,
            moved: false,
            snap_enabled,
            zone: None,
        }
    }

    /// Follow the pointer
    ///
    /// Returns `true` when the detected edge zone changed.
    pub fn update(&mut self, pointer: Vec2, viewport: &Viewport, edge_threshold: f32) -> bool {
        if let Some(pop) = self.pop_out.take() {
            // Same relative grab point on the floating-size window
            self.offset = Vec2::new(pop.grab_ratio * pop.floating_size.width, self.offset.y);
            self.frame = Rect::from_pos_size(self.frame.position(), pop.floating_size);
        }

        let origin = pointer - self.offset;
        let origin = Vec2::new(origin.x, viewport.clamp_top(origin.y));
        self.frame = self.frame.with_position(origin);
        self.moved = true;

        let zone = if self.snap_enabled {
            viewport.detect_edge_zone(pointer.x, pointer.y, edge_threshold)
        } else {
            None
        };
        let changed = zone != self.zone;
        self.zone = zone;
        changed
    }

    /// Zone to apply when the pointer is released at `pointer`
    pub fn release_zone(&self, pointer: Vec2, viewport: &Viewport, edge_threshold: f32) -> Option<EdgeZone> {
        if !self.moved || !self.snap_enabled {
            return None;
        }
        viewport.detect_edge_zone(pointer.x, pointer.y, edge_threshold)
    }
}
