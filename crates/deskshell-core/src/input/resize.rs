//! Resize sessions

use crate::math::{Rect, Size, Vec2};
use crate::window::{ResizeEdge, WindowId};

/// Calculate the rect after dragging `edge` by `delta`
///
/// The edge opposite the dragged one stays put. Width and height never drop
/// below `min_size`, and a north edge never rises into the reserved strip.
pub fn calculate_resize(edge: ResizeEdge, start: Rect, delta: Vec2, min_size: Size, top_reserved: f32) -> Rect {
    let mut rect = start;

    if edge.east() {
        rect.width = (start.width + delta.x).max(min_size.width);
    }
    if edge.west() {
        rect.width = (start.width - delta.x).max(min_size.width);
        rect.x = start.right() - rect.width;
    }
    if edge.south() {
        rect.height = (start.height + delta.y).max(min_size.height);
    }
    if edge.north() {
        let top = (start.y + delta.y).max(top_reserved);
        rect.height = (start.bottom() - top).max(min_size.height);
        rect.y = start.bottom() - rect.height;
    }

    rect
}

/// Handle drag of one window
#[derive(Clone, Debug)]
pub struct ResizeSession {
    pub window_id: WindowId,
    pub edge: ResizeEdge,
    /// Floating rect when the drag started
    pub start_rect: Rect,
    /// Pointer position when the drag started
    pub start_pointer: Vec2,
    /// Live geometry
    pub frame: Rect,
}

impl ResizeSession {
    pub fn start(window_id: WindowId, edge: ResizeEdge, start_rect: Rect, pointer: Vec2) -> Self {
        Self {
            window_id,
            edge,
            start_rect,
            start_pointer: pointer,
            frame: start_rect,
        }
    }

    /// Follow the pointer and return the live frame
    pub fn update(&mut self, pointer: Vec2, min_size: Size, top_reserved: f32) -> Rect {
        let delta = pointer - self.start_pointer;
        self.frame = calculate_resize(self.edge, self.start_rect, delta, min_size, top_reserved);
        self.frame
    }
}
