//! Input result type

use serde::Serialize;
use crate::math::Rect;
use crate::window::WindowId;

/// Result of input handling
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum InputResult {
    /// Input was handled internally
    Handled,
    /// Input was not handled (pass through)
    Unhandled,
    /// Live geometry of the window a session is operating on
    #[serde(rename_all = "camelCase")]
    Frame {
        window_id: WindowId,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
    },
    /// Input should be forwarded to window content
    #[serde(rename_all = "camelCase")]
    Forward {
        /// Target window
        window_id: WindowId,
        /// X coordinate in window-local space
        local_x: f32,
        /// Y coordinate in window-local space
        local_y: f32,
    },
}

impl InputResult {
    /// Live frame result for a window
    pub fn frame(window_id: WindowId, rect: Rect) -> Self {
        InputResult::Frame {
            window_id,
            x: rect.x,
            y: rect.y,
            width: rect.width,
            height: rect.height,
        }
    }

    /// Check if input was handled
    #[inline]
    pub fn is_handled(&self) -> bool {
        !matches!(self, InputResult::Unhandled)
    }

    /// Live rect carried by a frame result
    pub fn frame_rect(&self) -> Option<Rect> {
        match *self {
            InputResult::Frame { x, y, width, height, .. } => Some(Rect::new(x, y, width, height)),
            _ => None,
        }
    }
}
