//! Window struct

use serde::Serialize;
use crate::math::{Rect, FRAME_STYLE};
use crate::snap::SnapZone;
use super::{Capabilities, PreviewData, WindowId};

/// What kind of content a window hosts
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum WindowKind {
    /// Regular app window; at most one per app id
    #[default]
    Standard,
    /// Read-only document preview; at most one per preview source
    Preview(PreviewData),
}

/// An open application window
#[derive(Clone, Debug)]
pub struct Window {
    /// Unique identifier
    pub id: WindowId,
    /// Application identifier (selects the content component)
    pub app_id: String,
    /// Titlebar/taskbar text
    pub title: String,
    /// Floating geometry; only drawn when neither maximized nor snapped
    pub rect: Rect,
    /// Floating geometry captured before the last maximize or snap
    pub saved: Rect,
    /// Stacking order (higher = in front)
    pub z: u64,
    /// Hidden but still mounted
    pub minimized: bool,
    pub maximized: bool,
    pub snap_zone: Option<SnapZone>,
    /// Desktop icon to animate from/to; never used for layout
    pub origin_rect: Option<Rect>,
    /// Dock icon to animate from/to; never used for layout
    pub dock_rect: Option<Rect>,
    pub capabilities: Capabilities,
    pub kind: WindowKind,
    /// Opaque payload for the app's content component
    pub initial_data: Option<String>,
}

impl Window {
    /// Neither maximized nor snapped
    #[inline]
    pub fn is_floating(&self) -> bool {
        !self.maximized && self.snap_zone.is_none()
    }

    #[inline]
    pub fn is_preview(&self) -> bool {
        matches!(self.kind, WindowKind::Preview(_))
    }

    /// Preview source, for preview windows
    pub fn preview_source(&self) -> Option<&str> {
        match &self.kind {
            WindowKind::Preview(preview) => Some(preview.source.as_str()),
            WindowKind::Standard => None,
        }
    }

    #[inline]
    pub fn can_resize(&self) -> bool {
        !self.capabilities.disable_resize
    }

    #[inline]
    pub fn can_minimize(&self) -> bool {
        !self.capabilities.disable_minimize
    }

    /// Remember the current floating geometry
    pub(crate) fn save_floating(&mut self) {
        self.saved = self.rect;
    }
}

/// Title bar of a window drawn at `frame`
pub fn title_bar_rect(frame: Rect) -> Rect {
    Rect::new(frame.x, frame.y, frame.width, FRAME_STYLE.title_bar_height)
}

/// Titlebar button `slot` counted from the right edge (0 = close)
pub fn button_rect(frame: Rect, slot: u32) -> Rect {
    let slot = slot as f32;
    let x = frame.right()
        - FRAME_STYLE.button_margin
        - FRAME_STYLE.button_size * (slot + 1.0)
        - FRAME_STYLE.button_spacing * slot;
    let y = frame.y + (FRAME_STYLE.title_bar_height - FRAME_STYLE.button_size) / 2.0;
    Rect::new(x, y, FRAME_STYLE.button_size, FRAME_STYLE.button_size)
}
