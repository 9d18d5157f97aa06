//! Browser viewport the shell lays windows out in

use crate::math::{Rect, Size};
use crate::snap::{self, EdgeZone, SnapZone};
use crate::window::Window;

/// Page viewport with the permanently reserved top-panel strip
///
/// Snapped and maximized geometry is derived from this on every read, so a
/// browser resize re-lays those windows out without touching the store.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    /// Viewport size in pixels
    pub screen_size: Size,
    /// Height of the top panel windows may never move under
    pub top_reserved: f32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            screen_size: Size::new(1280.0, 800.0),
            top_reserved: 32.0,
        }
    }
}

impl Viewport {
    /// Create a new viewport
    pub fn new(width: f32, height: f32, top_reserved: f32) -> Self {
        Self {
            screen_size: Size::new(width, height),
            top_reserved,
        }
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.screen_size.width
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.screen_size.height
    }

    /// Area below the top strip
    pub fn work_area(&self) -> Rect {
        snap::compute_maximize_rect(self.width(), self.height(), self.top_reserved)
    }

    /// Rectangle of a snap zone in this viewport
    pub fn snap_rect(&self, zone: SnapZone) -> Rect {
        snap::compute_snap_rect(zone, self.width(), self.height(), self.top_reserved)
    }

    /// Rectangle the preview overlay highlights for a detected zone
    pub fn edge_zone_rect(&self, zone: EdgeZone) -> Rect {
        snap::compute_edge_zone_rect(zone, self.width(), self.height(), self.top_reserved)
    }

    /// Edge zone under the cursor
    pub fn detect_edge_zone(&self, x: f32, y: f32, threshold: f32) -> Option<EdgeZone> {
        snap::detect_edge_zone(x, y, self.width(), self.height(), threshold)
    }

    /// Where a window is actually drawn right now
    pub fn rendered_rect(&self, window: &Window) -> Rect {
        if window.maximized {
            self.work_area()
        } else if let Some(zone) = window.snap_zone {
            self.snap_rect(zone)
        } else {
            window.rect
        }
    }

    /// Keep a window's top edge below the reserved strip
    #[inline]
    pub fn clamp_top(&self, y: f32) -> f32 {
        y.max(self.top_reserved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::window::{Capabilities, WindowKind};

    fn window_at(rect: Rect) -> Window {
        Window {
            id: 1,
            app_id: "notes".to_string(),
            title: "Notes".to_string(),
            rect,
            saved: rect,
            z: 11,
            minimized: false,
            maximized: false,
            snap_zone: None,
            origin_rect: None,
            dock_rect: None,
            capabilities: Capabilities::default(),
            kind: WindowKind::Standard,
            initial_data: None,
        }
    }

    #[test]
    fn test_work_area() {
        let viewport = Viewport::new(1280.0, 800.0, 32.0);
        assert_eq!(viewport.work_area(), Rect::new(0.0, 32.0, 1280.0, 768.0));
    }

    #[test]
    fn test_rendered_rect_floating() {
        let viewport = Viewport::default();
        let rect = Rect::new(100.0, 100.0, 400.0, 300.0);
        assert_eq!(viewport.rendered_rect(&window_at(rect)), rect);
    }

    #[test]
    fn test_rendered_rect_snapped_and_maximized() {
        let viewport = Viewport::new(1280.0, 800.0, 32.0);
        let mut window = window_at(Rect::new(100.0, 100.0, 400.0, 300.0));

        window.snap_zone = Some(SnapZone::Left);
        assert_eq!(viewport.rendered_rect(&window), Rect::new(0.0, 32.0, 640.0, 768.0));

        window.snap_zone = None;
        window.maximized = true;
        assert_eq!(viewport.rendered_rect(&window), viewport.work_area());
    }

    #[test]
    fn test_rendered_rect_tracks_resize() {
        let mut viewport = Viewport::new(1280.0, 800.0, 32.0);
        let mut window = window_at(Rect::new(100.0, 100.0, 400.0, 300.0));
        window.snap_zone = Some(SnapZone::Right);

        viewport.screen_size = Size::new(1920.0, 1080.0);
        assert_eq!(viewport.rendered_rect(&window), Rect::new(960.0, 32.0, 960.0, 1048.0));
    }

    #[test]
    fn test_clamp_top() {
        let viewport = Viewport::default();
        assert!((viewport.clamp_top(-50.0) - 32.0).abs() < 0.001);
        assert!((viewport.clamp_top(200.0) - 200.0).abs() < 0.001);
    }
}
