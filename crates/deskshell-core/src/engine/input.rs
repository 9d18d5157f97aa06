//! Input handling for pointer events and drag operations

use tracing::{debug, trace};

use crate::error::ShellResult;
use crate::input::{DragState, InputResult};
use crate::math::Vec2;
use crate::snap::EdgeZone;
use crate::window::{hit_test, ResizeEdge, WindowId, WindowRegion};
use super::DesktopShell;

impl DesktopShell {
    /// Topmost visible window region under a screen point
    pub fn region_at(&self, x: f32, y: f32) -> Option<(WindowId, WindowRegion)> {
        let pos = Vec2::new(x, y);
        self.store
            .windows_by_z()
            .into_iter()
            .rev()
            .filter(|w| !w.minimized)
            .find_map(|w| hit_test(w, self.viewport.rendered_rect(w), pos).map(|region| (w.id, region)))
    }

    /// Start move drag
    ///
    /// A maximized or snapped window stays tiled until the first move, when it
    /// pops out to its floating size under the same relative grab point.
    pub fn begin_move(&mut self, id: WindowId, x: f32, y: f32) -> InputResult {
        let (rendered, floating_size, snap_enabled) = match self.store.get(id) {
            Some(window) => (
                self.viewport.rendered_rect(window),
                (!window.is_floating()).then(|| window.saved.size()),
                window.can_resize(),
            ),
            None => return InputResult::Unhandled,
        };

        self.store.focus_window(id, None);
        self.store.set_drag_snap_preview(None);
        self.input.start_window_move(id, Vec2::new(x, y), rendered, floating_size, snap_enabled);
        trace!(window_id = id, "move started");
        InputResult::Handled
    }

    /// Start resize drag
    ///
    /// A maximized or snapped window is first committed at its rendered rect
    /// so the resize starts from what is on screen.
    pub fn begin_resize(&mut self, id: WindowId, edge: ResizeEdge, x: f32, y: f32) -> InputResult {
        let (rendered, tiled) = match self.store.get(id) {
            Some(window) if window.can_resize() => (self.viewport.rendered_rect(window), !window.is_floating()),
            _ => return InputResult::Unhandled,
        };

        if tiled {
            self.store.resize_window(id, rendered);
        }
        self.store.focus_window(id, None);
        self.input.start_window_resize(id, edge, rendered, Vec2::new(x, y));
        trace!(window_id = id, edge = edge.as_str(), "resize started");
        InputResult::Handled
    }

    /// Start resize drag from a host handle name ("n", "se", ...)
    pub fn begin_resize_named(&mut self, id: WindowId, edge: &str, x: f32, y: f32) -> ShellResult<InputResult> {
        let edge: ResizeEdge = edge.parse()?;
        Ok(self.begin_resize(id, edge, x, y))
    }

    /// Handle pointer down
    pub fn handle_pointer_down(&mut self, x: f32, y: f32, button: u8) -> InputResult {
        // Left button only
        if button != 0 {
            return InputResult::Unhandled;
        }

        let (window_id, region) = match self.region_at(x, y) {
            Some(hit) => hit,
            None => return InputResult::Unhandled,
        };

        match region {
            WindowRegion::CloseButton => {
                self.close_window(window_id);
                InputResult::Handled
            }
            WindowRegion::MinimizeButton => {
                self.minimize_window(window_id);
                InputResult::Handled
            }
            WindowRegion::MaximizeButton => {
                self.toggle_maximize(window_id);
                InputResult::Handled
            }
            WindowRegion::TitleBar => self.begin_move(window_id, x, y),
            WindowRegion::Resize(edge) => self.begin_resize(window_id, edge, x, y),
            WindowRegion::Content => self.handle_content_click(window_id, x, y),
        }
    }

    /// Handle click on content area: focus and forward to the app
    fn handle_content_click(&mut self, window_id: WindowId, x: f32, y: f32) -> InputResult {
        self.store.focus_window(window_id, None);

        let frame = match self.store.get(window_id) {
            Some(window) => self.viewport.rendered_rect(window),
            None => return InputResult::Unhandled,
        };
        InputResult::Forward {
            window_id,
            local_x: x - frame.x,
            local_y: y - frame.y,
        }
    }

    /// Handle pointer move
    ///
    /// Returns the live frame of the window under a session. Nothing is
    /// written to the store except the snap preview zone.
    pub fn handle_pointer_move(&mut self, x: f32, y: f32) -> InputResult {
        let pointer = Vec2::new(x, y);
        let viewport = self.viewport;
        let edge_threshold = self.config.edge_threshold;
        let min_size = self.config.min_window_size;

        match self.input.drag_state_mut() {
            Some(DragState::Move(session)) => {
                if session.update(pointer, &viewport, edge_threshold) {
                    self.store.set_drag_snap_preview(session.zone);
                }
                InputResult::frame(session.window_id, session.frame)
            }
            Some(DragState::Resize(session)) => {
                let frame = session.update(pointer, min_size, viewport.top_reserved);
                InputResult::frame(session.window_id, frame)
            }
            None => InputResult::Unhandled,
        }
    }

    /// Handle pointer up
    ///
    /// Commits the session's geometry. A move released in an edge zone snaps
    /// or maximizes the window.
    pub fn handle_pointer_up(&mut self, x: f32, y: f32) -> InputResult {
        let state = match self.input.end_drag() {
            Some(state) => state,
            None => return InputResult::Unhandled,
        };

        match state {
            DragState::Move(session) => {
                let id = session.window_id;
                if session.moved {
                    self.store.move_window(id, session.frame.x, session.frame.y);
                    match session.release_zone(Vec2::new(x, y), &self.viewport, self.config.edge_threshold) {
                        Some(EdgeZone::Tile(zone)) => self.store.snap_window(id, zone),
                        Some(EdgeZone::Maximize) => self.store.toggle_maximize(id),
                        None => {}
                    }
                    debug!(window_id = id, x = session.frame.x, y = session.frame.y, "move committed");
                }
                self.store.set_drag_snap_preview(None);
            }
            DragState::Resize(session) => {
                self.store.resize_window(session.window_id, session.frame);
                debug!(
                    window_id = session.window_id,
                    width = session.frame.width,
                    height = session.frame.height,
                    "resize committed"
                );
            }
        }

        InputResult::Handled
    }

    /// Cursor for the region under a screen point
    pub fn cursor_at(&self, x: f32, y: f32) -> &'static str {
        self.region_at(x, y).map_or("default", |(_, region)| region.cursor())
    }
}

#[cfg(test)]
mod tests {
    use crate::math::Rect;
    use crate::snap::SnapZone;
    use super::*;

    /// Shell with "notes" open at (360, 166, 560, 500)
    fn shell_with_notes() -> (DesktopShell, WindowId) {
        let mut shell = DesktopShell::new();
        shell.init(1280.0, 800.0);
        let id = shell.launch_app("notes");
        (shell, id)
    }

    #[test]
    fn test_drag_moves_window_on_release_only() {
        let (mut shell, id) = shell_with_notes();

        assert!(shell.handle_pointer_down(400.0, 180.0, 0).is_handled());
        let result = shell.handle_pointer_move(500.0, 280.0);
        assert_eq!(result.frame_rect(), Some(Rect::new(460.0, 266.0, 560.0, 500.0)));

        // Store untouched until release
        assert_eq!(shell.store().get(id).unwrap().rect.position(), Vec2::new(360.0, 166.0));

        shell.handle_pointer_up(500.0, 280.0);
        assert_eq!(shell.store().get(id).unwrap().rect, Rect::new(460.0, 266.0, 560.0, 500.0));
        assert!(!shell.input().is_dragging());
    }

    #[test]
    fn test_drag_clamped_below_strip() {
        let (mut shell, id) = shell_with_notes();

        shell.handle_pointer_down(400.0, 180.0, 0);
        let frame = shell.handle_pointer_move(400.0, 20.0).frame_rect().unwrap();
        assert!((frame.y - 32.0).abs() < 0.001);

        // Released away from the top edge
        shell.handle_pointer_move(400.0, 40.0);
        shell.handle_pointer_up(400.0, 40.0);
        assert!((shell.store().get(id).unwrap().rect.y - 32.0).abs() < 0.001);
    }

    #[test]
    fn test_drag_to_left_edge_snaps() {
        let (mut shell, id) = shell_with_notes();
        let floating = shell.store().get(id).unwrap().rect;

        shell.handle_pointer_down(400.0, 180.0, 0);
        shell.handle_pointer_move(5.0, 400.0);
        assert_eq!(shell.store().drag_snap_preview(), Some(EdgeZone::Tile(SnapZone::Left)));
        shell.handle_pointer_up(5.0, 400.0);

        let window = shell.store().get(id).unwrap();
        assert_eq!(window.snap_zone, Some(SnapZone::Left));
        assert!(shell.store().drag_snap_preview().is_none());
        assert_eq!(shell.viewport().rendered_rect(window), Rect::new(0.0, 32.0, 640.0, 768.0));

        // Saved geometry is where the window was dropped
        let dropped = Rect::new(5.0 - 40.0, 400.0 - 14.0, floating.width, floating.height);
        assert_eq!(window.saved, dropped);
    }

    #[test]
    fn test_drag_to_top_edge_maximizes() {
        let (mut shell, id) = shell_with_notes();

        shell.handle_pointer_down(400.0, 180.0, 0);
        shell.handle_pointer_move(640.0, 4.0);
        assert_eq!(shell.store().drag_snap_preview(), Some(EdgeZone::Maximize));
        shell.handle_pointer_up(640.0, 4.0);

        let window = shell.store().get(id).unwrap();
        assert!(window.maximized);
        assert!(window.snap_zone.is_none());
    }

    #[test]
    fn test_drag_out_of_zone_clears_preview() {
        let (mut shell, id) = shell_with_notes();

        shell.handle_pointer_down(400.0, 180.0, 0);
        shell.handle_pointer_move(5.0, 400.0);
        shell.handle_pointer_move(300.0, 400.0);
        assert!(shell.store().drag_snap_preview().is_none());
        shell.handle_pointer_up(300.0, 400.0);

        assert!(shell.store().get(id).unwrap().is_floating());
    }

    #[test]
    fn test_click_without_move_keeps_tiling() {
        let (mut shell, id) = shell_with_notes();
        shell.snap_window(id, SnapZone::Left);

        // Title bar of the snapped window, pressed and released in place
        shell.handle_pointer_down(300.0, 50.0, 0);
        shell.handle_pointer_up(300.0, 50.0);

        assert_eq!(shell.store().get(id).unwrap().snap_zone, Some(SnapZone::Left));
    }

    #[test]
    fn test_drag_pops_snapped_window() {
        let (mut shell, id) = shell_with_notes();
        shell.snap_window(id, SnapZone::Left);

        // Grab at half the snapped width
        shell.handle_pointer_down(320.0, 50.0, 0);
        let frame = shell.handle_pointer_move(620.0, 300.0).frame_rect().unwrap();

        assert!((frame.width - 560.0).abs() < 0.001);
        assert!((frame.height - 500.0).abs() < 0.001);
        assert!((frame.x - (620.0 - 280.0)).abs() < 0.001);
        assert!((frame.y - (300.0 - 18.0)).abs() < 0.001);

        shell.handle_pointer_up(620.0, 300.0);
        let window = shell.store().get(id).unwrap();
        assert!(window.is_floating());
        assert_eq!(window.rect, frame);
    }

    #[test]
    fn test_fixed_window_drag_never_snaps() {
        let mut shell = DesktopShell::new();
        shell.init(1280.0, 800.0);
        let id = shell.launch_app("snake");
        let rect = shell.store().get(id).unwrap().rect;

        shell.begin_move(id, rect.x + 100.0, rect.y + 10.0);
        shell.handle_pointer_move(5.0, 400.0);
        assert!(shell.store().drag_snap_preview().is_none());
        shell.handle_pointer_up(5.0, 400.0);

        assert!(shell.store().get(id).unwrap().is_floating());
    }

    #[test]
    fn test_resize_from_handle() {
        let (mut shell, id) = shell_with_notes();

        // Bottom-right corner of (360, 166, 560, 500)
        assert!(shell.handle_pointer_down(918.0, 664.0, 0).is_handled());
        assert!(matches!(shell.input().drag_state(), Some(DragState::Resize(_))));

        let frame = shell.handle_pointer_move(968.0, 694.0).frame_rect().unwrap();
        assert_eq!(frame, Rect::new(360.0, 166.0, 610.0, 530.0));

        shell.handle_pointer_up(968.0, 694.0);
        assert_eq!(shell.store().get(id).unwrap().rect, Rect::new(360.0, 166.0, 610.0, 530.0));
    }

    #[test]
    fn test_resize_respects_minimum() {
        let (mut shell, id) = shell_with_notes();

        shell.begin_resize(id, ResizeEdge::West, 360.0, 400.0);
        let frame = shell.handle_pointer_move(1200.0, 400.0).frame_rect().unwrap();
        assert!((frame.width - 200.0).abs() < 0.001);
        assert!((frame.right() - 920.0).abs() < 0.001);
        shell.handle_pointer_up(1200.0, 400.0);
    }

    #[test]
    fn test_resize_snapped_window_commits_rendered_rect() {
        let (mut shell, id) = shell_with_notes();
        shell.snap_window(id, SnapZone::Left);

        shell.begin_resize(id, ResizeEdge::East, 640.0, 400.0);
        let window = shell.store().get(id).unwrap();
        assert!(window.is_floating());
        assert_eq!(window.rect, Rect::new(0.0, 32.0, 640.0, 768.0));

        shell.handle_pointer_move(700.0, 400.0);
        shell.handle_pointer_up(700.0, 400.0);
        assert_eq!(shell.store().get(id).unwrap().rect, Rect::new(0.0, 32.0, 700.0, 768.0));
    }

    #[test]
    fn test_resize_named_edges() {
        let (mut shell, id) = shell_with_notes();
        assert!(shell.begin_resize_named(id, "se", 918.0, 664.0).unwrap().is_handled());
        assert!(shell.begin_resize_named(id, "middle", 0.0, 0.0).is_err());
    }

    #[test]
    fn test_fixed_window_refuses_resize() {
        let mut shell = DesktopShell::new();
        shell.init(1280.0, 800.0);
        let id = shell.launch_app("tetris");

        assert!(!shell.begin_resize(id, ResizeEdge::SouthEast, 0.0, 0.0).is_handled());
        assert!(!shell.input().is_dragging());
    }

    #[test]
    fn test_buttons_dispatch() {
        let (mut shell, id) = shell_with_notes();
        // Titlebar buttons of (360, 166, 560, 500): close at x 894, maximize 872, minimize 850
        let y = 166.0 + 18.0;

        shell.handle_pointer_down(879.0, y, 0);
        assert!(shell.store().get(id).unwrap().maximized);
        shell.handle_pointer_up(879.0, y);

        // Maximized: buttons now at the right edge of the work area
        let max_y = 32.0 + 18.0;
        shell.handle_pointer_down(1280.0 - 12.0 - 7.0, max_y, 0);
        assert!(shell.store().get(id).is_none());
    }

    #[test]
    fn test_minimize_button() {
        let (mut shell, id) = shell_with_notes();
        shell.handle_pointer_down(857.0, 184.0, 0);
        assert!(shell.store().get(id).unwrap().minimized);

        // Minimized windows are not hit
        assert!(shell.region_at(600.0, 400.0).is_none());
    }

    #[test]
    fn test_content_click_forwards() {
        let (mut shell, id) = shell_with_notes();
        let result = shell.handle_pointer_down(400.0, 300.0, 0);
        assert_eq!(
            result,
            InputResult::Forward {
                window_id: id,
                local_x: 40.0,
                local_y: 134.0,
            }
        );
        assert!(!shell.input().is_dragging());
    }

    #[test]
    fn test_topmost_window_wins() {
        let (mut shell, notes) = shell_with_notes();
        let terminal = shell.launch_app("terminal");

        let hit = shell.region_at(640.0, 400.0).unwrap();
        assert_eq!(hit.0, terminal);

        shell.focus_window(notes, None);
        assert_eq!(shell.region_at(640.0, 400.0).unwrap().0, notes);
    }

    #[test]
    fn test_other_buttons_and_empty_desktop_unhandled() {
        let (mut shell, _) = shell_with_notes();
        assert!(!shell.handle_pointer_down(400.0, 180.0, 2).is_handled());
        assert!(!shell.handle_pointer_down(50.0, 700.0, 0).is_handled());
        assert!(!shell.handle_pointer_move(60.0, 700.0).is_handled());
        assert!(!shell.handle_pointer_up(60.0, 700.0).is_handled());
        assert_eq!(shell.cursor_at(50.0, 700.0), "default");
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// A dragged window never ends up above the reserved strip
        #[test]
        fn drag_never_enters_top_strip(
            moves in prop::collection::vec((0u32..1280, 0u32..800), 1..20),
        ) {
            let mut shell = DesktopShell::new();
            shell.init(1280.0, 800.0);
            let id = shell.launch_app("notes");

            shell.begin_move(id, 400.0, 180.0);
            let mut last = (400.0, 180.0);
            for (x, y) in moves {
                let (x, y) = (x as f32, y as f32);
                let frame = shell.handle_pointer_move(x, y).frame_rect().unwrap();
                prop_assert!(frame.y >= 32.0);
                last = (x, y);
            }
            shell.handle_pointer_up(last.0, last.1);

            let window = shell.store().get(id).unwrap();
            prop_assert!(shell.viewport().rendered_rect(window).y >= 32.0);
            prop_assert!(window.rect.y >= 32.0);
            prop_assert!(!(window.maximized && window.snap_zone.is_some()));
        }
    }
}
