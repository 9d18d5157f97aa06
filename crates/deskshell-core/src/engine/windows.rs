//! Window lifecycle and operations

use tracing::{debug, trace};

use crate::math::Rect;
use crate::snap::SnapZone;
use crate::store::ShellEvent;
use crate::window::{OpenRequest, WindowId};
use super::DesktopShell;

impl DesktopShell {
    /// Open an app from its launch profile
    pub fn launch_app(&mut self, app_id: &str) -> WindowId {
        self.launch_app_from(app_id, None, None)
    }

    /// Open an app from a desktop icon or dock icon
    pub fn launch_app_from(&mut self, app_id: &str, origin_rect: Option<Rect>, dock_rect: Option<Rect>) -> WindowId {
        let mut request = self.config.apps.request_for(app_id);
        request.origin_rect = origin_rect;
        request.dock_rect = dock_rect;
        self.open_window(request)
    }

    /// Open a window, or bring the app's existing window back
    pub fn open_window(&mut self, request: OpenRequest) -> WindowId {
        self.store.open_window(request, &self.viewport)
    }

    /// Close a window
    ///
    /// A drag or resize session on the window ends without committing.
    pub fn close_window(&mut self, id: WindowId) {
        self.cancel_session_for(id);
        self.store.close_window(id);
    }

    /// End the session operating on `id` without committing it
    fn cancel_session_for(&mut self, id: WindowId) {
        if self.input.session_window() == Some(id) {
            self.input.cancel();
            self.store.set_drag_snap_preview(None);
            debug!(window_id = id, "session cancelled");
        }
    }

    /// Close whichever window is active
    pub fn close_active_window(&mut self) {
        if let Some(id) = self.store.active_window_id() {
            self.close_window(id);
        }
    }

    /// Minimize a window that allows it
    ///
    /// Returns `false` if the window does not exist or has no minimize
    /// affordance. A session on the window is cancelled.
    pub fn minimize_window(&mut self, id: WindowId) -> bool {
        match self.store.get(id) {
            Some(window) if window.can_minimize() => {
                self.cancel_session_for(id);
                self.store.minimize_window(id);
                true
            }
            _ => false,
        }
    }

    /// Un-minimize and bring to front
    pub fn restore_window(&mut self, id: WindowId, dock_rect: Option<Rect>) {
        self.store.restore_window(id, dock_rect);
    }

    /// Bring to front
    pub fn focus_window(&mut self, id: WindowId, origin_rect: Option<Rect>) {
        self.store.focus_window(id, origin_rect);
    }

    /// Icon click: restore a minimized window, focus a visible one
    ///
    /// `trigger_rect` becomes the dock anchor on restore and the origin
    /// anchor on focus.
    pub fn activate_window(&mut self, id: WindowId, trigger_rect: Option<Rect>) {
        match self.store.get(id) {
            Some(window) if window.minimized => self.store.restore_window(id, trigger_rect),
            Some(_) => self.store.focus_window(id, trigger_rect),
            None => {}
        }
    }

    /// Commit a floating position, keeping the window below the top strip
    pub fn move_window(&mut self, id: WindowId, x: f32, y: f32) {
        let y = self.viewport.clamp_top(y);
        self.store.move_window(id, x, y);
    }

    /// Commit a floating rect, floored at the minimum window size
    pub fn resize_window(&mut self, id: WindowId, rect: Rect) {
        let size = rect.size().at_least(self.config.min_window_size);
        let y = self.viewport.clamp_top(rect.y);
        self.store.resize_window(id, Rect::new(rect.x, y, size.width, size.height));
    }

    /// Flip maximized on a resizable window
    pub fn toggle_maximize(&mut self, id: WindowId) -> bool {
        match self.store.get(id) {
            Some(window) if window.can_resize() => {
                self.store.toggle_maximize(id);
                true
            }
            _ => false,
        }
    }

    /// Snap a resizable window into a tiling zone
    pub fn snap_window(&mut self, id: WindowId, zone: SnapZone) -> bool {
        match self.store.get(id) {
            Some(window) if window.can_resize() => {
                self.store.snap_window(id, zone);
                true
            }
            _ => false,
        }
    }

    /// Leave the snap zone
    pub fn unsnap_window(&mut self, id: WindowId) {
        self.store.unsnap_window(id);
    }

    /// Take the queued lifecycle events
    pub fn drain_events(&mut self) -> Vec<ShellEvent> {
        self.store.drain_events()
    }

    /// Handle a key press
    ///
    /// Escape closes the active window, except while a drag or resize is in
    /// progress. Returns whether the key was consumed.
    pub fn handle_key(&mut self, key: &str) -> bool {
        if key != "Escape" {
            return false;
        }
        if self.input.is_dragging() {
            trace!("escape ignored during session");
            return false;
        }
        match self.store.active_window_id() {
            Some(id) => {
                self.close_window(id);
                true
            }
            None => false,
        }
    }
}
