//! Window store state machine

use tracing::{debug, trace};

use crate::config::ShellConfig;
use crate::math::Rect;
use crate::snap::{EdgeZone, SnapZone};
use crate::viewport::Viewport;
use crate::window::{OpenRequest, Window, WindowId, WindowKind};
use super::placement;
use super::{RedirectRegistry, RedirectRule, ShellEvent};

/// Registry of open windows, z-order and focus
///
/// A single counter hands out z values. Bringing a window forward assigns it
/// the next value, so the frontmost window always has the largest z and no
/// other window ever needs renumbering.
pub struct WindowStore {
    /// Windows in the order they were opened
    windows: Vec<Window>,
    /// Active (focused) window
    active: Option<WindowId>,
    /// Next window ID
    next_id: u64,
    /// Last z value handed out
    z_counter: u64,
    /// Windows opened so far, drives the cascade offset
    opened: u32,
    cascade_step: f32,
    cascade_wrap: u32,
    /// Zone the snap overlay should highlight while a drag is in progress
    drag_snap_preview: Option<EdgeZone>,
    redirects: RedirectRegistry,
    /// Lifecycle events not yet drained by the host
    events: Vec<ShellEvent>,
}

impl Default for WindowStore {
    fn default() -> Self {
        Self::new()
    }
}

impl WindowStore {
    /// Create a store with the default configuration
    pub fn new() -> Self {
        Self::with_config(&ShellConfig::default())
    }

    /// Create a store from a shell configuration
    pub fn with_config(config: &ShellConfig) -> Self {
        let mut redirects = RedirectRegistry::new();
        for rule in &config.document_previews {
            redirects.add(Box::new(rule.clone()));
        }

        Self {
            windows: Vec::new(),
            active: None,
            next_id: 1,
            z_counter: config.initial_z,
            opened: 0,
            cascade_step: config.cascade_step,
            cascade_wrap: config.cascade_wrap.max(1),
            drag_snap_preview: None,
            redirects,
            events: Vec::new(),
        }
    }

    /// Register an additional redirect rule
    pub fn add_redirect(&mut self, rule: Box<dyn RedirectRule>) {
        self.redirects.add(rule);
    }

    // =========================================================================
    // Lifecycle
    // =========================================================================

    /// Open a window, or bring the app's existing window back
    ///
    /// Returns the id of the window that ended up in front.
    pub fn open_window(&mut self, request: OpenRequest, viewport: &Viewport) -> WindowId {
        let request = match self.redirects.resolve(&request) {
            Some(redirected) => {
                debug!(from = %request.app_id, to = %redirected.app_id, "redirecting open request");
                redirected
            }
            None => request,
        };

        if let Some(id) = self.find_existing(&request) {
            self.reopen(id, &request);
            return id;
        }

        self.create(request, viewport)
    }

    /// Window that satisfies `request` without opening a new one
    fn find_existing(&self, request: &OpenRequest) -> Option<WindowId> {
        self.windows
            .iter()
            .find(|w| match &request.preview {
                Some(preview) => w.preview_source() == Some(preview.source.as_str()),
                None => !w.is_preview() && w.app_id == request.app_id,
            })
            .map(|w| w.id)
    }

    fn reopen(&mut self, id: WindowId, request: &OpenRequest) {
        if let Some(window) = self.get_mut(id) {
            window.minimized = false;
            if request.origin_rect.is_some() {
                window.origin_rect = request.origin_rect;
            }
            if request.dock_rect.is_some() {
                window.dock_rect = request.dock_rect;
            }
        }
        self.bring_to_front(id);
        debug!(window_id = id, app_id = %request.app_id, "existing window reopened");
    }

    fn create(&mut self, request: OpenRequest, viewport: &Viewport) -> WindowId {
        let id = self.next_id;
        self.next_id += 1;

        let size = placement::fit_size(request.default_size, viewport);
        let cascade_index = self.opened % self.cascade_wrap;
        self.opened = self.opened.wrapping_add(1);
        let position = placement::cascade_position(size, cascade_index, self.cascade_step, viewport);
        let rect = Rect::from_pos_size(position, size);

        let kind = match request.preview {
            Some(preview) => WindowKind::Preview(preview),
            None => WindowKind::Standard,
        };

        self.windows.push(Window {
            id,
            app_id: request.app_id.clone(),
            title: request.title,
            rect,
            saved: rect,
            z: 0,
            minimized: false,
            maximized: false,
            snap_zone: None,
            origin_rect: request.origin_rect,
            dock_rect: request.dock_rect,
            capabilities: request.capabilities,
            kind,
            initial_data: request.initial_data,
        });
        self.bring_to_front(id);

        debug!(window_id = id, app_id = %request.app_id, x = rect.x, y = rect.y, "window opened");
        self.events.push(ShellEvent::Opened {
            window_id: id,
            app_id: request.app_id,
        });
        id
    }

    /// Close a window
    ///
    /// If it was active, the remaining window with the highest z becomes
    /// active.
    pub fn close_window(&mut self, id: WindowId) {
        let index = match self.windows.iter().position(|w| w.id == id) {
            Some(index) => index,
            None => return,
        };
        let window = self.windows.remove(index);

        if self.active == Some(id) {
            self.active = self.windows.iter().max_by_key(|w| w.z).map(|w| w.id);
        }

        debug!(window_id = id, app_id = %window.app_id, active = ?self.active, "window closed");
        self.events.push(ShellEvent::Closed {
            window_id: id,
            app_id: window.app_id,
        });
    }

    /// Close whichever window is active
    pub fn close_active_window(&mut self) {
        if let Some(id) = self.active {
            self.close_window(id);
        }
    }

    // =========================================================================
    // Focus and visibility
    // =========================================================================

    /// Hide a window without unmounting it
    ///
    /// Nothing is promoted in its place: the desktop simply has no active
    /// window afterwards.
    pub fn minimize_window(&mut self, id: WindowId) {
        let window = match self.get_mut(id) {
            Some(window) => window,
            None => return,
        };
        window.minimized = true;

        if self.active == Some(id) {
            self.active = None;
        }
        debug!(window_id = id, "window minimized");
        self.events.push(ShellEvent::Minimized { window_id: id });
    }

    /// Un-minimize and bring to front
    pub fn restore_window(&mut self, id: WindowId, dock_rect: Option<Rect>) {
        let window = match self.get_mut(id) {
            Some(window) => window,
            None => return,
        };
        window.minimized = false;
        if dock_rect.is_some() {
            window.dock_rect = dock_rect;
        }

        self.bring_to_front(id);
        debug!(window_id = id, "window restored");
        self.events.push(ShellEvent::Restored { window_id: id });
    }

    /// Bring to front without touching minimized/maximized/snap state
    pub fn focus_window(&mut self, id: WindowId, origin_rect: Option<Rect>) {
        let window = match self.get_mut(id) {
            Some(window) => window,
            None => return,
        };
        if origin_rect.is_some() {
            window.origin_rect = origin_rect;
        }

        self.bring_to_front(id);
        trace!(window_id = id, z = self.z_counter, "window focused");
        self.events.push(ShellEvent::Focused { window_id: id });
    }

    /// Give a window the next z value and make it active
    fn bring_to_front(&mut self, id: WindowId) {
        let z = self.z_counter + 1;
        if let Some(window) = self.get_mut(id) {
            window.z = z;
            self.z_counter = z;
            self.active = Some(id);
        }
    }

    // =========================================================================
    // Geometry
    // =========================================================================

    /// Commit a new top-left corner
    ///
    /// Callers clamp. A committed position is floating geometry, so any
    /// maximize or snap is dropped.
    pub fn move_window(&mut self, id: WindowId, x: f32, y: f32) {
        if let Some(window) = self.get_mut(id) {
            window.rect.x = x;
            window.rect.y = y;
            window.maximized = false;
            window.snap_zone = None;
        }
    }

    /// Commit a new floating rectangle
    ///
    /// Callers clamp. Like [`move_window`](Self::move_window) this leaves the
    /// window floating.
    pub fn resize_window(&mut self, id: WindowId, rect: Rect) {
        if let Some(window) = self.get_mut(id) {
            window.rect = rect;
            window.maximized = false;
            window.snap_zone = None;
        }
    }

    /// Flip maximized
    ///
    /// Entering maximize from a floating state saves the floating rect.
    /// Leaving only clears the flag: the floating rect was never changed.
    pub fn toggle_maximize(&mut self, id: WindowId) {
        let window = match self.get_mut(id) {
            Some(window) => window,
            None => return,
        };

        let maximize = !window.maximized;
        if maximize && window.snap_zone.is_none() {
            window.save_floating();
        }
        window.maximized = maximize;
        window.snap_zone = None;
        window.minimized = false;

        self.bring_to_front(id);
        if maximize {
            debug!(window_id = id, "window maximized");
            self.events.push(ShellEvent::Maximized { window_id: id });
        } else {
            debug!(window_id = id, "window unmaximized");
            self.events.push(ShellEvent::Unmaximized { window_id: id });
        }
    }

    /// Snap into a tiling zone
    ///
    /// Only the first snap out of a floating state saves the floating rect;
    /// re-snapping to another zone keeps pointing at the pre-snap geometry.
    pub fn snap_window(&mut self, id: WindowId, zone: SnapZone) {
        let window = match self.get_mut(id) {
            Some(window) => window,
            None => return,
        };

        if window.is_floating() {
            window.save_floating();
        }
        window.snap_zone = Some(zone);
        window.maximized = false;
        window.minimized = false;

        self.bring_to_front(id);
        debug!(window_id = id, zone = zone.as_str(), "window snapped");
        self.events.push(ShellEvent::Snapped { window_id: id, zone });
    }

    /// Leave the snap zone and go back to the saved floating rect
    pub fn unsnap_window(&mut self, id: WindowId) {
        let window = match self.get_mut(id) {
            Some(window) => window,
            None => return,
        };

        let was_snapped = window.snap_zone.take().is_some();
        if was_snapped {
            window.rect = window.saved;
        }

        self.bring_to_front(id);
        if was_snapped {
            debug!(window_id = id, "window unsnapped");
            self.events.push(ShellEvent::Unsnapped { window_id: id });
        }
    }

    /// Set the zone the snap overlay highlights
    pub fn set_drag_snap_preview(&mut self, zone: Option<EdgeZone>) {
        if self.drag_snap_preview != zone {
            trace!(zone = zone.map(|z| z.as_str()), "snap preview changed");
        }
        self.drag_snap_preview = zone;
    }

    // =========================================================================
    // Read model
    // =========================================================================

    /// Get a window by ID
    pub fn get(&self, id: WindowId) -> Option<&Window> {
        self.windows.iter().find(|w| w.id == id)
    }

    fn get_mut(&mut self, id: WindowId) -> Option<&mut Window> {
        self.windows.iter_mut().find(|w| w.id == id)
    }

    /// All windows in open order
    pub fn windows(&self) -> &[Window] {
        &self.windows
    }

    /// Get windows sorted by z-order (back to front)
    pub fn windows_by_z(&self) -> Vec<&Window> {
        let mut windows: Vec<&Window> = self.windows.iter().collect();
        windows.sort_by_key(|w| w.z);
        windows
    }

    /// Non-preview window of an app
    pub fn find_by_app(&self, app_id: &str) -> Option<&Window> {
        self.windows.iter().find(|w| !w.is_preview() && w.app_id == app_id)
    }

    /// App ids with a live window, for dock running indicators
    pub fn running_app_ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.windows.iter().map(|w| w.app_id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        ids
    }

    pub fn active_window_id(&self) -> Option<WindowId> {
        self.active
    }

    pub fn active_window(&self) -> Option<&Window> {
        self.active.and_then(|id| self.get(id))
    }

    pub fn drag_snap_preview(&self) -> Option<EdgeZone> {
        self.drag_snap_preview
    }

    /// Last z value handed out
    pub fn z_counter(&self) -> u64 {
        self.z_counter
    }

    /// Get the number of windows
    pub fn count(&self) -> usize {
        self.windows.len()
    }

    /// Take the queued lifecycle events
    pub fn drain_events(&mut self) -> Vec<ShellEvent> {
        std::mem::take(&mut self.events)
    }
}
