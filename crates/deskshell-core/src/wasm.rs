//! WASM exports for the desktop shell
//!
//! This module provides wasm-bindgen exports for the DesktopShell,
//! allowing the page to drive window management directly.

use wasm_bindgen::prelude::*;

use crate::engine::DesktopShell;
use crate::error::ShellError;
use crate::input::InputResult;
use crate::math::Rect;
use crate::snap::SnapZone;
use crate::window::OpenRequest;

impl From<ShellError> for JsValue {
    fn from(err: ShellError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

fn result_json(result: &InputResult) -> String {
    serde_json::to_string(result).unwrap_or_else(|_| r#"{"type":"unhandled"}"#.to_string())
}

/// Shell controller for WASM - wraps DesktopShell with JS-friendly API
#[wasm_bindgen]
pub struct ShellController {
    shell: DesktopShell,
}

impl Default for ShellController {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl ShellController {
    /// Create a controller with the default configuration
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        console_error_panic_hook::set_once();
        Self {
            shell: DesktopShell::new(),
        }
    }

    /// Create a controller from a JSON configuration
    #[wasm_bindgen]
    pub fn with_config(config_json: &str) -> Result<ShellController, JsValue> {
        console_error_panic_hook::set_once();
        let shell = DesktopShell::from_json(config_json).map_err(|err| {
            web_sys::console::error_1(&JsValue::from_str(&format!("invalid shell config: {}", err)));
            JsValue::from(err)
        })?;
        Ok(Self { shell })
    }

    // =========================================================================
    // Initialization
    // =========================================================================

    /// Initialize the shell with screen dimensions
    #[wasm_bindgen]
    pub fn init(&mut self, width: f32, height: f32) {
        self.shell.init(width, height);
    }

    /// Initialize from the browser window's inner size
    #[wasm_bindgen]
    pub fn init_from_window(&mut self) {
        let (width, height) = match web_sys::window() {
            Some(window) => (
                window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(1280.0),
                window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(800.0),
            ),
            None => (1280.0, 800.0),
        };
        self.shell.init(width as f32, height as f32);
    }

    /// Resize the viewport
    #[wasm_bindgen]
    pub fn resize(&mut self, width: f32, height: f32) {
        self.shell.resize(width, height);
    }

    // =========================================================================
    // Windows
    // =========================================================================

    /// Open an app from its launch profile
    #[wasm_bindgen]
    pub fn launch_app(&mut self, app_id: &str) -> u64 {
        self.shell.launch_app(app_id)
    }

    /// Open an app from a desktop icon at (x, y, w, h)
    #[wasm_bindgen]
    pub fn launch_app_from_icon(&mut self, app_id: &str, x: f32, y: f32, w: f32, h: f32) -> u64 {
        self.shell.launch_app_from(app_id, Some(Rect::new(x, y, w, h)), None)
    }

    /// Open an app from a dock icon at (x, y, w, h)
    #[wasm_bindgen]
    pub fn launch_app_from_dock(&mut self, app_id: &str, x: f32, y: f32, w: f32, h: f32) -> u64 {
        self.shell.launch_app_from(app_id, None, Some(Rect::new(x, y, w, h)))
    }

    /// Open a window from a JSON open request
    #[wasm_bindgen]
    pub fn open_window(&mut self, request_json: &str) -> Result<u64, JsValue> {
        let request: OpenRequest = serde_json::from_str(request_json).map_err(ShellError::from)?;
        Ok(self.shell.open_window(request))
    }

    /// Close a window
    #[wasm_bindgen]
    pub fn close_window(&mut self, id: u64) {
        self.shell.close_window(id);
    }

    /// Close the active window
    #[wasm_bindgen]
    pub fn close_active_window(&mut self) {
        self.shell.close_active_window();
    }

    /// Minimize a window
    #[wasm_bindgen]
    pub fn minimize_window(&mut self, id: u64) -> bool {
        self.shell.minimize_window(id)
    }

    /// Restore a minimized window
    #[wasm_bindgen]
    pub fn restore_window(&mut self, id: u64) {
        self.shell.restore_window(id, None);
    }

    /// Restore a minimized window towards its dock icon at (x, y, w, h)
    #[wasm_bindgen]
    pub fn restore_window_from(&mut self, id: u64, x: f32, y: f32, w: f32, h: f32) {
        self.shell.restore_window(id, Some(Rect::new(x, y, w, h)));
    }

    /// Restore or focus a window from an icon
    #[wasm_bindgen]
    pub fn activate_window(&mut self, id: u64, x: f32, y: f32, w: f32, h: f32) {
        self.shell.activate_window(id, Some(Rect::new(x, y, w, h)));
    }

    /// Focus a window
    #[wasm_bindgen]
    pub fn focus_window(&mut self, id: u64) {
        self.shell.focus_window(id, None);
    }

    /// Focus a window from an icon at (x, y, w, h)
    #[wasm_bindgen]
    pub fn focus_window_from(&mut self, id: u64, x: f32, y: f32, w: f32, h: f32) {
        self.shell.focus_window(id, Some(Rect::new(x, y, w, h)));
    }

    /// Move a window
    #[wasm_bindgen]
    pub fn move_window(&mut self, id: u64, x: f32, y: f32) {
        self.shell.move_window(id, x, y);
    }

    /// Resize a window
    #[wasm_bindgen]
    pub fn resize_window(&mut self, id: u64, x: f32, y: f32, w: f32, h: f32) {
        self.shell.resize_window(id, Rect::new(x, y, w, h));
    }

    /// Toggle maximize
    #[wasm_bindgen]
    pub fn toggle_maximize(&mut self, id: u64) -> bool {
        self.shell.toggle_maximize(id)
    }

    /// Snap a window into a named zone ("left", "top-right", ...)
    #[wasm_bindgen]
    pub fn snap_window(&mut self, id: u64, zone: &str) -> Result<bool, JsValue> {
        let zone: SnapZone = zone.parse()?;
        Ok(self.shell.snap_window(id, zone))
    }

    /// Leave the snap zone
    #[wasm_bindgen]
    pub fn unsnap_window(&mut self, id: u64) {
        self.shell.unsnap_window(id);
    }

    // =========================================================================
    // Input
    // =========================================================================

    /// Handle pointer down, returns an InputResult as JSON
    #[wasm_bindgen]
    pub fn handle_pointer_down(&mut self, x: f32, y: f32, button: u8) -> String {
        result_json(&self.shell.handle_pointer_down(x, y, button))
    }

    /// Handle pointer move, returns an InputResult as JSON
    #[wasm_bindgen]
    pub fn handle_pointer_move(&mut self, x: f32, y: f32) -> String {
        result_json(&self.shell.handle_pointer_move(x, y))
    }

    /// Handle pointer up, returns an InputResult as JSON
    #[wasm_bindgen]
    pub fn handle_pointer_up(&mut self, x: f32, y: f32) -> String {
        result_json(&self.shell.handle_pointer_up(x, y))
    }

    /// Start a move drag from a titlebar component
    #[wasm_bindgen]
    pub fn start_move_drag(&mut self, id: u64, x: f32, y: f32) -> bool {
        self.shell.begin_move(id, x, y).is_handled()
    }

    /// Start a resize drag from a handle component ("n", "se", ...)
    #[wasm_bindgen]
    pub fn start_resize_drag(&mut self, id: u64, direction: &str, x: f32, y: f32) -> Result<bool, JsValue> {
        Ok(self.shell.begin_resize_named(id, direction, x, y)?.is_handled())
    }

    /// Handle a key press; returns whether it was consumed
    #[wasm_bindgen]
    pub fn handle_key(&mut self, key: &str) -> bool {
        self.shell.handle_key(key)
    }

    /// CSS cursor for the point
    #[wasm_bindgen]
    pub fn cursor_at(&self, x: f32, y: f32) -> String {
        self.shell.cursor_at(x, y).to_string()
    }

    // =========================================================================
    // Read model
    // =========================================================================

    /// Full read model as JSON
    #[wasm_bindgen]
    pub fn get_snapshot_json(&self) -> String {
        self.shell.snapshot_json().unwrap_or_else(|_| "{}".to_string())
    }

    /// Window views as JSON, back to front
    #[wasm_bindgen]
    pub fn get_windows_json(&self) -> String {
        serde_json::to_string(&self.shell.window_views()).unwrap_or_else(|_| "[]".to_string())
    }

    /// Active window id
    #[wasm_bindgen]
    pub fn get_active_window(&self) -> Option<u64> {
        self.shell.store().active_window_id()
    }

    /// Zone the snap overlay highlights
    #[wasm_bindgen]
    pub fn get_snap_preview(&self) -> Option<String> {
        self.shell
            .store()
            .drag_snap_preview()
            .map(|zone| zone.as_str().to_string())
    }

    /// App ids with a live window
    #[wasm_bindgen]
    pub fn get_running_apps(&self) -> js_sys::Array {
        self.shell
            .running_app_ids()
            .into_iter()
            .map(JsValue::from)
            .collect()
    }

    /// Lifecycle events since the last call, as JSON
    #[wasm_bindgen]
    pub fn drain_events_json(&mut self) -> String {
        let events = self.shell.drain_events();
        serde_json::to_string(&events).unwrap_or_else(|_| "[]".to_string())
    }
}
