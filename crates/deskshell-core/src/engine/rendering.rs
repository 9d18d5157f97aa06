//! Read model for the presentation layer

use serde::Serialize;

use crate::error::ShellResult;
use crate::math::Rect;
use crate::snap::{EdgeZone, SnapZone};
use crate::window::{titlebar_buttons, Capabilities, PreviewData, Window, WindowId, WindowKind, WindowRegion};
use super::DesktopShell;

/// Window as the presentation layer draws it
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WindowView {
    pub id: WindowId,
    pub app_id: String,
    pub title: String,
    /// Document shown by a preview window
    pub preview: Option<PreviewData>,
    /// Where the window is drawn: live session frame, tile, or floating rect
    pub rect: Rect,
    pub z: u64,
    pub focused: bool,
    pub minimized: bool,
    pub maximized: bool,
    pub snap_zone: Option<SnapZone>,
    /// A drag or resize session is moving this window
    pub dragging: bool,
    pub origin_rect: Option<Rect>,
    pub dock_rect: Option<Rect>,
    pub capabilities: Capabilities,
    /// Titlebar buttons, right to left
    pub buttons: Vec<WindowRegion>,
    pub initial_data: Option<String>,
}

/// Everything the presentation layer needs for one frame
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShellSnapshot {
    /// Windows back to front
    pub windows: Vec<WindowView>,
    pub active_window_id: Option<WindowId>,
    /// Zone the snap overlay highlights
    pub drag_snap_preview: Option<EdgeZone>,
    /// Rect of the highlighted zone
    pub snap_preview_rect: Option<Rect>,
    /// App ids with a live window (dock indicators)
    pub running_apps: Vec<String>,
}

impl DesktopShell {
    /// Views of all windows, back to front
    ///
    /// Minimized windows are included so their content stays mounted.
    pub fn window_views(&self) -> Vec<WindowView> {
        let active = self.store.active_window_id();
        self.store
            .windows_by_z()
            .into_iter()
            .map(|w| self.window_view(w, active))
            .collect()
    }

    fn window_view(&self, w: &Window, active: Option<WindowId>) -> WindowView {
        let session = self.input.drag_state().filter(|s| s.window_id() == w.id);
        let rect = match session {
            Some(session) => session.frame(),
            None => self.viewport.rendered_rect(w),
        };

        WindowView {
            id: w.id,
            app_id: w.app_id.clone(),
            title: w.title.clone(),
            preview: match &w.kind {
                WindowKind::Preview(preview) => Some(preview.clone()),
                WindowKind::Standard => None,
            },
            rect,
            z: w.z,
            focused: active == Some(w.id),
            minimized: w.minimized,
            maximized: w.maximized,
            snap_zone: w.snap_zone,
            dragging: session.is_some(),
            origin_rect: w.origin_rect,
            dock_rect: w.dock_rect,
            capabilities: w.capabilities,
            buttons: titlebar_buttons(w),
            initial_data: w.initial_data.clone(),
        }
    }

    /// Full read model
    pub fn snapshot(&self) -> ShellSnapshot {
        let preview = self.store.drag_snap_preview();
        ShellSnapshot {
            windows: self.window_views(),
            active_window_id: self.store.active_window_id(),
            drag_snap_preview: preview,
            snap_preview_rect: preview.map(|zone| self.viewport.edge_zone_rect(zone)),
            running_apps: self.running_app_ids(),
        }
    }

    /// Full read model as JSON
    pub fn snapshot_json(&self) -> ShellResult<String> {
        Ok(serde_json::to_string(&self.snapshot())?)
    }

    /// App ids with a live window
    pub fn running_app_ids(&self) -> Vec<String> {
        self.store.running_app_ids().into_iter().map(str::to_string).collect()
    }

    /// Visible windows for the overview grid, back to front
    pub fn overview_windows(&self) -> Vec<WindowView> {
        self.window_views().into_iter().filter(|w| !w.minimized).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shell() -> DesktopShell {
        let mut shell = DesktopShell::new();
        shell.init(1280.0, 800.0);
        shell
    }

    #[test]
    fn test_views_ordered_back_to_front() {
        let mut shell = shell();
        let a = shell.launch_app("notes");
        let b = shell.launch_app("terminal");
        shell.focus_window(a, None);

        let views = shell.window_views();
        assert_eq!(views.iter().map(|v| v.id).collect::<Vec<_>>(), vec![b, a]);
        assert!(views[1].focused);
        assert!(!views[0].focused);
    }

    #[test]
    fn test_view_uses_rendered_rect() {
        let mut shell = shell();
        let id = shell.launch_app("notes");
        shell.snap_window(id, SnapZone::Right);

        let view = &shell.window_views()[0];
        assert_eq!(view.rect, Rect::new(640.0, 32.0, 640.0, 768.0));
        assert_eq!(view.snap_zone, Some(SnapZone::Right));
    }

    #[test]
    fn test_view_follows_live_frame() {
        let mut shell = shell();
        let id = shell.launch_app("notes");
        shell.begin_move(id, 400.0, 180.0);
        shell.handle_pointer_move(450.0, 200.0);

        let view = &shell.window_views()[0];
        assert!(view.dragging);
        assert_eq!(view.rect, Rect::new(410.0, 186.0, 560.0, 500.0));
    }

    #[test]
    fn test_viewport_resize_relays_tiled_windows() {
        let mut shell = shell();
        let snapped = shell.launch_app("notes");
        let floating = shell.launch_app("terminal");
        let floating_rect = shell.store().get(floating).unwrap().rect;
        shell.snap_window(snapped, SnapZone::BottomLeft);

        shell.resize(1000.0, 600.0);

        let views = shell.window_views();
        let snapped_view = views.iter().find(|v| v.id == snapped).unwrap();
        let floating_view = views.iter().find(|v| v.id == floating).unwrap();
        assert_eq!(snapped_view.rect, Rect::new(0.0, 316.0, 500.0, 284.0));
        assert_eq!(floating_view.rect, floating_rect);
    }

    #[test]
    fn test_snapshot_preview_rect() {
        let mut shell = shell();
        let id = shell.launch_app("notes");
        shell.begin_move(id, 400.0, 180.0);
        shell.handle_pointer_move(1278.0, 400.0);

        let snapshot = shell.snapshot();
        assert_eq!(snapshot.drag_snap_preview, Some(EdgeZone::Tile(SnapZone::Right)));
        assert_eq!(snapshot.snap_preview_rect, Some(Rect::new(640.0, 32.0, 640.0, 768.0)));
        assert_eq!(snapshot.active_window_id, Some(id));
    }

    #[test]
    fn test_snapshot_json_shape() {
        let mut shell = shell();
        let id = shell.launch_app("resume");
        shell.launch_app("snake");

        let json: serde_json::Value = serde_json::from_str(&shell.snapshot_json().unwrap()).unwrap();
        assert_eq!(json["windows"].as_array().unwrap().len(), 2);

        let preview = &json["windows"][0];
        assert_eq!(preview["id"], id);
        assert_eq!(preview["preview"]["source"], "/documents/resume.pdf");
        assert_eq!(preview["title"], "Resume.pdf");
        assert_eq!(preview["appId"], "preview");

        let game = &json["windows"][1];
        assert!(game["preview"].is_null());
        assert_eq!(game["capabilities"]["disableResize"], true);
        assert_eq!(game["buttons"].as_array().unwrap().len(), 1);
        assert!(json["dragSnapPreview"].is_null());
        assert_eq!(json["runningApps"], serde_json::json!(["preview", "snake"]));
    }

    #[test]
    fn test_overview_skips_minimized() {
        let mut shell = shell();
        let a = shell.launch_app("notes");
        let b = shell.launch_app("files");
        shell.minimize_window(a);

        assert_eq!(shell.window_views().len(), 2);
        let overview = shell.overview_windows();
        assert_eq!(overview.len(), 1);
        assert_eq!(overview[0].id, b);
    }
}
