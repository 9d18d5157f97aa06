//! Open requests and per-window capabilities

use serde::{Deserialize, Serialize};
use crate::math::{Rect, Size};

/// Interaction affordances a window is created with
///
/// Fixed-size apps (the games) switch these on; the interaction layer then
/// simply never offers the matching handles or buttons.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Capabilities {
    /// No minimize button
    pub disable_minimize: bool,
    /// No resize handles, no maximize, no drag-to-snap
    pub disable_resize: bool,
}

impl Capabilities {
    /// Capabilities of a fixed-size window
    pub const FIXED: Capabilities = Capabilities {
        disable_minimize: true,
        disable_resize: true,
    };
}

/// Read-only document shown in a preview window
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreviewData {
    /// Document location; preview windows are unique per source
    pub source: String,
    /// Title shown on the preview window
    pub title: String,
}

/// Request to open (or re-focus) an application window
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenRequest {
    /// Application identifier
    pub app_id: String,
    /// Window title
    pub title: String,
    /// Size to open at; shrunk if it does not fit the work area
    pub default_size: Size,
    /// Set for read-only document previews
    #[serde(default)]
    pub preview: Option<PreviewData>,
    /// Opaque payload handed to the app's content component
    #[serde(default)]
    pub initial_data: Option<String>,
    /// Desktop icon the open was triggered from
    #[serde(default)]
    pub origin_rect: Option<Rect>,
    /// Dock icon the open was triggered from
    #[serde(default)]
    pub dock_rect: Option<Rect>,
    #[serde(default)]
    pub capabilities: Capabilities,
}

impl OpenRequest {
    /// Create a request for an app with a title and size
    pub fn new(app_id: impl Into<String>, title: impl Into<String>, default_size: Size) -> Self {
        Self {
            app_id: app_id.into(),
            title: title.into(),
            default_size,
            ..Default::default()
        }
    }

    /// Anchor the open animation at a desktop icon
    pub fn with_origin_rect(mut self, rect: Rect) -> Self {
        self.origin_rect = Some(rect);
        self
    }

    /// Anchor the open animation at a dock icon
    pub fn with_dock_rect(mut self, rect: Rect) -> Self {
        self.dock_rect = Some(rect);
        self
    }

    pub fn with_capabilities(mut self, capabilities: Capabilities) -> Self {
        self.capabilities = capabilities;
        self
    }

    pub fn with_initial_data(mut self, data: impl Into<String>) -> Self {
        self.initial_data = Some(data.into());
        self
    }
}
