//! Window lifecycle events
//!
//! Queued by the store and drained by the host, which turns them into sound
//! effects and toasts. The store never waits on them.

use serde::Serialize;
use crate::snap::SnapZone;
use crate::window::WindowId;

/// Something happened to a window
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ShellEvent {
    #[serde(rename_all = "camelCase")]
    Opened { window_id: WindowId, app_id: String },
    #[serde(rename_all = "camelCase")]
    Focused { window_id: WindowId },
    #[serde(rename_all = "camelCase")]
    Closed { window_id: WindowId, app_id: String },
    #[serde(rename_all = "camelCase")]
    Minimized { window_id: WindowId },
    #[serde(rename_all = "camelCase")]
    Restored { window_id: WindowId },
    #[serde(rename_all = "camelCase")]
    Maximized { window_id: WindowId },
    #[serde(rename_all = "camelCase")]
    Unmaximized { window_id: WindowId },
    #[serde(rename_all = "camelCase")]
    Snapped { window_id: WindowId, zone: SnapZone },
    #[serde(rename_all = "camelCase")]
    Unsnapped { window_id: WindowId },
}
