//! Window management core for a browser desktop shell
//!
//! This crate provides the state behind a desktop-like web page:
//! - Window registry (open, close, focus, z-order, minimize)
//! - Maximize and edge snapping into half and quarter tiles
//! - Title bar drag and eight-handle resize sessions
//! - Hit testing and pointer routing
//! - A serializable read model for the presentation layer
//!
//! ## Architecture
//!
//! - [`math`]: Core geometry types (`Vec2`, `Rect`, `Size`)
//! - [`window`]: Window data, open requests and hit regions
//! - [`snap`]: Pure snap-zone geometry and edge detection
//! - [`store`]: The window store state machine
//! - [`input`]: Drag and resize sessions
//!
//! The store keeps committed geometry only. While a drag or resize runs the
//! session owns the live frame; the store sees the result on release.
//! Maximized and snapped rects are never stored: they are derived from the
//! current [`Viewport`] whenever a window is drawn.
//!
//! ## Example
//!
//! ```rust
//! use deskshell_core::{DesktopShell, SnapZone};
//!
//! let mut shell = DesktopShell::new();
//! shell.init(1280.0, 800.0);
//!
//! let id = shell.launch_app("notes");
//! shell.snap_window(id, SnapZone::Left);
//!
//! let view = &shell.window_views()[0];
//! assert_eq!(view.rect.width, 640.0);
//! ```

pub mod math;
pub mod window;
pub mod snap;
pub mod store;
pub mod input;

mod apps;
mod config;
mod engine;
mod error;
mod viewport;

// WASM exports (only available with "wasm" feature)
#[cfg(feature = "wasm")]
mod wasm;
#[cfg(feature = "wasm")]
pub use wasm::*;

// Re-export core types for convenience
pub use math::{FrameStyle, Rect, Size, Vec2, FRAME_STYLE};
pub use window::{Capabilities, OpenRequest, PreviewData, ResizeEdge, Window, WindowId, WindowKind, WindowRegion};
pub use snap::{EdgeZone, SnapZone};
pub use store::{DocumentPreview, RedirectRegistry, RedirectRule, ShellEvent, WindowStore};
pub use input::{DragState, InputResult, InputRouter};

pub use apps::{AppProfile, AppRegistry, FALLBACK_WINDOW_SIZE};
pub use config::ShellConfig;
pub use engine::{DesktopShell, ShellSnapshot, WindowView};
pub use error::{ShellError, ShellResult};
pub use viewport::Viewport;
