//! Window model
//!
//! The data a window carries, what an open request looks like, and the
//! regions of a window frame for hit testing.

#[allow(clippy::module_inception)]
mod window;
mod config;
mod region;

pub use window::{Window, WindowKind};
pub(crate) use window::{button_rect, title_bar_rect};
pub use config::{Capabilities, OpenRequest, PreviewData};
pub use region::{ResizeEdge, WindowRegion};
pub use hit_test::{hit_test, titlebar_buttons};

/// Unique window identifier
pub type WindowId = u64;
