//! Window store
//!
//! The authoritative registry of open windows: creation, z-order, geometry
//! commits and the maximize/snap/minimize state machine. Every operation
//! takes a window id and silently does nothing when no such window exists.

#[allow(clippy::module_inception)]
mod store;
mod placement;
mod redirect;
mod events;

pub use store::WindowStore;
pub use redirect::{DocumentPreview, RedirectRegistry, RedirectRule, PREVIEW_APP_ID};
pub use events::ShellEvent;
