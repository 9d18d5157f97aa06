//! Input routing module
//!
//! Pointer sessions for moving and resizing windows. A session owns the live
//! geometry while it runs; the store only sees the result on release.

mod router;
mod drag;
mod resize;
mod result;

pub use router::InputRouter;
pub use drag::{DragState, MoveSession, PopOut};
pub use resize::{calculate_resize, ResizeSession};
pub use result::InputResult;
