//! Core geometry types for the desktop shell
//!
//! All coordinates are viewport pixels with the origin at the top-left
//! corner of the page.

mod vec2;
mod rect;
mod size;
mod style;

pub use vec2::Vec2;
pub use rect::Rect;
pub use size::Size;
pub use style::{FrameStyle, FRAME_STYLE};
