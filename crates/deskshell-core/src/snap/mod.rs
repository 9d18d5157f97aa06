//! Edge snapping
//!
//! Pure geometry: which zone a cursor is pointing at, and which rectangle a
//! zone covers for a given viewport. Nothing here holds state; callers
//! recompute whenever the viewport changes.

mod zone;
mod geometry;

pub use zone::{EdgeZone, SnapZone};
pub use geometry::{compute_edge_zone_rect, compute_maximize_rect, compute_snap_rect, detect_edge_zone};
