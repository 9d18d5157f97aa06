//! Initial placement of new windows

use crate::math::{Rect, Size, Vec2};
use crate::viewport::Viewport;

/// Shrink a requested size so it fits the work area
pub(crate) fn fit_size(size: Size, viewport: &Viewport) -> Size {
    size.at_most(viewport.work_area().size())
}

/// Centered position shifted diagonally by `index` cascade steps
///
/// The result is clamped so the whole window stays inside the work area.
pub(crate) fn cascade_position(size: Size, index: u32, step: f32, viewport: &Viewport) -> Vec2 {
    let area = viewport.work_area();
    let offset = index as f32 * step;
    let centered = Vec2::new(
        area.x + (area.width - size.width) / 2.0 + offset,
        area.y + (area.height - size.height) / 2.0 + offset,
    );
    clamp_into(Rect::from_pos_size(centered, size), area).position()
}

/// Move `rect` (not resize) so it lies inside `area` where possible
pub(crate) fn clamp_into(rect: Rect, area: Rect) -> Rect {
    let x = rect.x.min(area.right() - rect.width).max(area.x);
    let y = rect.y.min(area.bottom() - rect.height).max(area.y);
    rect.with_position(Vec2::new(x, y))
}
