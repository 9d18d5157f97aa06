//! Snap target rectangles and edge-proximity detection

use crate::math::Rect;
use super::{EdgeZone, SnapZone};

/// Rectangle a window occupies when snapped into `zone`
///
/// Halves span the full height below the reserved top strip; quarters split
/// that area in both directions. Odd pixel counts go to the right/bottom tile
/// so the tiles always cover the work area exactly.
pub fn compute_snap_rect(
    zone: SnapZone,
    viewport_w: f32,
    viewport_h: f32,
    top_reserved: f32,
) -> Rect {
    let area_h = (viewport_h - top_reserved).max(0.0);
    let half_w = (viewport_w / 2.0).floor();
    let half_h = (area_h / 2.0).floor();
    let right_w = viewport_w - half_w;
    let bottom_h = area_h - half_h;

    match zone {
        SnapZone::Left => Rect::new(0.0, top_reserved, half_w, area_h),
        SnapZone::Right => Rect::new(half_w, top_reserved, right_w, area_h),
        SnapZone::TopLeft => Rect::new(0.0, top_reserved, half_w, half_h),
        SnapZone::TopRight => Rect::new(half_w, top_reserved, right_w, half_h),
        SnapZone::BottomLeft => Rect::new(0.0, top_reserved + half_h, half_w, bottom_h),
        SnapZone::BottomRight => Rect::new(half_w, top_reserved + half_h, right_w, bottom_h),
    }
}

/// Rectangle a maximized window occupies: everything below the top strip
pub fn compute_maximize_rect(viewport_w: f32, viewport_h: f32, top_reserved: f32) -> Rect {
    Rect::new(0.0, top_reserved, viewport_w, (viewport_h - top_reserved).max(0.0))
}

/// Rectangle the snap preview overlay highlights for a detected zone
pub fn compute_edge_zone_rect(
    zone: EdgeZone,
    viewport_w: f32,
    viewport_h: f32,
    top_reserved: f32,
) -> Rect {
    match zone {
        EdgeZone::Tile(tile) => compute_snap_rect(tile, viewport_w, viewport_h, top_reserved),
        EdgeZone::Maximize => compute_maximize_rect(viewport_w, viewport_h, top_reserved),
    }
}

/// Detect which edge zone the cursor is in, if any
///
/// Corners win over single edges. The top edge alone reports
/// [`EdgeZone::Maximize`]; the bottom edge alone reports nothing.
pub fn detect_edge_zone(
    cursor_x: f32,
    cursor_y: f32,
    viewport_w: f32,
    viewport_h: f32,
    edge_threshold: f32,
) -> Option<EdgeZone> {
    let near_left = cursor_x <= edge_threshold;
    let near_right = cursor_x >= viewport_w - edge_threshold;
    let near_top = cursor_y <= edge_threshold;
    let near_bottom = cursor_y >= viewport_h - edge_threshold;

    let tile = match (near_left, near_right, near_top, near_bottom) {
        (true, _, true, _) => SnapZone::TopLeft,
        (_, true, true, _) => SnapZone::TopRight,
        (true, _, _, true) => SnapZone::BottomLeft,
        (_, true, _, true) => SnapZone::BottomRight,
        (true, _, _, _) => SnapZone::Left,
        (_, true, _, _) => SnapZone::Right,
        (_, _, true, _) => return Some(EdgeZone::Maximize),
        _ => return None,
    };

    Some(EdgeZone::Tile(tile))
}

#[cfg(test)]
mod tests {
    use super::*;

    const W: f32 = 1280.0;
    const H: f32 = 800.0;
    const TOP: f32 = 32.0;

    #[test]
    fn test_snap_left_half() {
        let r = compute_snap_rect(SnapZone::Left, W, H, TOP);
        assert_eq!(r, Rect::new(0.0, 32.0, 640.0, 768.0));
    }

    #[test]
    fn test_snap_right_half() {
        let r = compute_snap_rect(SnapZone::Right, W, H, TOP);
        assert_eq!(r, Rect::new(640.0, 32.0, 640.0, 768.0));
    }

    #[test]
    fn test_snap_quarters() {
        assert_eq!(
            compute_snap_rect(SnapZone::TopLeft, W, H, TOP),
            Rect::new(0.0, 32.0, 640.0, 384.0)
        );
        assert_eq!(
            compute_snap_rect(SnapZone::TopRight, W, H, TOP),
            Rect::new(640.0, 32.0, 640.0, 384.0)
        );
        assert_eq!(
            compute_snap_rect(SnapZone::BottomLeft, W, H, TOP),
            Rect::new(0.0, 416.0, 640.0, 384.0)
        );
        assert_eq!(
            compute_snap_rect(SnapZone::BottomRight, W, H, TOP),
            Rect::new(640.0, 416.0, 640.0, 384.0)
        );
    }

    #[test]
    fn test_snap_odd_viewport_covers_area() {
        let left = compute_snap_rect(SnapZone::Left, 1281.0, 801.0, TOP);
        let right = compute_snap_rect(SnapZone::Right, 1281.0, 801.0, TOP);
        assert!((left.width + right.width - 1281.0).abs() < 0.001);
        assert!((right.x - left.right()).abs() < 0.001);

        let top = compute_snap_rect(SnapZone::TopLeft, 1281.0, 801.0, TOP);
        let bottom = compute_snap_rect(SnapZone::BottomLeft, 1281.0, 801.0, TOP);
        assert!((bottom.bottom() - 801.0).abs() < 0.001);
        assert!((bottom.y - top.bottom()).abs() < 0.001);
    }

    #[test]
    fn test_snap_rect_follows_viewport() {
        let small = compute_snap_rect(SnapZone::Right, 1000.0, 600.0, TOP);
        let large = compute_snap_rect(SnapZone::Right, 2000.0, 1200.0, TOP);
        assert!((small.x - 500.0).abs() < 0.001);
        assert!((large.x - 1000.0).abs() < 0.001);
    }

    #[test]
    fn test_maximize_rect() {
        let r = compute_maximize_rect(W, H, TOP);
        assert_eq!(r, Rect::new(0.0, 32.0, 1280.0, 768.0));
    }

    #[test]
    fn test_detect_edges() {
        assert_eq!(detect_edge_zone(2.0, 400.0, W, H, 12.0), Some(EdgeZone::Tile(SnapZone::Left)));
        assert_eq!(detect_edge_zone(1279.0, 400.0, W, H, 12.0), Some(EdgeZone::Tile(SnapZone::Right)));
        assert_eq!(detect_edge_zone(600.0, 3.0, W, H, 12.0), Some(EdgeZone::Maximize));
        assert_eq!(detect_edge_zone(600.0, 799.0, W, H, 12.0), None);
        assert_eq!(detect_edge_zone(600.0, 400.0, W, H, 12.0), None);
    }

    #[test]
    fn test_detect_corners_take_priority() {
        assert_eq!(detect_edge_zone(0.0, 0.0, W, H, 12.0), Some(EdgeZone::Tile(SnapZone::TopLeft)));
        assert_eq!(detect_edge_zone(1280.0, 5.0, W, H, 12.0), Some(EdgeZone::Tile(SnapZone::TopRight)));
        assert_eq!(detect_edge_zone(4.0, 795.0, W, H, 12.0), Some(EdgeZone::Tile(SnapZone::BottomLeft)));
        assert_eq!(detect_edge_zone(1275.0, 800.0, W, H, 12.0), Some(EdgeZone::Tile(SnapZone::BottomRight)));
    }

    #[test]
    fn test_edge_zone_rect() {
        assert_eq!(
            compute_edge_zone_rect(EdgeZone::Maximize, W, H, TOP),
            compute_maximize_rect(W, H, TOP)
        );
        assert_eq!(
            compute_edge_zone_rect(EdgeZone::Tile(SnapZone::Left), W, H, TOP),
            compute_snap_rect(SnapZone::Left, W, H, TOP)
        );
    }
}
