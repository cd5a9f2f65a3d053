//! Placing local gear geometry into a scene.
//!
//! Scene coordinates follow the screen: origin top-left, y down. The canvas
//! has y up, so conversion happens only at draw time.

use gearwork_core::{GearProfile, Point};
use ratatui::layout::Rect;

/// Rotate every profile point by `rotation` degrees about the gear's own
/// origin, then move it to `center`.
pub fn place_profile(profile: &GearProfile, rotation: f64, center: Point) -> Vec<Point> {
    profile
        .points
        .iter()
        .map(|p| p.rotated(rotation).translated(center.x, center.y))
        .collect()
}

/// Tip of a hand of `length` at `angle` degrees clockwise from 12 o'clock.
pub fn hand_tip(center: Point, length: f64, angle: f64) -> Point {
    Point::new(0.0, -length)
        .rotated(angle)
        .translated(center.x, center.y)
}

/// Flip a scene point into canvas coordinates for a viewport of `height`.
pub(crate) fn to_canvas(p: Point, height: f64) -> (f64, f64) {
    (p.x, height - p.y)
}

/// Largest centered sub-rect of `area` whose braille dot grid has the
/// width/height ratio `aspect`.
///
/// A terminal cell holds 2x4 braille dots and is about twice as tall as it
/// is wide, so one dot is roughly square.
pub fn fit_aspect(area: Rect, aspect: f64) -> Rect {
    if area.width == 0 || area.height == 0 || !(aspect > 0.0) {
        return area;
    }
    let dots_w = f64::from(area.width) * 2.0;
    let dots_h = f64::from(area.height) * 4.0;

    let (width, height) = if dots_w / dots_h > aspect {
        let w = (dots_h * aspect / 2.0).round().max(1.0) as u16;
        (w.min(area.width), area.height)
    } else {
        let h = (dots_w / aspect / 4.0).round().max(1.0) as u16;
        (area.width, h.min(area.height))
    };

    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use gearwork_core::tooth_profile;

    use super::*;

    const EPS: f64 = 1e-9;

    fn assert_close(p: Point, x: f64, y: f64) {
        assert!((p.x - x).abs() < EPS && (p.y - y).abs() < EPS, "{p:?} != ({x}, {y})");
    }

    #[test]
    fn test_place_profile_rotates_then_translates() {
        let profile = tooth_profile(4, 10.0).unwrap();
        let placed = place_profile(&profile, 90.0, Point::new(100.0, 50.0));
        assert_eq!(placed.len(), profile.points.len());
        // First root vertex (8.5, 0) turns to (0, 8.5) before the move
        assert_close(placed[0], 100.0, 58.5);
        for (local, world) in profile.points.iter().zip(&placed) {
            let back = Point::new(world.x - 100.0, world.y - 50.0);
            assert!((back.radius() - local.radius()).abs() < EPS);
        }
    }

    #[test]
    fn test_rotation_is_modulo_360() {
        let profile = tooth_profile(12, 30.0).unwrap();
        let center = Point::new(160.0, 160.0);
        let a = place_profile(&profile, 15.0, center);
        let b = place_profile(&profile, 375.0 + 720.0, center);
        for (p, q) in a.iter().zip(&b) {
            assert!((p.x - q.x).abs() < 1e-9 && (p.y - q.y).abs() < 1e-9);
        }
    }

    #[test]
    fn test_hand_tip_clock_positions() {
        let c = Point::new(160.0, 160.0);
        assert_close(hand_tip(c, 100.0, 0.0), 160.0, 60.0);
        assert_close(hand_tip(c, 100.0, 90.0), 260.0, 160.0);
        assert_close(hand_tip(c, 100.0, 180.0), 160.0, 260.0);
        assert_close(hand_tip(c, 100.0, 270.0), 60.0, 160.0);
        assert_close(hand_tip(c, 100.0, -90.0), 60.0, 160.0);
    }

    #[test]
    fn test_to_canvas_flips_y() {
        assert_eq!(to_canvas(Point::new(10.0, 0.0), 300.0), (10.0, 300.0));
        assert_eq!(to_canvas(Point::new(10.0, 300.0), 300.0), (10.0, 0.0));
    }

    #[test]
    fn test_fit_aspect_square_in_wide_area() {
        // 100x20 cells is 200x80 dots; a square viewport needs 40 columns
        let area = Rect::new(0, 0, 100, 20);
        let fitted = fit_aspect(area, 1.0);
        assert_eq!(fitted, Rect::new(30, 0, 40, 20));
    }

    #[test]
    fn test_fit_aspect_wide_in_tall_area() {
        // 40x40 cells is 80x160 dots; 2:1 needs 40 dots = 10 rows
        let area = Rect::new(5, 5, 40, 40);
        let fitted = fit_aspect(area, 2.0);
        assert_eq!(fitted, Rect::new(5, 20, 40, 10));
    }

    #[test]
    fn test_fit_aspect_degenerate() {
        let empty = Rect::new(0, 0, 0, 10);
        assert_eq!(fit_aspect(empty, 1.0), empty);
    }
}
