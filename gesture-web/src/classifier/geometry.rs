//! Planar geometry helpers for landmark rules

use super::landmarks::Point;

/// Euclidean distance between two keypoints
#[inline]
pub fn dist(a: Point, b: Point) -> f32 {
    let dx = a.x - b.x;
    let dy = a.y - b.y;
    (dx * dx + dy * dy).sqrt()
}

/// Unsigned angle in degrees at vertex `b`, between rays b→a and b→c
///
/// Computed as the difference of the two `atan2` bearings, then folded
/// into [0°, 180°] by reflecting anything above 180° as `360° - angle`.
pub fn angle(a: Point, b: Point, c: Point) -> f32 {
    let radians = (c.y - b.y).atan2(c.x - b.x) - (a.y - b.y).atan2(a.x - b.x);
    let degrees = radians.to_degrees().abs();

    if degrees > 180.0 {
        360.0 - degrees
    } else {
        degrees
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dist() {
        let d = dist(Point::new(0.0, 0.0), Point::new(3.0, 4.0));
        assert!((d - 5.0).abs() < 1e-6);
    }

    #[test]
    fn test_straight_angle() {
        let a = angle(Point::new(0.0, 0.0), Point::new(1.0, 0.0), Point::new(2.0, 0.0));
        assert!((a - 180.0).abs() < 1e-3);
    }

    #[test]
    fn test_right_angle() {
        let a = angle(Point::new(1.0, 0.0), Point::new(0.0, 0.0), Point::new(0.0, 1.0));
        assert!((a - 90.0).abs() < 1e-3);
    }

    #[test]
    fn test_reflex_angle_is_folded() {
        // Bearings of +170° and -170° differ by 340°, which folds to 20°
        let b = Point::new(0.0, 0.0);
        let a = Point::new((-170f32).to_radians().cos(), (-170f32).to_radians().sin());
        let c = Point::new(170f32.to_radians().cos(), 170f32.to_radians().sin());
        let result = angle(a, b, c);
        assert!((result - 20.0).abs() < 1e-3);
        assert!((0.0..=180.0).contains(&result));
    }
}
