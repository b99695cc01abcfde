//! Wheel geometry: derived measurements and pointer hit testing.

use std::f32::consts::TAU;

/// A point in widget-local coordinates, origin at the widget's top-left.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    /// Create a point.
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Which part of the wheel a pointer position falls in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    /// The annular hue band
    Ring,
    /// The inscribed saturation/value square
    Square,
    /// Neither: the gap between square and ring, or beyond the outer edge
    Outside,
}

/// Inset applied to the square's hit box so the corner pixels that poke past
/// the true square are not selectable.
const SQUARE_INSET: f32 = 0.5;

/// Derived, read-only measurements for a wheel of a given diameter.
///
/// Computed wholesale from the diameter; a resize replaces the whole value
/// rather than mutating individual fields.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WheelGeometry {
    /// Wheel center in widget-local coordinates (equal to the radius on both axes)
    pub center: Point,
    /// Radius of the outer edge of the hue ring
    pub outer_radius: f32,
    /// Radial thickness of the hue ring (one tenth of the diameter)
    pub ring_thickness: f32,
    /// Half the side of the square inscribed in the ring's inner circle
    pub half: f32,
}

impl WheelGeometry {
    /// Compute the geometry for a wheel of `diameter` pixels.
    pub fn new(diameter: f32) -> Self {
        let outer_radius = diameter / 2.0;
        let ring_thickness = diameter / 10.0;
        let inner = outer_radius - ring_thickness;
        // Side of the largest square inscribed in the inner circle.
        let side = (2.0 * inner * inner).sqrt();
        Self {
            center: Point::new(outer_radius, outer_radius),
            outer_radius,
            ring_thickness,
            half: side / 2.0,
        }
    }

    /// Radius of the ring's inner edge.
    pub fn inner_radius(&self) -> f32 {
        self.outer_radius - self.ring_thickness
    }

    /// Classify a widget-local pointer position.
    ///
    /// `Ring` covers the open annulus, `Square` the inscribed square (inset by
    /// half a pixel on each axis), everything else is `Outside`. Never fails;
    /// positions beyond the widget simply classify as `Outside`.
    pub fn hit_test(&self, point: Point) -> Region {
        let dx = point.x - self.center.x;
        let dy = point.y - self.center.y;
        let dist = (dx * dx + dy * dy).sqrt();

        if dist > self.inner_radius() && dist < self.outer_radius {
            Region::Ring
        } else if dist < self.inner_radius()
            && dx.abs() < self.half - SQUARE_INSET
            && dy.abs() < self.half - SQUARE_INSET
        {
            Region::Square
        } else {
            Region::Outside
        }
    }

    /// Angle from the center to `point`, in radians wrapped into `[0, 2π)`.
    pub fn angle_to(&self, point: Point) -> f32 {
        let angle = (point.y - self.center.y).atan2(point.x - self.center.x);
        if angle < 0.0 {
            angle + TAU
        } else {
            angle
        }
    }

    /// Fractional `(s, v)` position of `point` within the square field.
    ///
    /// Each axis is projected onto `[-half, +half]` and rescaled to `[0, 1]`,
    /// clamping out-of-bounds positions to the nearest edge. The vertical axis
    /// is inverted: the top of the square is maximum value.
    pub fn square_fraction(&self, point: Point) -> (f32, f32) {
        let dx = point.x - self.center.x;
        let dy = point.y - self.center.y;
        let s = ((dx + self.half) / (2.0 * self.half)).clamp(0.0, 1.0);
        let v = 1.0 - ((dy + self.half) / (2.0 * self.half)).clamp(0.0, 1.0);
        (s, v)
    }

    /// Widget-local position of a fractional `(s, v)` square point.
    ///
    /// Inverse of [`square_fraction`](Self::square_fraction) for in-range
    /// fractions.
    pub fn square_position(&self, s: f32, v: f32) -> Point {
        Point::new(
            self.center.x - self.half + 2.0 * self.half * s,
            self.center.y + self.half - 2.0 * self.half * v,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_geometry_from_diameter() {
        let geom = WheelGeometry::new(100.0);
        assert_eq!(geom.outer_radius, 50.0);
        assert_eq!(geom.ring_thickness, 10.0);
        assert_eq!(geom.inner_radius(), 40.0);
        assert_eq!(geom.center, Point::new(50.0, 50.0));
        // Inscribed square: side = 40 * sqrt(2), half ~= 28.28.
        assert!((geom.half - 40.0 / std::f32::consts::SQRT_2).abs() < 1e-4);
    }

    #[test]
    fn test_hit_test_regions() {
        let geom = WheelGeometry::new(100.0);

        // Middle of the ring band, due east of center.
        assert_eq!(geom.hit_test(Point::new(95.0, 50.0)), Region::Ring);
        // Center of the square.
        assert_eq!(geom.hit_test(Point::new(50.0, 50.0)), Region::Square);
        // Beyond the outer edge.
        assert_eq!(geom.hit_test(Point::new(101.0, 50.0)), Region::Outside);
        // Inside the inner circle but past the square's horizontal extent.
        assert_eq!(geom.hit_test(Point::new(85.0, 50.0)), Region::Outside);
    }

    #[test]
    fn test_hit_test_boundaries_are_strict() {
        let geom = WheelGeometry::new(100.0);
        // Exactly on the outer edge and exactly on the inner edge are not Ring.
        assert_eq!(geom.hit_test(Point::new(100.0, 50.0)), Region::Outside);
        assert_eq!(geom.hit_test(Point::new(90.0, 50.0)), Region::Outside);
    }

    #[test]
    fn test_angle_wraps_negative() {
        let geom = WheelGeometry::new(100.0);
        // Due north is -pi/2 from atan2, wrapped to 3/2 pi.
        let north = geom.angle_to(Point::new(50.0, 0.0));
        assert!((north - 3.0 * std::f32::consts::FRAC_PI_2).abs() < 1e-5);
        // Due east is 0.
        assert!(geom.angle_to(Point::new(100.0, 50.0)).abs() < 1e-5);
    }

    #[test]
    fn test_square_fraction_corners_and_clamp() {
        let geom = WheelGeometry::new(100.0);

        let top_left = geom.square_position(0.0, 1.0);
        let (s, v) = geom.square_fraction(top_left);
        assert!(s.abs() < 1e-5 && (v - 1.0).abs() < 1e-5);

        let bottom_right = geom.square_position(1.0, 0.0);
        let (s, v) = geom.square_fraction(bottom_right);
        assert!((s - 1.0).abs() < 1e-5 && v.abs() < 1e-5);

        // Far out of bounds clamps to the nearest edge.
        assert_eq!(geom.square_fraction(Point::new(-500.0, 5000.0)), (0.0, 0.0));
        assert_eq!(geom.square_fraction(Point::new(500.0, -5000.0)), (1.0, 1.0));
    }

    #[test]
    fn test_square_position_round_trip() {
        let geom = WheelGeometry::new(256.0);
        for &(s, v) in &[(0.0, 0.0), (0.25, 0.75), (0.5, 0.5), (1.0, 1.0)] {
            let (s2, v2) = geom.square_fraction(geom.square_position(s, v));
            assert!((s - s2).abs() < 1e-5);
            assert!((v - v2).abs() < 1e-5);
        }
    }
}
