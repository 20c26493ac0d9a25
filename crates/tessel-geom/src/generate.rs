use std::f64::consts::TAU;

use crate::params::validate;
use crate::{GeometryError, Point2};

/// Apex up, base along `y = -0.5`.
pub const TRIANGLE: [Point2; 3] = [
    Point2::new(0.0, 0.5),
    Point2::new(-0.5, -0.5),
    Point2::new(0.5, -0.5),
];

/// Two counter-clockwise triangles covering the square of half-extent 0.5.
pub const RECTANGLE: [Point2; 6] = [
    Point2::new(-0.5, -0.5),
    Point2::new(0.5, -0.5),
    Point2::new(0.5, 0.5),
    Point2::new(-0.5, -0.5),
    Point2::new(0.5, 0.5),
    Point2::new(-0.5, 0.5),
];

/// Horizontal segment of length 1 centered at the origin.
pub const LINE: [Point2; 2] = [Point2::new(-0.5, 0.0), Point2::new(0.5, 0.0)];

/// Generates a triangle-fan circle.
///
/// Layout: the center, then `segments + 1` circumference samples at
/// `θ_i = i · 2π / segments` for `i in 0..=segments`. The last sample closes
/// the seam and is bit-identical to the first. Total: `segments + 2` points.
pub fn generate_circle(
    center: Point2,
    radius: f32,
    segments: u32,
) -> Result<Vec<Point2>, GeometryError> {
    validate(center, radius, segments)?;

    let mut out = Vec::with_capacity(segments as usize + 2);
    out.push(center);
    out.extend((0..segments).map(|i| ring_point(center, radius, i, segments)));

    // θ = 2π lands on θ = 0; reuse the sample so the fan seam has no crack.
    let first = out[1];
    out.push(first);

    Ok(out)
}

/// Generates the `sides` vertices of a regular polygon, intended for
/// line-loop rendering: no center point, no closing duplicate.
pub fn generate_polygon(
    center: Point2,
    radius: f32,
    sides: u32,
) -> Result<Vec<Point2>, GeometryError> {
    validate(center, radius, sides)?;

    Ok((0..sides)
        .map(|i| ring_point(center, radius, i, sides))
        .collect())
}

/// Sample `i` of `n` evenly spaced points on the circle.
///
/// Evaluated in `f64` and rounded once, so the error stays within one `f32`
/// rounding of the exact position regardless of `n`.
#[inline]
fn ring_point(center: Point2, radius: f32, i: u32, n: u32) -> Point2 {
    let theta = f64::from(i) * (TAU / f64::from(n));
    let r = f64::from(radius);
    Point2::new(
        (f64::from(center.x) + r * theta.cos()) as f32,
        (f64::from(center.y) + r * theta.sin()) as f32,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-6;

    fn approx(a: Point2, b: (f32, f32)) -> bool {
        (a.x - b.0).abs() < EPS && (a.y - b.1).abs() < EPS
    }

    #[test]
    fn square_polygon_hits_the_axes() {
        let pts = generate_polygon(Point2::ORIGIN, 1.0, 4).unwrap();
        let expected = [(1.0, 0.0), (0.0, 1.0), (-1.0, 0.0), (0.0, -1.0)];
        assert_eq!(pts.len(), 4);
        for (p, e) in pts.iter().zip(expected) {
            assert!(approx(*p, e), "{p:?} != {e:?}");
        }
    }

    #[test]
    fn four_segment_circle() {
        let pts = generate_circle(Point2::ORIGIN, 1.0, 4).unwrap();
        let expected = [
            (0.0, 0.0),
            (1.0, 0.0),
            (0.0, 1.0),
            (-1.0, 0.0),
            (0.0, -1.0),
            (1.0, 0.0),
        ];
        assert_eq!(pts.len(), 6);
        for (p, e) in pts.iter().zip(expected) {
            assert!(approx(*p, e), "{p:?} != {e:?}");
        }
    }

    #[test]
    fn circle_seam_is_exact() {
        let pts = generate_circle(Point2::new(0.25, -0.1), 0.3, 17).unwrap();
        assert_eq!(pts[1], pts[18]);
    }

    #[test]
    fn offset_center_is_first() {
        let c = Point2::new(0.2, 0.3);
        let pts = generate_circle(c, 0.1, 3).unwrap();
        assert_eq!(pts[0], c);
        assert_eq!(pts.len(), 5);
    }

    #[test]
    fn triangle_constant() {
        assert_eq!(TRIANGLE.len(), 3);
        assert_eq!(TRIANGLE[0], Point2::new(0.0, 0.5));
    }

    #[test]
    fn rectangle_is_two_ccw_triangles_covering_unit_square() {
        fn signed_area(t: &[Point2]) -> f32 {
            0.5 * ((t[1].x - t[0].x) * (t[2].y - t[0].y) - (t[2].x - t[0].x) * (t[1].y - t[0].y))
        }

        assert_eq!(RECTANGLE.len(), 6);
        let (a, b) = RECTANGLE.split_at(3);
        assert!(signed_area(a) > 0.0);
        assert!(signed_area(b) > 0.0);
        assert!((signed_area(a) + signed_area(b) - 1.0).abs() < EPS);
    }

    #[test]
    fn line_has_unit_length() {
        assert_eq!(LINE[0].distance(LINE[1]), 1.0);
        assert_eq!(LINE[0].y, LINE[1].y);
    }

    #[test]
    fn rejects_degenerate_inputs() {
        assert!(generate_circle(Point2::ORIGIN, 1.0, 2).is_err());
        assert!(generate_circle(Point2::ORIGIN, 0.0, 8).is_err());
        assert!(generate_polygon(Point2::ORIGIN, 1.0, 2).is_err());
        assert!(generate_polygon(Point2::ORIGIN, 0.0, 8).is_err());
    }
}
