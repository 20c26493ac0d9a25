use crate::{GeometryError, Point2};

/// Parameters for the generated shapes (circle and polygon).
///
/// Invariants, enforced by [`GenerationParams::new`]:
/// - `center` is finite
/// - `radius` is finite and strictly positive
/// - `segments >= 3`
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct GenerationParams {
    center: Point2,
    radius: f32,
    segments: u32,
}

impl GenerationParams {
    /// Smallest segment/side count that still encloses an area.
    pub const MIN_SEGMENTS: u32 = 3;

    pub fn new(center: Point2, radius: f32, segments: u32) -> Result<Self, GeometryError> {
        validate(center, radius, segments)?;
        Ok(Self { center, radius, segments })
    }

    #[inline]
    pub fn center(&self) -> Point2 {
        self.center
    }

    #[inline]
    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Segment count for circles, side count for polygons.
    #[inline]
    pub fn segments(&self) -> u32 {
        self.segments
    }
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            center: Point2::ORIGIN,
            radius: 0.5,
            segments: 32,
        }
    }
}

pub(crate) fn validate(center: Point2, radius: f32, segments: u32) -> Result<(), GeometryError> {
    if !center.is_finite() {
        return Err(GeometryError::invalid(
            "center",
            format!("must be finite, got ({}, {})", center.x, center.y),
        ));
    }
    if !radius.is_finite() || radius <= 0.0 {
        return Err(GeometryError::invalid(
            "radius",
            format!("must be a positive finite number, got {radius}"),
        ));
    }
    if segments < GenerationParams::MIN_SEGMENTS {
        return Err(GeometryError::invalid(
            "segments",
            format!("must be at least {}, got {segments}", GenerationParams::MIN_SEGMENTS),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        let p = GenerationParams::default();
        assert!(GenerationParams::new(p.center(), p.radius(), p.segments()).is_ok());
    }

    #[test]
    fn rejects_zero_radius() {
        let err = GenerationParams::new(Point2::ORIGIN, 0.0, 8).unwrap_err();
        assert!(matches!(err, GeometryError::InvalidParameter { name: "radius", .. }));
    }

    #[test]
    fn rejects_negative_and_nan_radius() {
        assert!(GenerationParams::new(Point2::ORIGIN, -1.0, 8).is_err());
        assert!(GenerationParams::new(Point2::ORIGIN, f32::NAN, 8).is_err());
        assert!(GenerationParams::new(Point2::ORIGIN, f32::INFINITY, 8).is_err());
    }

    #[test]
    fn rejects_two_segments() {
        let err = GenerationParams::new(Point2::ORIGIN, 1.0, 2).unwrap_err();
        assert!(matches!(err, GeometryError::InvalidParameter { name: "segments", .. }));
    }

    #[test]
    fn rejects_non_finite_center() {
        let err = GenerationParams::new(Point2::new(f32::NAN, 0.0), 1.0, 3).unwrap_err();
        assert!(matches!(err, GeometryError::InvalidParameter { name: "center", .. }));
    }
}
