use bytemuck::{Pod, Zeroable};

/// 2D point in clip space.
///
/// `#[repr(C)]` so a `[Point2]` slice is exactly the interleaved `x, y` float
/// payload a vertex buffer expects (stride 8, no padding).
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Pod, Zeroable)]
pub struct Point2 {
    pub x: f32,
    pub y: f32,
}

impl Point2 {
    pub const ORIGIN: Point2 = Point2::new(0.0, 0.0);

    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Euclidean distance to `other`.
    #[inline]
    pub fn distance(self, other: Point2) -> f32 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}
