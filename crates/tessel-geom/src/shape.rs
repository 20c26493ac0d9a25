use crate::generate::{generate_circle, generate_polygon, LINE, RECTANGLE, TRIANGLE};
use crate::{DrawMode, GenerationParams, GeometryError, Point2, ShapeKind};

/// A built-in shape together with whatever it needs to produce its geometry.
///
/// Fixed shapes carry nothing; generated shapes carry their parameters.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Shape {
    Triangle,
    Rectangle,
    Line,
    Circle(GenerationParams),
    Polygon(GenerationParams),
}

impl Shape {
    /// Builds the shape for `kind`. `params` is used only by circle and polygon.
    pub fn from_kind(kind: ShapeKind, params: GenerationParams) -> Self {
        match kind {
            ShapeKind::Triangle => Shape::Triangle,
            ShapeKind::Rectangle => Shape::Rectangle,
            ShapeKind::Line => Shape::Line,
            ShapeKind::Circle => Shape::Circle(params),
            ShapeKind::Polygon => Shape::Polygon(params),
        }
    }

    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::Triangle => ShapeKind::Triangle,
            Shape::Rectangle => ShapeKind::Rectangle,
            Shape::Line => ShapeKind::Line,
            Shape::Circle(_) => ShapeKind::Circle,
            Shape::Polygon(_) => ShapeKind::Polygon,
        }
    }

    #[inline]
    pub fn draw_mode(&self) -> DrawMode {
        self.kind().draw_mode()
    }

    /// Number of vertices [`Self::vertices`] produces, known without generating them.
    pub fn vertex_count(&self) -> usize {
        match self {
            Shape::Triangle => TRIANGLE.len(),
            Shape::Rectangle => RECTANGLE.len(),
            Shape::Line => LINE.len(),
            // Center, `n` ring samples and the repeated seam sample.
            Shape::Circle(p) => (p.segments() as usize).saturating_add(2),
            Shape::Polygon(p) => p.segments() as usize,
        }
    }

    /// Produces the shape's ordered vertex sequence.
    pub fn vertices(&self) -> Result<Vec<Point2>, GeometryError> {
        match self {
            Shape::Triangle => Ok(TRIANGLE.to_vec()),
            Shape::Rectangle => Ok(RECTANGLE.to_vec()),
            Shape::Line => Ok(LINE.to_vec()),
            Shape::Circle(p) => generate_circle(p.center(), p.radius(), p.segments()),
            Shape::Polygon(p) => generate_polygon(p.center(), p.radius(), p.segments()),
        }
    }
}
