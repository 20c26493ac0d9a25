use std::fmt;
use std::str::FromStr;

use crate::{DrawMode, GeometryError};

/// Selector for one of the built-in shapes.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ShapeKind {
    Triangle,
    Rectangle,
    Circle,
    Line,
    Polygon,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 5] = [
        ShapeKind::Triangle,
        ShapeKind::Rectangle,
        ShapeKind::Circle,
        ShapeKind::Line,
        ShapeKind::Polygon,
    ];

    /// Lowercase name accepted by [`FromStr`].
    pub const fn name(self) -> &'static str {
        match self {
            ShapeKind::Triangle => "triangle",
            ShapeKind::Rectangle => "rectangle",
            ShapeKind::Circle => "circle",
            ShapeKind::Line => "line",
            ShapeKind::Polygon => "polygon",
        }
    }

    /// Draw mode the shape's vertex sequence is laid out for.
    pub const fn draw_mode(self) -> DrawMode {
        match self {
            ShapeKind::Triangle | ShapeKind::Rectangle => DrawMode::Triangles,
            ShapeKind::Circle => DrawMode::TriangleFan,
            ShapeKind::Line => DrawMode::Lines,
            ShapeKind::Polygon => DrawMode::LineLoop,
        }
    }

    /// Whether the shape is generated from [`GenerationParams`](crate::GenerationParams).
    pub const fn is_parametric(self) -> bool {
        matches!(self, ShapeKind::Circle | ShapeKind::Polygon)
    }
}

impl FromStr for ShapeKind {
    type Err = GeometryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        ShapeKind::ALL
            .into_iter()
            .find(|k| k.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| GeometryError::UnknownShapeKind(s.to_string()))
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_name() {
        for kind in ShapeKind::ALL {
            assert_eq!(kind.name().parse::<ShapeKind>(), Ok(kind));
        }
    }

    #[test]
    fn parsing_ignores_case_and_whitespace() {
        assert_eq!(" Circle ".parse::<ShapeKind>(), Ok(ShapeKind::Circle));
        assert_eq!("POLYGON".parse::<ShapeKind>(), Ok(ShapeKind::Polygon));
    }

    #[test]
    fn unknown_name_is_a_lookup_failure() {
        assert_eq!(
            "hexagon".parse::<ShapeKind>(),
            Err(GeometryError::UnknownShapeKind("hexagon".into()))
        );
    }

    #[test]
    fn draw_modes_follow_kind() {
        assert_eq!(ShapeKind::Triangle.draw_mode(), DrawMode::Triangles);
        assert_eq!(ShapeKind::Rectangle.draw_mode(), DrawMode::Triangles);
        assert_eq!(ShapeKind::Circle.draw_mode(), DrawMode::TriangleFan);
        assert_eq!(ShapeKind::Line.draw_mode(), DrawMode::Lines);
        assert_eq!(ShapeKind::Polygon.draw_mode(), DrawMode::LineLoop);
    }
}
