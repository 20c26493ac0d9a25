use crate::{DrawMode, GeometryError, Point2, Shape, ShapeKind};

/// Geometry for one shape, computed once and then only read.
#[derive(Debug, Clone, PartialEq)]
pub struct Mesh {
    pub kind: ShapeKind,
    pub draw_mode: DrawMode,
    pub vertices: Vec<Point2>,
    /// Indices into `vertices` for `draw_mode.topology()`.
    pub indices: Vec<u16>,
}

impl Mesh {
    /// Generates the shape's vertices and the indices for its draw mode.
    ///
    /// The vertex count is checked against [`DrawMode::MAX_VERTICES`] before
    /// anything is generated.
    pub fn build(shape: &Shape) -> Result<Self, GeometryError> {
        let kind = shape.kind();
        let draw_mode = shape.draw_mode();

        let count = shape.vertex_count();
        if count > DrawMode::MAX_VERTICES {
            return Err(GeometryError::TooManyVertices { count, max: DrawMode::MAX_VERTICES });
        }

        let vertices = shape.vertices()?;
        let indices = draw_mode.indices(vertices.len())?;

        Ok(Self { kind, draw_mode, vertices, indices })
    }

    /// Vertex-buffer payload: interleaved `x, y` as native-endian `f32`,
    /// stride 8, no padding.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Index-buffer payload (`u16`).
    #[inline]
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }

    #[inline]
    pub fn index_count(&self) -> u32 {
        self.indices.len() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GenerationParams;

    #[test]
    fn payload_is_tightly_packed() {
        let mesh = Mesh::build(&Shape::Rectangle).unwrap();
        assert_eq!(mesh.as_bytes().len(), 8 * mesh.vertices.len());
        assert_eq!(mesh.index_bytes().len(), 2 * mesh.indices.len());

        let floats: &[f32] = bytemuck::cast_slice(mesh.as_bytes());
        assert_eq!(&floats[..4], &[-0.5, -0.5, 0.5, -0.5]);
    }

    #[test]
    fn circle_mesh_is_a_fan() {
        let params = GenerationParams::new(Point2::ORIGIN, 1.0, 8).unwrap();
        let mesh = Mesh::build(&Shape::Circle(params)).unwrap();
        assert_eq!(mesh.draw_mode, DrawMode::TriangleFan);
        assert_eq!(mesh.vertices.len(), 10);
        // 10 fan vertices → 8 triangles.
        assert_eq!(mesh.index_count(), 24);
    }

    #[test]
    fn polygon_mesh_is_a_closed_loop() {
        let params = GenerationParams::new(Point2::ORIGIN, 1.0, 5).unwrap();
        let mesh = Mesh::build(&Shape::Polygon(params)).unwrap();
        assert_eq!(mesh.indices, vec![0, 1, 2, 3, 4, 0]);
    }

    #[test]
    fn oversized_circle_is_rejected() {
        // 65 533 segments + center + seam = 65 535 vertices: the largest accepted.
        let fits = GenerationParams::new(Point2::ORIGIN, 1.0, 65_533).unwrap();
        let mesh = Mesh::build(&Shape::Circle(fits)).unwrap();
        assert_eq!(mesh.vertices.len(), DrawMode::MAX_VERTICES);

        let over = GenerationParams::new(Point2::ORIGIN, 1.0, 65_534).unwrap();
        assert_eq!(
            Mesh::build(&Shape::Circle(over)),
            Err(GeometryError::TooManyVertices { count: 65_536, max: 65_535 })
        );
    }

    #[test]
    fn oversized_polygon_is_rejected() {
        let params = GenerationParams::new(Point2::ORIGIN, 1.0, 65_536).unwrap();
        assert_eq!(
            Mesh::build(&Shape::Polygon(params)),
            Err(GeometryError::TooManyVertices { count: 65_536, max: 65_535 })
        );
    }

    #[test]
    fn huge_segment_count_fails_before_generating() {
        let params = GenerationParams::new(Point2::ORIGIN, 0.5, u32::MAX).unwrap();
        let err = Mesh::build(&Shape::Circle(params)).unwrap_err();
        assert_eq!(
            err,
            GeometryError::TooManyVertices {
                count: (u32::MAX as usize).saturating_add(2),
                max: DrawMode::MAX_VERTICES,
            }
        );

        let err = Mesh::build(&Shape::Polygon(params)).unwrap_err();
        assert!(matches!(err, GeometryError::TooManyVertices { .. }));
    }
}
