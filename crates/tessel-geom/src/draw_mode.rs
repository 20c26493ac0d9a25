use crate::GeometryError;

/// How a shape's vertex sequence is meant to be connected.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum DrawMode {
    /// Independent filled triangles, three vertices each.
    Triangles,
    /// Filled fan around vertex 0: triangles `(0, i, i + 1)`.
    TriangleFan,
    /// Independent segments, two vertices each.
    Lines,
    /// Closed outline: consecutive segments plus last → first.
    LineLoop,
}

/// Primitive topology available on list/strip-only graphics APIs.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Topology {
    TriangleList,
    LineList,
    LineStrip,
}

impl DrawMode {
    /// Largest vertex count whose indices stay below `0xFFFF`.
    ///
    /// `0xFFFF` is the `u16` primitive-restart value for strip topologies and
    /// is always reserved on WebGL2, so it is never emitted.
    pub const MAX_VERTICES: usize = u16::MAX as usize;

    /// Topology the expanded indices are drawn with.
    pub const fn topology(self) -> Topology {
        match self {
            DrawMode::Triangles | DrawMode::TriangleFan => Topology::TriangleList,
            DrawMode::Lines => Topology::LineList,
            DrawMode::LineLoop => Topology::LineStrip,
        }
    }

    /// Minimum vertex count that produces at least one primitive.
    pub const fn min_vertices(self) -> usize {
        match self {
            DrawMode::Triangles | DrawMode::TriangleFan => 3,
            DrawMode::Lines | DrawMode::LineLoop => 2,
        }
    }

    /// Expands `vertex_count` vertices into an index list for [`Self::topology`].
    ///
    /// - `Triangles`, `Lines`: `0..n`
    /// - `TriangleFan`: `(0, i, i + 1)` for `i in 1..n - 1`
    /// - `LineLoop`: `0..n` then `0`
    pub fn indices(self, vertex_count: usize) -> Result<Vec<u16>, GeometryError> {
        if vertex_count < self.min_vertices() {
            return Err(GeometryError::invalid(
                "vertex_count",
                format!(
                    "{:?} needs at least {} vertices, got {vertex_count}",
                    self,
                    self.min_vertices()
                ),
            ));
        }
        if vertex_count > Self::MAX_VERTICES {
            return Err(GeometryError::TooManyVertices {
                count: vertex_count,
                max: Self::MAX_VERTICES,
            });
        }

        // Bounded by MAX_VERTICES above, so every index fits in u16.
        let last = (vertex_count - 1) as u16;

        let indices = match self {
            DrawMode::Triangles | DrawMode::Lines => (0..=last).collect(),
            DrawMode::TriangleFan => (1..last).flat_map(|i| [0, i, i + 1]).collect(),
            DrawMode::LineLoop => (0..=last).chain(std::iter::once(0)).collect(),
        };

        Ok(indices)
    }
}
