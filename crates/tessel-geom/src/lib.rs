//! Parametric 2D shape geometry.
//!
//! Produces flat, tightly packed vertex sequences in clip space for the five
//! built-in shapes, plus the index data needed to draw fans and loops with
//! list/strip-only graphics APIs.
//!
//! ```
//! use tessel_geom::{GenerationParams, Mesh, Point2, Shape};
//!
//! let params = GenerationParams::new(Point2::new(0.0, 0.0), 0.5, 64)?;
//! let mesh = Mesh::build(&Shape::Circle(params))?;
//! assert_eq!(mesh.vertices.len(), 66);
//! # Ok::<(), tessel_geom::GeometryError>(())
//! ```

mod draw_mode;
mod error;
mod generate;
mod kind;
mod mesh;
mod params;
mod point;
mod shape;

pub use draw_mode::{DrawMode, Topology};
pub use error::GeometryError;
pub use generate::{generate_circle, generate_polygon, LINE, RECTANGLE, TRIANGLE};
pub use kind::ShapeKind;
pub use mesh::Mesh;
pub use params::GenerationParams;
pub use point::Point2;
pub use shape::Shape;
