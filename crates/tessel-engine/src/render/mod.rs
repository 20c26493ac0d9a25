//! GPU rendering subsystem.
//!
//! Geometry arrives already in clip space (`tessel_geom::Mesh`); the vertex
//! shader passes positions through unchanged.

mod ctx;
mod shape;

pub use ctx::{RenderCtx, RenderTarget};
pub use shape::{topology_for, ShapeRenderer, POSITION_LOCATION};
