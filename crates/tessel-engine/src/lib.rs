//! tessel engine crate.
//!
//! Owns the platform + GPU bootstrap that turns a [`tessel_geom::Mesh`] into
//! pixels: window, device, one pipeline, one vertex buffer, one draw call.

pub mod device;
pub mod window;
pub mod core;

pub mod logging;
pub mod render;
pub mod paint;
