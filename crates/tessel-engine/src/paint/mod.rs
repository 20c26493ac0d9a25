//! Color model shared by the clear pass and the shape renderer.

pub mod color;

pub use color::{Color, ColorParseError};
