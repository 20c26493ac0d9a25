//! Core engine-facing contracts.
//!
//! Defines the interface between the runtime (platform loop) and the
//! application drawing into the window.

mod app;
mod ctx;

pub use app::{App, AppControl};
pub use ctx::FrameCtx;
