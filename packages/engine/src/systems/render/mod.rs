//! Frame rendering
//!
//! Physics never draws. The render pass reads the particle list and emits
//! draw calls against any `DrawSurface`: the browser canvas in production,
//! a recorder in tests.

mod render;
mod surface;

pub use render::{render_frame, RenderResult};
pub use surface::{DrawCommand, DrawSurface, RecordingSurface};
