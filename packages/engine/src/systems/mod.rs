pub mod physics;
pub mod render;
