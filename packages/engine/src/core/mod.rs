//! Core utilities shared by every system
//!
//! - log     - console logging macros (must be first for macro export!)
//! - vec2    - 2D vector math
//! - random  - seedable xorshift RNG

#[macro_use]
pub mod log;
pub mod random;
pub mod vec2;

pub use random::Rng;
pub use vec2::Vec2;
