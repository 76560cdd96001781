//! Ballpit Engine - elastic particle collisions on a canvas, in WASM
//!
//! Architecture:
//! - core/        - logging, vector math, RNG
//! - domain/      - particles, constants, errors
//! - systems/     - physics pass and render pass
//! - simulation/  - world state, commands, JS facade

// Logging macros (must be first for macro export!)
#[macro_use]
pub mod core;
pub mod domain;
pub mod systems;
pub mod simulation;

pub use systems::physics;
pub use systems::render;

use wasm_bindgen::prelude::*;

#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    console_log!("Ballpit engine {} initialized", version());
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use crate::core::Vec2;
pub use domain::config::{canvas_size_for_viewport, SimConfig};
pub use domain::error::PlacementError;
pub use domain::particle::Particle;
pub use simulation::{PerfStats, Simulation, WorldCore};
