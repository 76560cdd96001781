//! Engine constants
//!
//! Everything the demo hard-codes lives here. The host can read the values
//! (`Simulation::config_json`) but never override them.

use serde::Serialize;

pub const INITIAL_PARTICLE_COUNT: usize = 10;
pub const PARTICLE_RADIUS: f64 = 10.0;
pub const PARTICLE_MASS: f64 = 10.0;
pub const PARTICLE_COLOR: &str = "black";
/// Initial velocity components are drawn from [-2.5, 2.5]
pub const INITIAL_SPEED: f64 = 2.5;
/// Click-spawned velocity components are drawn from [-5, 5]
pub const SPAWN_SPEED: f64 = 5.0;
pub const LINE_WIDTH: f64 = 2.0;
/// Horizontal space the page keeps free next to the canvas
pub const VIEWPORT_MARGIN: f64 = 50.0;
/// Resamples allowed per particle before initial placement gives up
pub const MAX_PLACEMENT_ATTEMPTS: u32 = 10_000;
/// Never enforced
pub const NOMINAL_MAX_PARTICLES: u64 = 100_000_005;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SimConfig {
    pub width: f64,
    pub height: f64,
    pub initial_count: usize,
    pub radius: f64,
    pub mass: f64,
    pub color: &'static str,
    pub initial_speed: f64,
    pub spawn_speed: f64,
    pub line_width: f64,
    pub max_placement_attempts: u32,
    pub nominal_max_particles: u64,
}

impl SimConfig {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            initial_count: INITIAL_PARTICLE_COUNT,
            radius: PARTICLE_RADIUS,
            mass: PARTICLE_MASS,
            color: PARTICLE_COLOR,
            initial_speed: INITIAL_SPEED,
            spawn_speed: SPAWN_SPEED,
            line_width: LINE_WIDTH,
            max_placement_attempts: MAX_PLACEMENT_ATTEMPTS,
            nominal_max_particles: NOMINAL_MAX_PARTICLES,
        }
    }

    /// Config for a canvas filling the viewport minus the page margin
    pub fn for_viewport(inner_width: f64, inner_height: f64) -> Self {
        let (width, height) = canvas_size_for_viewport(inner_width, inner_height);
        Self::new(width, height)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// Canvas size for a given viewport: (width - margin) x height
pub fn canvas_size_for_viewport(inner_width: f64, inner_height: f64) -> (f64, f64) {
    ((inner_width - VIEWPORT_MARGIN).max(0.0), inner_height.max(0.0))
}
