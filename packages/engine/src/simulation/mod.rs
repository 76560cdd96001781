//! World - owned simulation state
//!
//! `WorldCore` holds everything one canvas session needs: the particle list
//! (creation order, never shrinks during a session), the canvas bounds, the
//! line-overlay toggle and the RNG. It is plain Rust so the whole simulation
//! runs natively in tests; `facade::Simulation` wraps it for JS.
//!
//! Per frame the host calls `step()` (physics only) and then `render()`.

use crate::core::{Rng, Vec2};
use crate::domain::config::SimConfig;
use crate::domain::error::PlacementError;
use crate::domain::particle::Particle;
use crate::systems::physics::PhysicsResult;
use crate::systems::render::{DrawSurface, RenderResult};

#[path = "perf/clock.rs"]
mod clock;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "step/step.rs"]
mod step;
#[path = "commands/commands.rs"]
mod commands;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
mod facade;

pub use facade::Simulation;
pub use init::place_initial_particles;
pub use perf_stats::PerfStats;

use clock::Stopwatch;

/// The simulation world
pub struct WorldCore {
    config: SimConfig,
    particles: Vec<Particle>,

    // State
    draw_lines: bool,
    frame: u64,
    rng: Rng,

    // Perf metrics
    perf_enabled: bool,
    perf_stats: PerfStats,
}

impl WorldCore {
    /// Create a populated world with host entropy
    pub fn new(width: f64, height: f64) -> Result<Self, PlacementError> {
        Self::with_seed(width, height, crate::core::random::entropy_seed())
    }

    /// Create a populated world with a fixed seed (reproducible)
    pub fn with_seed(width: f64, height: f64, seed: u32) -> Result<Self, PlacementError> {
        Self::with_config(SimConfig::new(width, height), seed)
    }

    pub fn with_config(config: SimConfig, seed: u32) -> Result<Self, PlacementError> {
        let mut world = init::create_world_core(config, seed);
        init::populate(&mut world)?;
        Ok(world)
    }

    /// A world with no particles; callers push their own
    pub fn empty(config: SimConfig, seed: u32) -> Self {
        init::create_world_core(config, seed)
    }

    pub fn width(&self) -> f64 { self.config.width }

    pub fn height(&self) -> f64 { self.config.height }

    pub fn config(&self) -> &SimConfig { &self.config }

    pub fn particles(&self) -> &[Particle] { &self.particles }

    pub fn particle_count(&self) -> usize { self.particles.len() }

    pub fn frame(&self) -> u64 { self.frame }

    pub fn lines_enabled(&self) -> bool { self.draw_lines }

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        settings::enable_perf_metrics(self, enabled);
    }

    /// Get last frame perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        settings::get_perf_stats(self)
    }

    /// Append a particle as-is
    pub fn push_particle(&mut self, particle: Particle) {
        commands::push_particle(self, particle);
    }

    /// Pointer click: spawn a particle at (x, y) if the point is on the canvas
    pub fn spawn_at(&mut self, x: f64, y: f64) -> bool {
        commands::spawn_at(self, x, y)
    }

    /// Flip the line overlay; returns the new state
    pub fn toggle_lines(&mut self) -> bool {
        commands::toggle_lines(self)
    }

    /// Throw away every particle and redo the initial placement.
    /// On failure the world is left as it was.
    pub fn reset(&mut self) -> Result<(), PlacementError> {
        commands::reset(self)
    }

    /// Advance physics by one frame
    pub fn step(&mut self) -> PhysicsResult {
        step::step(self)
    }

    /// Draw the current state
    pub fn render<S: DrawSurface>(&mut self, surface: &mut S) -> Result<RenderResult, S::Error> {
        step::render(self, surface)
    }

    pub fn kinetic_energy(&self) -> f64 {
        self.particles.iter().map(Particle::kinetic_energy).sum()
    }

    pub fn momentum(&self) -> Vec2 {
        self.particles
            .iter()
            .fold(Vec2::zero(), |acc, p| acc + p.momentum())
    }

    pub fn config_json(&self) -> Result<String, serde_json::Error> {
        self.config.to_json()
    }

    /// Particle list as JSON (position, velocity, radius, mass, color)
    pub fn snapshot_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.particles)
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
