use crate::core::Vec2;
use crate::domain::error::PlacementError;
use crate::domain::particle::Particle;

use super::init::{make_particle, place_initial_particles};
use super::WorldCore;

pub(super) fn push_particle(world: &mut WorldCore, particle: Particle) {
    world.particles.push(particle);
}

pub(super) fn spawn_at(world: &mut WorldCore, x: f64, y: f64) -> bool {
    // NaN coordinates fail both range checks
    if !(0.0..=world.config.width).contains(&x) || !(0.0..=world.config.height).contains(&y) {
        return false;
    }

    let speed = world.config.spawn_speed;
    let vel = Vec2::new(world.rng.symmetric(speed), world.rng.symmetric(speed));
    let particle = make_particle(&world.config, Vec2::new(x, y), vel);
    world.particles.push(particle);
    true
}

pub(super) fn toggle_lines(world: &mut WorldCore) -> bool {
    world.draw_lines = !world.draw_lines;
    world.draw_lines
}

pub(super) fn reset(world: &mut WorldCore) -> Result<(), PlacementError> {
    let particles = place_initial_particles(&world.config, &mut world.rng).map_err(|e| {
        console_warn!("reset failed: {}", e);
        e
    })?;
    console_log!("world reset with {} particles", particles.len());
    world.particles = particles;
    world.frame = 0;
    world.perf_stats.reset();
    Ok(())
}
