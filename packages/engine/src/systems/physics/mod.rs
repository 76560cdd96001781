//! Per-frame particle physics
//!
//! For every particle, in creation order:
//! 1. resolve collisions against every other particle
//! 2. integrate position (explicit Euler, one frame = one time unit)
//! 3. reflect off the canvas walls
//!
//! Later particles see the already-moved positions of earlier ones; the
//! ordering is part of the observable behavior.

mod collision;
mod integrate;
mod types;

pub use collision::{collide_with_others, elastic_1d, resolve_collision};
pub use integrate::{integrate, reflect_off_walls};
pub use types::PhysicsResult;

use crate::domain::particle::Particle;

/// Advance every particle one frame inside a `width` x `height` box
pub fn step_particles(particles: &mut [Particle], width: f64, height: f64) -> PhysicsResult {
    let mut result = PhysicsResult::default();
    for i in 0..particles.len() {
        collide_with_others(particles, i, &mut result);

        let particle = &mut particles[i];
        integrate(particle);
        result.wall_bounces += u64::from(reflect_off_walls(particle, width, height));
    }
    result
}
