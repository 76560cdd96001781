use crate::domain::particle::Particle;

/// Explicit Euler with an implicit time step of one frame
#[inline]
pub fn integrate(particle: &mut Particle) {
    particle.pos += particle.vel;
}

/// Flip velocity components whose edge touches or crosses a wall.
///
/// Position is never clamped: a fast particle may sit past the wall for a
/// frame before the flipped velocity carries it back in.
/// Returns the number of flipped components (0..=2).
pub fn reflect_off_walls(particle: &mut Particle, width: f64, height: f64) -> u32 {
    let r = particle.radius();
    let mut bounces = 0;

    if particle.pos.x + r >= width || particle.pos.x - r <= 0.0 {
        particle.vel.x = -particle.vel.x;
        bounces += 1;
    }
    if particle.pos.y + r >= height || particle.pos.y - r <= 0.0 {
        particle.vel.y = -particle.vel.y;
        bounces += 1;
    }
    bounces
}
