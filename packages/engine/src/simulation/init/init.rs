use crate::core::{Rng, Vec2};
use crate::domain::config::SimConfig;
use crate::domain::error::PlacementError;
use crate::domain::particle::Particle;

use super::perf_stats::PerfStats;
use super::WorldCore;

pub(super) fn create_world_core(config: SimConfig, seed: u32) -> WorldCore {
    WorldCore {
        particles: Vec::with_capacity(config.initial_count),
        config,
        draw_lines: false,
        frame: 0,
        rng: Rng::new(seed),
        perf_enabled: false,
        perf_stats: PerfStats::default(),
    }
}

pub(super) fn populate(world: &mut WorldCore) -> Result<(), PlacementError> {
    let particles = place_initial_particles(&world.config, &mut world.rng).map_err(|e| {
        console_warn!("{}", e);
        e
    })?;
    console_log!(
        "placed {} particles on {}x{} canvas",
        particles.len(),
        world.config.width,
        world.config.height
    );
    world.particles = particles;
    Ok(())
}

pub(super) fn make_particle(config: &SimConfig, pos: Vec2, vel: Vec2) -> Particle {
    Particle::with_mass(pos, vel, config.radius, config.mass).with_color(config.color)
}

/// Integer range a particle center may take on one axis: [r, dim - r]
fn axis_range(dim: f64, radius: f64) -> Option<(i64, i64)> {
    let min = radius.ceil() as i64;
    let max = (dim - radius).floor() as i64;
    (max >= min).then_some((min, max))
}

/// Rejection-sample `config.initial_count` non-overlapping particles.
///
/// Every time a candidate overlaps an accepted particle it is redrawn and the
/// scan restarts from the first accepted particle. Each particle gets at most
/// `config.max_placement_attempts` redraws.
pub fn place_initial_particles(
    config: &SimConfig,
    rng: &mut Rng,
) -> Result<Vec<Particle>, PlacementError> {
    let r = config.radius;
    let (Some(xs), Some(ys)) = (axis_range(config.width, r), axis_range(config.height, r)) else {
        return Err(PlacementError::CanvasTooSmall {
            width: config.width,
            height: config.height,
            radius: r,
        });
    };

    let sample = |rng: &mut Rng| {
        let x = rng.int_in_range(xs.0, xs.1) as f64;
        let y = rng.int_in_range(ys.0, ys.1) as f64;
        Vec2::new(x, y)
    };

    let mut particles: Vec<Particle> = Vec::with_capacity(config.initial_count);
    for placed in 0..config.initial_count {
        let mut pos = sample(rng);
        let mut attempts = 0u32;
        let mut j = 0;
        while j < particles.len() {
            if pos.distance(particles[j].pos) - 2.0 * r < 0.0 {
                attempts += 1;
                if attempts > config.max_placement_attempts {
                    return Err(PlacementError::Infeasible {
                        placed,
                        attempts: config.max_placement_attempts,
                    });
                }
                pos = sample(rng);
                j = 0;
                continue;
            }
            j += 1;
        }

        let vel = Vec2::new(
            rng.symmetric(config.initial_speed),
            rng.symmetric(config.initial_speed),
        );
        particles.push(make_particle(config, pos, vel));
    }

    Ok(particles)
}
