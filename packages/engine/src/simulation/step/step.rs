use crate::systems::physics::{step_particles, PhysicsResult};
use crate::systems::render::{render_frame, DrawSurface, RenderResult};

use super::perf_stats::clamp_count;
use super::{Stopwatch, WorldCore};

pub(super) fn step(world: &mut WorldCore) -> PhysicsResult {
    let perf_on = world.perf_enabled;
    let step_start = if perf_on { Some(Stopwatch::start()) } else { None };

    let result = step_particles(&mut world.particles, world.config.width, world.config.height);

    if let Some(start) = step_start {
        world.perf_stats.step_ms = start.elapsed_ms();
        world.perf_stats.pair_checks = clamp_count(result.pair_checks);
        world.perf_stats.collisions = clamp_count(result.collisions);
        world.perf_stats.wall_bounces = clamp_count(result.wall_bounces);
        world.perf_stats.particle_count = clamp_count(world.particles.len() as u64);
    }

    world.frame += 1;
    result
}

pub(super) fn render<S: DrawSurface>(
    world: &mut WorldCore,
    surface: &mut S,
) -> Result<RenderResult, S::Error> {
    let render_start = if world.perf_enabled { Some(Stopwatch::start()) } else { None };

    let result = render_frame(
        surface,
        &world.particles,
        world.config.width,
        world.config.height,
        world.draw_lines,
        world.config.line_width,
    )?;

    if let Some(start) = render_start {
        world.perf_stats.render_ms = start.elapsed_ms();
        world.perf_stats.circles_drawn = clamp_count(result.circles);
        world.perf_stats.lines_drawn = clamp_count(result.lines);
    }

    Ok(result)
}
