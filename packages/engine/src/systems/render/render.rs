use crate::domain::particle::Particle;

use super::surface::DrawSurface;

/// Draw-call counters for one frame; `lines` is n² with the overlay on
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RenderResult {
    pub circles: u64,
    pub lines: u64,
}

/// Clear the surface and redraw every particle.
///
/// With `draw_lines` on, a segment is drawn for every ordered pair (i, j),
/// self-pairs and both directions included: n² segments.
pub fn render_frame<S: DrawSurface>(
    surface: &mut S,
    particles: &[Particle],
    width: f64,
    height: f64,
    draw_lines: bool,
    line_width: f64,
) -> Result<RenderResult, S::Error> {
    let mut result = RenderResult::default();

    surface.clear_rect(0.0, 0.0, width, height);

    for particle in particles {
        surface.begin_path();
        surface.set_fill_color(particle.color());
        surface.fill_circle(particle.pos, particle.radius())?;
        result.circles += 1;
    }

    if draw_lines {
        for from in particles {
            for to in particles {
                surface.begin_path();
                surface.draw_line(from.pos, to.pos, line_width);
                result.lines += 1;
            }
        }
    }

    Ok(result)
}
