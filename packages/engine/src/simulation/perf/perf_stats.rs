use wasm_bindgen::prelude::*;

/// Counters and timings for the last frame
#[wasm_bindgen]
#[derive(Clone, Debug, Default)]
pub struct PerfStats {
    pub(super) step_ms: f64,
    pub(super) render_ms: f64,
    pub(super) pair_checks: u32,
    pub(super) collisions: u32,
    pub(super) wall_bounces: u32,
    pub(super) circles_drawn: u32,
    pub(super) lines_drawn: u32,
    pub(super) particle_count: u32,
}

impl PerfStats {
    pub(crate) fn reset(&mut self) {
        *self = PerfStats::default();
    }
}

/// JS numbers stay exact up to 2^53 but wasm-bindgen maps `u64` to `BigInt`,
/// so the getters expose `u32` and pin anything larger at `u32::MAX`.
pub(crate) fn clamp_count(count: u64) -> u32 {
    u32::try_from(count).unwrap_or(u32::MAX)
}

#[wasm_bindgen]
impl PerfStats {
    #[wasm_bindgen(getter)]
    pub fn step_ms(&self) -> f64 { self.step_ms }
    #[wasm_bindgen(getter)]
    pub fn render_ms(&self) -> f64 { self.render_ms }
    #[wasm_bindgen(getter)]
    pub fn pair_checks(&self) -> u32 { self.pair_checks }
    #[wasm_bindgen(getter)]
    pub fn collisions(&self) -> u32 { self.collisions }
    #[wasm_bindgen(getter)]
    pub fn wall_bounces(&self) -> u32 { self.wall_bounces }
    #[wasm_bindgen(getter)]
    pub fn circles_drawn(&self) -> u32 { self.circles_drawn }
    #[wasm_bindgen(getter)]
    pub fn lines_drawn(&self) -> u32 { self.lines_drawn }
    #[wasm_bindgen(getter)]
    pub fn particle_count(&self) -> u32 { self.particle_count }
}
