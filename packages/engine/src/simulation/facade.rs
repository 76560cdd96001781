use wasm_bindgen::prelude::*;
use web_sys::CanvasRenderingContext2d;

use crate::domain::config::SimConfig;

use super::perf_stats::{clamp_count, PerfStats};
use super::WorldCore;

fn js_error<E: std::fmt::Display>(e: E) -> JsValue {
    JsValue::from_str(&e.to_string())
}

/// JS handle to one canvas session.
///
/// The page owns the loop: call `tick(ctx)` from `requestAnimationFrame`,
/// forward canvas clicks to `click(x, y)` and the toggle button to
/// `toggleLines()`.
#[wasm_bindgen]
pub struct Simulation {
    core: WorldCore,
}

#[wasm_bindgen]
impl Simulation {
    /// Create a populated world of the given canvas size
    #[wasm_bindgen(constructor)]
    pub fn new(width: f64, height: f64) -> Result<Simulation, JsValue> {
        let core = WorldCore::new(width, height).map_err(js_error)?;
        Ok(Self { core })
    }

    /// Same as the constructor but reproducible
    #[wasm_bindgen(js_name = withSeed)]
    pub fn with_seed(width: f64, height: f64, seed: u32) -> Result<Simulation, JsValue> {
        let core = WorldCore::with_seed(width, height, seed).map_err(js_error)?;
        Ok(Self { core })
    }

    /// Size the canvas from `innerWidth`/`innerHeight`, keeping the page margin
    #[wasm_bindgen(js_name = forViewport)]
    pub fn for_viewport(inner_width: f64, inner_height: f64) -> Result<Simulation, JsValue> {
        let config = SimConfig::for_viewport(inner_width, inner_height);
        let core = WorldCore::with_config(config, crate::core::random::entropy_seed())
            .map_err(js_error)?;
        Ok(Self { core })
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> f64 { self.core.width() }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> f64 { self.core.height() }

    #[wasm_bindgen(getter)]
    pub fn particle_count(&self) -> u32 { clamp_count(self.core.particle_count() as u64) }

    /// Frames stepped so far, as a JS number (exact up to 2^53)
    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> f64 { self.core.frame() as f64 }

    #[wasm_bindgen(getter)]
    pub fn lines_enabled(&self) -> bool { self.core.lines_enabled() }

    /// Enable or disable per-frame perf metrics
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.core.enable_perf_metrics(enabled);
    }

    /// Get last frame perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        self.core.get_perf_stats()
    }

    /// Advance physics one frame without drawing
    pub fn step(&mut self) {
        self.core.step();
    }

    /// Redraw the canvas from the current state
    pub fn render(&mut self, ctx: &CanvasRenderingContext2d) -> Result<(), JsValue> {
        let mut surface = ctx;
        self.core.render(&mut surface)?;
        Ok(())
    }

    /// One animation frame: step, then render
    pub fn tick(&mut self, ctx: &CanvasRenderingContext2d) -> Result<(), JsValue> {
        self.core.step();
        self.render(ctx)
    }

    /// Pointer click in canvas coordinates; false when outside the canvas
    pub fn click(&mut self, x: f64, y: f64) -> bool {
        self.core.spawn_at(x, y)
    }

    /// Flip the connecting-lines overlay; returns the new state
    #[wasm_bindgen(js_name = toggleLines)]
    pub fn toggle_lines(&mut self) -> bool {
        self.core.toggle_lines()
    }

    /// Re-run the initial placement
    pub fn reset(&mut self) -> Result<(), JsValue> {
        self.core.reset().map_err(js_error)
    }

    #[wasm_bindgen(js_name = kineticEnergy)]
    pub fn kinetic_energy(&self) -> f64 {
        self.core.kinetic_energy()
    }

    #[wasm_bindgen(js_name = configJson)]
    pub fn config_json(&self) -> Result<String, JsValue> {
        self.core.config_json().map_err(js_error)
    }

    #[wasm_bindgen(js_name = snapshotJson)]
    pub fn snapshot_json(&self) -> Result<String, JsValue> {
        self.core.snapshot_json().map_err(js_error)
    }
}

impl Simulation {
    /// Borrow the underlying world (native hosts and tests)
    pub fn core(&self) -> &WorldCore {
        &self.core
    }

    pub fn core_mut(&mut self) -> &mut WorldCore {
        &mut self.core
    }
}
