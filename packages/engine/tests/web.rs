#![cfg(target_arch = "wasm32")]

use ballpit_engine::Simulation;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn simulation_runs_in_the_browser() {
    ballpit_engine::init();
    let mut sim = Simulation::new(640.0, 480.0).unwrap();
    assert_eq!(sim.particle_count(), 10);

    sim.step();
    assert!(sim.click(320.0, 240.0));
    assert!(!sim.click(-5.0, 240.0));
    assert_eq!(sim.particle_count(), 11);
    assert_eq!(sim.frame(), 1.0);
}

#[wasm_bindgen_test]
fn infeasible_canvas_surfaces_as_js_error() {
    let err = Simulation::with_seed(5.0, 5.0, 1).err().unwrap();
    let message = err.as_string().unwrap();
    assert!(message.contains("too small"));
}

fn canvas_context(width: u32, height: u32) -> CanvasRenderingContext2d {
    let document = web_sys::window().unwrap().document().unwrap();
    let canvas: HtmlCanvasElement = document.create_element("canvas").unwrap().dyn_into().unwrap();
    canvas.set_width(width);
    canvas.set_height(height);
    canvas.get_context("2d").unwrap().unwrap().dyn_into().unwrap()
}

#[wasm_bindgen_test]
fn ticks_draw_on_a_borrowed_canvas_context() {
    let ctx = canvas_context(640, 480);
    let mut sim = Simulation::with_seed(640.0, 480.0, 3).unwrap();
    sim.enable_perf_metrics(true);
    assert!(sim.toggle_lines());

    for _ in 0..3 {
        sim.tick(&ctx).unwrap();
    }

    let stats = sim.get_perf_stats();
    assert_eq!(sim.frame(), 3.0);
    assert_eq!(stats.circles_drawn(), 10);
    assert_eq!(stats.lines_drawn(), 100);
    assert!(stats.render_ms() >= 0.0);
}
