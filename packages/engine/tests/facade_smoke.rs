use ballpit_engine::render::RecordingSurface;
use ballpit_engine::{canvas_size_for_viewport, Particle, Simulation, SimConfig, WorldCore};

#[test]
fn viewport_world_matches_canvas_size() {
    let sim = Simulation::for_viewport(1280.0, 720.0).unwrap();
    assert_eq!((sim.width(), sim.height()), canvas_size_for_viewport(1280.0, 720.0));
    assert_eq!(sim.width(), 1230.0);
    assert_eq!(sim.particle_count(), 10);
}

#[test]
fn clicks_and_toggle_through_the_facade() {
    let mut sim = Simulation::with_seed(500.0, 400.0, 12).unwrap();

    assert!(!sim.click(900.0, 10.0));
    assert_eq!(sim.particle_count(), 10);
    assert!(sim.click(250.0, 200.0));
    assert_eq!(sim.particle_count(), 11);

    assert!(sim.toggle_lines());
    assert!(!sim.toggle_lines());
    assert!(!sim.lines_enabled());
}

#[test]
fn energy_is_conserved_across_many_frames() {
    let mut sim = Simulation::with_seed(1230.0, 720.0, 8).unwrap();
    let before = sim.kinetic_energy();
    for _ in 0..500 {
        sim.step();
    }
    assert!((sim.kinetic_energy() - before).abs() < 1e-6 * before.max(1.0));
    assert_eq!(sim.frame(), 500.0);
}

#[test]
fn config_json_is_readable() {
    let sim = Simulation::with_seed(500.0, 400.0, 1).unwrap();
    let json = sim.config_json().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["width"], 500.0);
    assert_eq!(value["line_width"], 2.0);
}

#[test]
fn headless_render_of_a_custom_world() {
    let mut world = WorldCore::empty(SimConfig::new(300.0, 300.0), 1);
    world.push_particle(Particle::at(50.0, 50.0, 1.0, 0.0));
    world.push_particle(Particle::at(150.0, 50.0, -1.0, 0.0));
    world.toggle_lines();

    let mut surface = RecordingSurface::new();
    world.render(&mut surface).unwrap();

    assert_eq!(surface.circles(), 2);
    assert_eq!(surface.lines(), 4);
}
