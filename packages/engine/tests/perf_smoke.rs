use ballpit_engine::Simulation;

#[test]
fn perf_smoke_step() {
    let mut sim = Simulation::with_seed(1230.0, 720.0, 4).unwrap();
    sim.enable_perf_metrics(true);
    for i in 0..40 {
        sim.click(30.0 + i as f64 * 29.0, 360.0);
    }
    for _ in 0..120 {
        sim.step();
    }
    let stats = sim.get_perf_stats();
    assert!(stats.step_ms() >= 0.0);
    assert_eq!(stats.particle_count(), 50);
    assert_eq!(stats.pair_checks(), 50 * 49);
}
