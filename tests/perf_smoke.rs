use torque_engine::Simulator;

#[test]
fn perf_smoke_tick() {
    let sim = Simulator::new();
    sim.enable_perf_metrics(true);

    // Grab at the right edge of the default 128px disk and sweep a quarter turn
    sim.pointer_down(228.0, 128.0);
    for step in 0..=90 {
        let angle = (step as f64).to_radians();
        sim.pointer_move(128.0 + 100.0 * angle.cos(), 128.0 + 100.0 * angle.sin());
        sim.tick_at(16.0 * (step + 1) as f64);
    }

    let stats = sim.get_perf_stats();
    assert!(stats.step_ms() >= 0.0);
    assert!(stats.dragging());
    assert!(sim.angular_velocity() > 0.0);
    assert_eq!(sim.history_len(), 91);
    assert_eq!(sim.history_times().len(), sim.history_accelerations().len());
    assert!((0.0..360.0).contains(&sim.rotation()));
    assert!(sim.contact_radius().is_some());

    sim.pointer_up();
    assert!(!sim.is_dragging());
    assert_eq!(sim.contact_radius(), None);
}

/// Input handlers and the frame callback each hold a shared `&Simulator`.
fn feed_input(sim: &Simulator, angle_deg: f64) {
    let angle = angle_deg.to_radians();
    sim.pointer_move(128.0 + 100.0 * angle.cos(), 128.0 + 100.0 * angle.sin());
}

fn run_frame(sim: &Simulator, now_ms: f64) {
    sim.tick_at(now_ms);
}

#[test]
fn shared_handle_drives_settings_input_and_ticks() {
    let sim = Simulator::new();
    let (input, frames) = (&sim, &sim);

    input.set_contact_mass(2.0);
    input.set_friction_enabled(true);
    input.pointer_down(228.0, 128.0);
    for step in 0..30 {
        feed_input(input, 3.0 * (step + 1) as f64);
        run_frame(frames, 16.0 * (step + 1) as f64);
    }

    assert!(sim.angular_velocity() > 0.0);
    assert_eq!(sim.frame(), 30);
    assert!((sim.contact_angle().unwrap() - 90.0).abs() < 1e-6);

    input.pointer_leave();
    input.clear_history();
    assert!(!sim.is_dragging());
    assert_eq!(sim.contact_angle(), None);
    assert_eq!(sim.history_len(), 0);
    assert_eq!(sim.contact_mass(), 2.0);
}
