use crate::domain::{SampleTiming, SimulatorConfig};

use super::SimulatorCore;

pub(super) fn config(sim: &SimulatorCore) -> SimulatorConfig {
    SimulatorConfig {
        disk_mass: sim.disk.mass,
        contact_mass: sim.contact_mass,
        disk_radius: sim.disk.radius,
        friction_enabled: sim.friction.enabled,
        friction_coefficient: sim.friction.coefficient,
        default_mass: sim.disk.default_mass,
        gravity: sim.torque_model.gravity,
        torque_scale: sim.torque_model.scale,
        history_capacity: sim.history.capacity(),
        sample_timing: sim.sample_timing,
    }
}

pub(super) fn set_disk_mass(sim: &mut SimulatorCore, mass: f64) {
    let was_valid = sim.disk.mass_is_valid();
    sim.disk.mass = mass;
    // Warn on the transition only; the input fires on every keystroke
    if was_valid && !sim.disk.mass_is_valid() {
        console_warn!(
            "disk mass {} kg is not positive; using default mass of {} kg",
            mass,
            sim.disk.default_mass
        );
    }
}

pub(super) fn set_contact_mass(sim: &mut SimulatorCore, mass: f64) {
    sim.contact_mass = mass;
}

pub(super) fn set_friction_enabled(sim: &mut SimulatorCore, enabled: bool) {
    sim.friction.enabled = enabled;
}

pub(super) fn set_disk_radius(sim: &mut SimulatorCore, radius: f64) {
    sim.disk.radius = radius;
}

pub(super) fn set_sample_timing(sim: &mut SimulatorCore, timing: SampleTiming) {
    sim.sample_timing = timing;
}

pub(super) fn set_history_capacity(sim: &mut SimulatorCore, capacity: usize) {
    sim.history.set_capacity(capacity);
}

pub(super) fn enable_perf_metrics(sim: &mut SimulatorCore, enabled: bool) {
    sim.perf_enabled = enabled;
    if !enabled {
        sim.perf_stats.reset();
    }
}
