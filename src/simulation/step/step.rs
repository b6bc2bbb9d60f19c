use crate::domain::{AccelerationSample, SampleTiming};
use crate::systems::{angular_acceleration, integrate};

use super::{PerfTimer, SimulatorCore};

pub(super) fn tick_at(sim: &mut SimulatorCore, now_ms: f64) {
    let perf_on = sim.perf_enabled;
    if perf_on {
        sim.perf_stats.reset();
    }
    let step_start = if perf_on { Some(PerfTimer::start()) } else { None };

    // A first timestamp earlier than the session start comes from another
    // clock (e.g. rAF time vs. Date.now()): restart the session on its base.
    if sim.frame == 0 && now_ms < sim.start_ms {
        sim.start_ms = now_ms;
        sim.last_tick_ms = now_ms;
    }

    // Wall-clock Δt; a clock that steps backwards (or NaN) counts as zero
    let dt_ms = (now_ms - sim.last_tick_ms).max(0.0);
    if now_ms > sim.last_tick_ms {
        sim.last_tick_ms = now_ms;
    }
    let dt = dt_ms / 1000.0;

    // === TORQUE ===
    let torque = contact_torque(sim);

    // === INTEGRATION ===
    let previous = sim.state;
    let acceleration = angular_acceleration(torque, previous.angular_velocity, &sim.disk, &sim.friction);
    sim.state = integrate(&previous, acceleration, dt);

    // === CHART SAMPLE ===
    let charted = match sim.sample_timing {
        SampleTiming::Current => acceleration,
        SampleTiming::Previous => previous.angular_acceleration,
    };
    sim.history.push(AccelerationSample {
        time: (sim.last_tick_ms - sim.start_ms) / 1000.0,
        acceleration: charted,
    });

    sim.frame += 1;

    if let Some(t0) = step_start {
        sim.perf_stats.step_ms = t0.elapsed_ms();
        sim.perf_stats.dt_ms = dt_ms;
        sim.perf_stats.torque = torque;
        sim.perf_stats.history_len = sim.history.len() as u32;
        sim.perf_stats.dragging = sim.drag.is_dragging();
    }
}

/// Torque from the live pointer; zero while idle.
///
/// Consumes the previous angle: after this call it holds the angle just used,
/// so the next tick measures direction from here.
fn contact_torque(sim: &mut SimulatorCore) -> f64 {
    let current = sim.pointer.angle_from(sim.disk_center());
    let model = sim.torque_model;
    let contact_mass = sim.contact_mass;

    match sim.drag.contact_mut() {
        None => 0.0,
        Some(contact) => {
            contact.current_angle = current;
            let torque = model.torque(current, contact.previous_angle, contact.radius, contact_mass);
            contact.previous_angle = Some(current);
            torque
        }
    }
}
