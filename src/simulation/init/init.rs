use crate::domain::{Disk, DragState, Pointer, RotationalState, SimulatorConfig};
use crate::systems::{Friction, TorqueModel};

use super::history::AccelerationHistory;
use super::perf_stats::PerfStats;
use super::SimulatorCore;

pub(super) fn create_simulator_core(config: SimulatorConfig, start_ms: f64) -> SimulatorCore {
    let disk = Disk::new(config.disk_mass, config.disk_radius, config.default_mass);
    if !disk.mass_is_valid() {
        console_warn!(
            "disk mass {} kg is not positive; using default mass of {} kg",
            config.disk_mass,
            config.default_mass
        );
    }

    SimulatorCore {
        disk,
        contact_mass: config.contact_mass,
        friction: Friction {
            enabled: config.friction_enabled,
            coefficient: config.friction_coefficient,
        },
        torque_model: TorqueModel::new(config.gravity, config.torque_scale),
        sample_timing: config.sample_timing,

        drag: DragState::Idle,
        pointer: Pointer::default(),

        state: RotationalState::default(),
        history: AccelerationHistory::new(config.history_capacity),
        start_ms,
        last_tick_ms: start_ms,
        frame: 0,

        perf_enabled: false,
        perf_stats: PerfStats::default(),
    }
}
