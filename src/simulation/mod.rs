//! Simulator - rotational dynamics of a dragged disk
//!
//! `SimulatorCore` owns every piece of mutable state (settings, drag gesture,
//! spin state, chart history) and only changes it through the input handlers
//! and `tick`. The wasm facade and the frame loop wrap it for JS.
//!
//! Per tick: contact angle → torque → angular acceleration → velocity → rotation.

use crate::domain::{
    AccelerationSample, Disk, DragState, Pointer, RotationalState, SampleTiming, SimulatorConfig,
};
use crate::systems::{Friction, TorqueModel};

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "history/history.rs"]
mod history;
#[path = "input/pointer.rs"]
mod pointer;
#[path = "step/step.rs"]
mod step;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
#[path = "frame/frame_loop.rs"]
mod frame_loop;
mod facade;

pub use facade::Simulator;
pub use frame_loop::FrameLoop;
pub use history::AccelerationHistory;
pub use perf_stats::PerfStats;

use perf_timer::PerfTimer;

/// The simulation state
pub struct SimulatorCore {
    // Settings
    disk: Disk,
    contact_mass: f64,
    friction: Friction,
    torque_model: TorqueModel,
    sample_timing: SampleTiming,

    // Input
    drag: DragState,
    pointer: Pointer,

    // State
    state: RotationalState,
    history: AccelerationHistory,
    start_ms: f64,
    last_tick_ms: f64,
    frame: u64,

    // Perf metrics
    perf_enabled: bool,
    perf_stats: PerfStats,
}

impl SimulatorCore {
    /// Create a simulator with default settings, starting the clock now
    pub fn new() -> Self {
        Self::with_config(SimulatorConfig::default(), perf_timer::now_ms())
    }

    /// Create a simulator whose session starts at `start_ms`
    pub fn with_config(config: SimulatorConfig, start_ms: f64) -> Self {
        init::create_simulator_core(config, start_ms)
    }

    pub fn from_config_json(json: &str) -> Result<Self, String> {
        let config = SimulatorConfig::from_json(json)?;
        Ok(Self::with_config(config, perf_timer::now_ms()))
    }

    /// Current settings (spin state and history are not part of the config)
    pub fn config(&self) -> SimulatorConfig {
        settings::config(self)
    }

    pub fn frame(&self) -> u64 { self.frame }

    pub fn state(&self) -> &RotationalState { &self.state }

    pub fn disk(&self) -> &Disk { &self.disk }

    pub fn drag_state(&self) -> &DragState { &self.drag }

    pub fn pointer(&self) -> Pointer { self.pointer }

    pub fn history(&self) -> &AccelerationHistory { &self.history }

    /// Center of the disk in disk-local pixels
    pub fn disk_center(&self) -> Pointer {
        Pointer::new(self.disk.radius, self.disk.radius)
    }

    // === SETTINGS ===

    pub fn set_disk_mass(&mut self, mass: f64) {
        settings::set_disk_mass(self, mass);
    }

    pub fn set_contact_mass(&mut self, mass: f64) {
        settings::set_contact_mass(self, mass);
    }

    pub fn contact_mass(&self) -> f64 { self.contact_mass }

    pub fn set_friction_enabled(&mut self, enabled: bool) {
        settings::set_friction_enabled(self, enabled);
    }

    pub fn friction_enabled(&self) -> bool { self.friction.enabled }

    /// Set from the rendered disk size (half its width)
    pub fn set_disk_radius(&mut self, radius: f64) {
        settings::set_disk_radius(self, radius);
    }

    pub fn set_sample_timing(&mut self, timing: SampleTiming) {
        settings::set_sample_timing(self, timing);
    }

    pub fn set_history_capacity(&mut self, capacity: usize) {
        settings::set_history_capacity(self, capacity);
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    /// Enable or disable per-tick perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        settings::enable_perf_metrics(self, enabled);
    }

    /// Get last tick perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        self.perf_stats.clone()
    }

    // === INPUT ===

    /// Gesture start: Idle → Dragging
    pub fn pointer_down(&mut self, x: f64, y: f64) {
        pointer::pointer_down(self, x, y);
    }

    pub fn pointer_move(&mut self, x: f64, y: f64) {
        pointer::pointer_move(self, x, y);
    }

    /// Gesture end: Dragging → Idle
    pub fn pointer_up(&mut self) {
        pointer::pointer_up(self);
    }

    /// Leaving the drag surface ends the gesture like a release
    pub fn pointer_leave(&mut self) {
        pointer::pointer_up(self);
    }

    // === STEP ===

    /// Advance one frame using the engine clock
    pub fn tick(&mut self) {
        step::tick_at(self, perf_timer::now_ms());
    }

    /// Advance one frame to wall-clock time `now_ms`
    pub fn tick_at(&mut self, now_ms: f64) {
        step::tick_at(self, now_ms);
    }

    // === READOUTS ===

    pub fn angular_velocity_label(&self) -> String {
        format!("{:.2} rad/s", self.state.angular_velocity)
    }

    pub fn angular_acceleration_label(&self) -> String {
        format!("{:.2} rad/s²", self.state.angular_acceleration)
    }

    pub fn mass_advisory(&self) -> Option<String> {
        self.disk.mass_advisory()
    }

    /// Current contact angle (degrees) while dragging
    pub fn contact_angle(&self) -> Option<f64> {
        self.drag.contact().map(|c| c.current_angle)
    }

    /// Contact radius while dragging
    pub fn contact_radius(&self) -> Option<f64> {
        self.drag.contact().map(|c| c.radius)
    }

    /// Latest charted sample
    pub fn latest_sample(&self) -> Option<AccelerationSample> {
        self.history.latest().copied()
    }
}

impl Default for SimulatorCore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
