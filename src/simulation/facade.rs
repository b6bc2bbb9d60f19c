use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;

use crate::domain::SampleTiming;

use super::perf_stats::PerfStats;
use super::SimulatorCore;

/// JS handle to one torque simulator widget.
///
/// The core sits behind `Rc<RefCell<..>>` so a `FrameLoop` can tick the same
/// instance the page feeds pointer events into.
#[wasm_bindgen]
pub struct Simulator {
    core: Rc<RefCell<SimulatorCore>>,
}

impl Simulator {
    pub(crate) fn shared_core(&self) -> Rc<RefCell<SimulatorCore>> {
        Rc::clone(&self.core)
    }

    fn wrap(core: SimulatorCore) -> Self {
        Self { core: Rc::new(RefCell::new(core)) }
    }
}

impl Default for Simulator {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl Simulator {
    /// Create a simulator with default settings
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self::wrap(SimulatorCore::new())
    }

    #[wasm_bindgen(js_name = fromConfigJson)]
    pub fn from_config_json(json: String) -> Result<Simulator, JsValue> {
        let core = SimulatorCore::from_config_json(&json).map_err(|e| JsValue::from_str(&e))?;
        Ok(Self::wrap(core))
    }

    pub fn config_json(&self) -> String {
        self.core.borrow().config().to_json()
    }

    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 { self.core.borrow().frame() }

    // === SETTINGS ===

    pub fn set_disk_mass(&self, mass: f64) {
        self.core.borrow_mut().set_disk_mass(mass);
    }

    #[wasm_bindgen(getter)]
    pub fn disk_mass(&self) -> f64 { self.core.borrow().disk().mass }

    pub fn set_contact_mass(&self, mass: f64) {
        self.core.borrow_mut().set_contact_mass(mass);
    }

    #[wasm_bindgen(getter)]
    pub fn contact_mass(&self) -> f64 { self.core.borrow().contact_mass() }

    pub fn set_friction_enabled(&self, enabled: bool) {
        self.core.borrow_mut().set_friction_enabled(enabled);
    }

    #[wasm_bindgen(getter)]
    pub fn friction_enabled(&self) -> bool { self.core.borrow().friction_enabled() }

    /// Pass half the rendered disk width
    pub fn set_disk_radius(&self, radius: f64) {
        self.core.borrow_mut().set_disk_radius(radius);
    }

    #[wasm_bindgen(getter)]
    pub fn disk_radius(&self) -> f64 { self.core.borrow().disk().radius }

    /// Chart the previous tick's acceleration instead of the current one
    pub fn set_lagged_samples(&self, lagged: bool) {
        let timing = if lagged { SampleTiming::Previous } else { SampleTiming::Current };
        self.core.borrow_mut().set_sample_timing(timing);
    }

    pub fn set_history_capacity(&self, capacity: usize) {
        self.core.borrow_mut().set_history_capacity(capacity);
    }

    /// Enable or disable per-tick perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&self, enabled: bool) {
        self.core.borrow_mut().enable_perf_metrics(enabled);
    }

    /// Get last tick perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        self.core.borrow().get_perf_stats()
    }

    // === INPUT (disk-local pixels) ===

    pub fn pointer_down(&self, x: f64, y: f64) {
        self.core.borrow_mut().pointer_down(x, y);
    }

    pub fn pointer_move(&self, x: f64, y: f64) {
        self.core.borrow_mut().pointer_move(x, y);
    }

    pub fn pointer_up(&self) {
        self.core.borrow_mut().pointer_up();
    }

    pub fn pointer_leave(&self) {
        self.core.borrow_mut().pointer_leave();
    }

    // === STEP ===

    /// Step the simulation using the engine clock
    pub fn tick(&self) {
        self.core.borrow_mut().tick();
    }

    /// Step the simulation to `now_ms` on the `performance.now()` clock
    /// (rAF timestamps use it too)
    pub fn tick_at(&self, now_ms: f64) {
        self.core.borrow_mut().tick_at(now_ms);
    }

    // === READOUTS ===

    #[wasm_bindgen(getter)]
    pub fn angular_velocity(&self) -> f64 { self.core.borrow().state().angular_velocity }

    #[wasm_bindgen(getter)]
    pub fn angular_acceleration(&self) -> f64 { self.core.borrow().state().angular_acceleration }

    /// Disk rotation in degrees, [0, 360)
    #[wasm_bindgen(getter)]
    pub fn rotation(&self) -> f64 { self.core.borrow().state().rotation }

    #[wasm_bindgen(getter)]
    pub fn is_dragging(&self) -> bool { self.core.borrow().drag_state().is_dragging() }

    pub fn angular_velocity_label(&self) -> String {
        self.core.borrow().angular_velocity_label()
    }

    pub fn angular_acceleration_label(&self) -> String {
        self.core.borrow().angular_acceleration_label()
    }

    /// Inline advisory text, `undefined` while the disk mass is valid
    pub fn mass_advisory(&self) -> Option<String> {
        self.core.borrow().mass_advisory()
    }

    #[wasm_bindgen(getter)]
    pub fn pointer_x(&self) -> f64 { self.core.borrow().pointer().x }

    #[wasm_bindgen(getter)]
    pub fn pointer_y(&self) -> f64 { self.core.borrow().pointer().y }

    /// Contact line angle in degrees, `undefined` while idle
    pub fn contact_angle(&self) -> Option<f64> {
        self.core.borrow().contact_angle()
    }

    /// Contact line length, `undefined` while idle
    pub fn contact_radius(&self) -> Option<f64> {
        self.core.borrow().contact_radius()
    }

    // === CHART ===

    pub fn history_len(&self) -> usize {
        self.core.borrow().history().len()
    }

    /// Sample times in seconds (Float64Array)
    pub fn history_times(&self) -> Vec<f64> {
        self.core.borrow().history().times()
    }

    /// Sample accelerations in rad/s² (Float64Array)
    pub fn history_accelerations(&self) -> Vec<f64> {
        self.core.borrow().history().accelerations()
    }

    /// `[{"time", "acceleration"}, ...]` for chart libraries
    pub fn history_json(&self) -> String {
        self.core.borrow().history().to_json()
    }

    pub fn clear_history(&self) {
        self.core.borrow_mut().clear_history();
    }
}
