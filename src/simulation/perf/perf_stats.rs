use wasm_bindgen::prelude::*;

/// Snapshot of the most recent tick (zeros when perf is disabled).
#[wasm_bindgen]
#[derive(Clone, Default)]
pub struct PerfStats {
    pub(super) step_ms: f64,
    pub(super) dt_ms: f64,
    pub(super) torque: f64,
    pub(super) history_len: u32,
    pub(super) dragging: bool,
}

impl PerfStats {
    pub(crate) fn reset(&mut self) {
        *self = PerfStats::default();
    }
}

#[wasm_bindgen]
impl PerfStats {
    #[wasm_bindgen(getter)]
    pub fn step_ms(&self) -> f64 { self.step_ms }
    #[wasm_bindgen(getter)]
    pub fn dt_ms(&self) -> f64 { self.dt_ms }
    #[wasm_bindgen(getter)]
    pub fn torque(&self) -> f64 { self.torque }
    #[wasm_bindgen(getter)]
    pub fn history_len(&self) -> u32 { self.history_len }
    #[wasm_bindgen(getter)]
    pub fn dragging(&self) -> bool { self.dragging }
}
