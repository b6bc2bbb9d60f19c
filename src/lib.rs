//! Torque Engine - rotational dynamics of a dragged disk, in WASM
//!
//! The user grips a point on a disk and drags it; the engine turns the drag
//! into torque and integrates it into angular acceleration, angular velocity
//! and rotation once per display frame.
//!
//! Architecture:
//! - core/        - Logging macros
//! - domain/      - Disk, contact, spin state, settings
//! - systems/     - Torque, acceleration and integration (pure functions)
//! - simulation/  - State owner, input handling, tick loop, JS facade

// Logging macros (must be first for macro export!)
#[macro_use]
pub mod core;
pub mod domain;
pub mod systems;
pub mod simulation;

use wasm_bindgen::prelude::*;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    console_log!("Torque engine {} initialized", version());
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use domain::{SampleTiming, SimulatorConfig};
pub use simulation::{FrameLoop, PerfStats, Simulator, SimulatorCore};
