//! Physics systems: torque, angular acceleration and time integration.
//!
//! All functions here are pure; `simulation` owns the state they act on.

pub mod acceleration;
pub mod integration;
pub mod torque;

pub use acceleration::{angular_acceleration, Friction};
pub use integration::{integrate, wrap_degrees};
pub use torque::{drag_direction, forward_delta, TorqueModel};
