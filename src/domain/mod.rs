//! Domain types: the disk, the contact point, spin state and settings.

pub mod config;
pub mod contact;
pub mod disk;
pub mod rotation;

pub use config::{SampleTiming, SimulatorConfig};
pub use contact::{Contact, DragState, Pointer};
pub use disk::Disk;
pub use rotation::{AccelerationSample, RotationalState};
