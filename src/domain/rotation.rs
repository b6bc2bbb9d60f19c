use serde::Serialize;

/// Spin state of the disk, carried across ticks.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct RotationalState {
    /// rad/s, signed
    pub angular_velocity: f64,
    /// rad/s², value computed by the most recent tick
    pub angular_acceleration: f64,
    /// Degrees, always in [0, 360)
    pub rotation: f64,
}

/// One point on the acceleration chart.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct AccelerationSample {
    /// Seconds since the simulator started
    pub time: f64,
    /// rad/s²
    pub acceleration: f64,
}
