//! Torque from a dragged contact point.
//!
//! The model is illustrative rather than calibrated: the contact mass pulls
//! with its weight (`m * g`) at the contact radius, divided by a fixed scale.
//! Only the drag direction comes from pointer motion; holding still still
//! produces full-magnitude torque in the last (forward) direction.

/// Forward angular delta from `previous` to `current`, in [0, 360).
#[inline]
pub fn forward_delta(current: f64, previous: f64) -> f64 {
    (current - previous + 360.0).rem_euclid(360.0)
}

/// +1 when the short way from `previous` to `current` is forward, else -1.
#[inline]
pub fn drag_direction(current: f64, previous: f64) -> f64 {
    if forward_delta(current, previous) <= 180.0 { 1.0 } else { -1.0 }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TorqueModel {
    pub gravity: f64,
    pub scale: f64,
}

impl Default for TorqueModel {
    fn default() -> Self {
        Self { gravity: 9.8, scale: 100.0 }
    }
}

impl TorqueModel {
    pub fn new(gravity: f64, scale: f64) -> Self {
        Self { gravity, scale }
    }

    /// Magnitude ignoring direction: `m * g * r / scale`
    #[inline]
    pub fn magnitude(&self, contact_mass: f64, radius: f64) -> f64 {
        contact_mass * self.gravity * radius / self.scale
    }

    /// Signed torque for one tick. Zero when there is no previous angle.
    pub fn torque(&self, current: f64, previous: Option<f64>, radius: f64, contact_mass: f64) -> f64 {
        match previous {
            None => 0.0,
            Some(previous) => drag_direction(current, previous) * self.magnitude(contact_mass, radius),
        }
    }
}
