use crate::domain::RotationalState;

/// Wrap an angle in degrees into [0, 360).
#[inline]
pub fn wrap_degrees(degrees: f64) -> f64 {
    let wrapped = degrees.rem_euclid(360.0);
    // rem_euclid rounds tiny negative inputs up to exactly 360.0
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}

/// Semi-implicit Euler step: velocity first, then rotation with the new velocity.
///
/// A non-finite rotation update (e.g. an infinite spin) leaves the rotation
/// where it was so it stays inside [0, 360).
pub fn integrate(state: &RotationalState, acceleration: f64, dt: f64) -> RotationalState {
    let angular_velocity = state.angular_velocity + acceleration * dt;
    let advanced = state.rotation + (angular_velocity * dt).to_degrees();
    let rotation = if advanced.is_finite() { wrap_degrees(advanced) } else { state.rotation };

    RotationalState {
        angular_velocity,
        angular_acceleration: acceleration,
        rotation,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn wrap_degrees_stays_in_range() {
        for degrees in [0.0, 359.999, 360.0, 720.5, -0.5, -360.0, -1e-20, 1e15, -1e15] {
            let wrapped = wrap_degrees(degrees);
            assert!((0.0..360.0).contains(&wrapped), "{} -> {}", degrees, wrapped);
        }
        assert_eq!(wrap_degrees(370.0), 10.0);
        assert_eq!(wrap_degrees(-90.0), 270.0);
    }

    #[test]
    fn velocity_then_rotation() {
        let state = RotationalState::default();
        let next = integrate(&state, 2.0, 0.5);
        assert_eq!(next.angular_velocity, 1.0);
        assert_eq!(next.angular_acceleration, 2.0);
        assert!((next.rotation - 0.5f64.to_degrees()).abs() < 1e-9);
    }

    #[test]
    fn half_turn_per_second() {
        let state = RotationalState { angular_velocity: PI, ..RotationalState::default() };
        let next = integrate(&state, 0.0, 1.0);
        assert!((next.rotation - 180.0).abs() < 1e-9);
    }

    #[test]
    fn negative_spin_wraps_forward() {
        let state = RotationalState { angular_velocity: -PI / 2.0, rotation: 10.0, ..RotationalState::default() };
        let next = integrate(&state, 0.0, 1.0);
        assert!((next.rotation - 280.0).abs() < 1e-9);
    }

    #[test]
    fn huge_spin_stays_in_range() {
        let state = RotationalState { angular_velocity: 1e12, rotation: 45.0, ..RotationalState::default() };
        let next = integrate(&state, 1e9, 123.456);
        assert!((0.0..360.0).contains(&next.rotation));
    }

    #[test]
    fn zero_dt_changes_nothing_but_acceleration() {
        let state = RotationalState { angular_velocity: 3.0, angular_acceleration: 1.0, rotation: 90.0 };
        let next = integrate(&state, 5.0, 0.0);
        assert_eq!(next.angular_velocity, 3.0);
        assert_eq!(next.rotation, 90.0);
        assert_eq!(next.angular_acceleration, 5.0);
    }

    #[test]
    fn non_finite_spin_keeps_rotation() {
        let state = RotationalState { angular_velocity: f64::INFINITY, rotation: 12.0, ..RotationalState::default() };
        let next = integrate(&state, 0.0, 0.016);
        assert_eq!(next.rotation, 12.0);
        assert!(next.angular_velocity.is_infinite());
    }
}
