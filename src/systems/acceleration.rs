use crate::domain::Disk;

/// Velocity-proportional damping.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Friction {
    pub enabled: bool,
    pub coefficient: f64,
}

impl Default for Friction {
    fn default() -> Self {
        Self { enabled: false, coefficient: 0.1 }
    }
}

impl Friction {
    /// Damping torque for the given spin; zero when disabled.
    #[inline]
    pub fn torque(&self, angular_velocity: f64, moment_of_inertia: f64) -> f64 {
        if self.enabled {
            -self.coefficient * angular_velocity * moment_of_inertia
        } else {
            0.0
        }
    }
}

/// Angular acceleration (rad/s²) of `disk` under `torque`.
///
/// A zero or non-finite moment of inertia (zero radius) yields 0 instead of
/// propagating inf/NaN into the spin state.
pub fn angular_acceleration(torque: f64, angular_velocity: f64, disk: &Disk, friction: &Friction) -> f64 {
    let moment = disk.moment_of_inertia();
    if moment == 0.0 || !moment.is_finite() {
        return 0.0;
    }

    let mut acceleration = torque / moment;
    if friction.enabled {
        acceleration += friction.torque(angular_velocity, moment) / moment;
    }
    acceleration
}

#[cfg(test)]
mod tests {
    use super::*;

    fn friction(enabled: bool) -> Friction {
        Friction { enabled, ..Friction::default() }
    }

    #[test]
    fn no_friction_is_torque_over_inertia() {
        let disk = Disk::new(1.0, 50.0, 1.0);
        let a = angular_acceleration(4.9, 3.0, &disk, &friction(false));
        assert_eq!(a, 4.9 / 1250.0);
    }

    #[test]
    fn friction_at_rest_adds_nothing() {
        let disk = Disk::new(3.0, 40.0, 1.0);
        for torque in [-10.0, 0.0, 4.9, 1e6] {
            assert_eq!(
                angular_acceleration(torque, 0.0, &disk, &friction(true)),
                angular_acceleration(torque, 0.0, &disk, &friction(false))
            );
        }
    }

    #[test]
    fn friction_opposes_spin() {
        let disk = Disk::new(1.0, 50.0, 1.0);
        let a = angular_acceleration(0.0, 2.0, &disk, &friction(true));
        assert!((a + 0.2).abs() < 1e-12);
        let a = angular_acceleration(0.0, -2.0, &disk, &friction(true));
        assert!((a - 0.2).abs() < 1e-12);
    }

    #[test]
    fn invalid_mass_matches_default_mass() {
        let reference = angular_acceleration(4.9, 1.0, &Disk::new(1.0, 50.0, 1.0), &friction(true));
        for mass in [0.0, -5.0] {
            let a = angular_acceleration(4.9, 1.0, &Disk::new(mass, 50.0, 1.0), &friction(true));
            assert_eq!(a, reference);
        }
    }

    #[test]
    fn zero_radius_yields_zero() {
        let disk = Disk::new(1.0, 0.0, 1.0);
        assert_eq!(angular_acceleration(4.9, 1.0, &disk, &friction(true)), 0.0);
    }

    #[test]
    fn heavier_disk_accelerates_less() {
        let light = angular_acceleration(4.9, 0.0, &Disk::new(1.0, 50.0, 1.0), &friction(false));
        let heavy = angular_acceleration(4.9, 0.0, &Disk::new(4.0, 50.0, 1.0), &friction(false));
        assert!((light / heavy - 4.0).abs() < 1e-12);
    }
}
