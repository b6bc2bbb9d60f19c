/// Uniform solid disk spinning about its center.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Disk {
    /// Configured mass in kg (may be invalid, see `effective_mass`)
    pub mass: f64,
    /// Radius in rendering pixels
    pub radius: f64,
    /// Mass used in place of a non-positive `mass`
    pub default_mass: f64,
}

impl Disk {
    pub fn new(mass: f64, radius: f64, default_mass: f64) -> Self {
        Self { mass, radius, default_mass }
    }

    /// `false` when the configured mass is not positive and the default is in use.
    #[inline]
    pub fn mass_is_valid(&self) -> bool {
        self.mass > 0.0
    }

    #[inline]
    pub fn effective_mass(&self) -> f64 {
        if self.mass_is_valid() { self.mass } else { self.default_mass }
    }

    /// I = m*r²/2 for a solid disk about its axis
    #[inline]
    pub fn moment_of_inertia(&self) -> f64 {
        self.effective_mass() * self.radius * self.radius / 2.0
    }

    /// User-facing advisory shown while the fallback mass is in use.
    pub fn mass_advisory(&self) -> Option<String> {
        if self.mass_is_valid() {
            None
        } else {
            Some(format!(
                "Invalid mass. Using default mass of {} kg.",
                self.default_mass
            ))
        }
    }
}
