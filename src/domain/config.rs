use serde::{Deserialize, Deserializer, Serialize};

/// Which acceleration value is charted for a tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SampleTiming {
    /// The value computed during the tick itself.
    #[default]
    Current,
    /// The value held before the tick ran (one-tick display lag).
    Previous,
}

/// Simulator settings, loadable from JSON.
///
/// Every field has a default, so `{}` is a valid config.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulatorConfig {
    /// Disk mass in kg. Non-positive values fall back to `default_mass`.
    #[serde(deserialize_with = "nan_if_null")]
    pub disk_mass: f64,
    /// Mass of the dragging point in kg.
    #[serde(deserialize_with = "nan_if_null")]
    pub contact_mass: f64,
    /// Disk radius in rendering pixels (half the rendered width).
    #[serde(deserialize_with = "nan_if_null")]
    pub disk_radius: f64,
    pub friction_enabled: bool,
    pub friction_coefficient: f64,
    /// Substitute for an invalid disk mass.
    pub default_mass: f64,
    pub gravity: f64,
    /// Divisor applied to `force * radius`.
    pub torque_scale: f64,
    /// Maximum number of retained acceleration samples.
    pub history_capacity: usize,
    pub sample_timing: SampleTiming,
}

/// serde_json writes non-finite floats as `null`; read them back as NaN.
fn nan_if_null<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::NAN))
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        SimulatorConfig {
            disk_mass: 1.0,
            contact_mass: 1.0,
            disk_radius: 128.0,
            friction_enabled: false,
            friction_coefficient: 0.1,
            default_mass: 1.0,
            gravity: 9.8,
            torque_scale: 100.0,
            history_capacity: 3600,
            sample_timing: SampleTiming::Current,
        }
    }
}

impl SimulatorConfig {
    pub fn from_json(json: &str) -> Result<Self, String> {
        let config: SimulatorConfig = serde_json::from_str(json).map_err(|e| e.to_string())?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> String {
        // Plain struct of numbers and enums; serde_json cannot fail on it.
        serde_json::to_string(self).unwrap_or_default()
    }

    /// Checks the constants the integrator divides by or scales with.
    ///
    /// Disk mass, contact mass and radius are live user inputs and stay
    /// unvalidated, so any snapshot from `config()` loads back.
    pub fn validate(&self) -> Result<(), String> {
        let finite = [
            ("friction_coefficient", self.friction_coefficient),
            ("default_mass", self.default_mass),
            ("gravity", self.gravity),
            ("torque_scale", self.torque_scale),
        ];
        for (name, value) in finite {
            if !value.is_finite() {
                return Err(format!("{} must be finite, got {}", name, value));
            }
        }
        if self.default_mass <= 0.0 {
            return Err(format!("default_mass must be positive, got {}", self.default_mass));
        }
        if self.torque_scale == 0.0 {
            return Err("torque_scale must be non-zero".to_string());
        }
        if self.friction_coefficient < 0.0 {
            return Err(format!(
                "friction_coefficient must not be negative, got {}",
                self.friction_coefficient
            ));
        }
        Ok(())
    }
}
