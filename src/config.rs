use crate::error::{CloudError, Result};

/// Ambient rotation per tick, in radians
pub const DEFAULT_SPIN_ANGLE: f64 = 0.002;
/// Speed lost per inertia tick, in container units per second
pub const DEFAULT_INERTIA_DECREMENT: f64 = 70.0;
/// Bound for each random component of the initial drift axis
pub const DEFAULT_DRIFT_RANGE: f64 = 5.0;

/// Tunables of the rotation engine
#[derive(Debug, Clone, PartialEq)]
pub struct CloudConfig {
    pub spin_angle: f64,
    pub inertia_decrement: f64,
    pub drift_range: f64,
    /// Seed for the drift axis; entropy when `None`
    pub seed: Option<u64>,
}

impl Default for CloudConfig {
    fn default() -> Self {
        CloudConfig {
            spin_angle: DEFAULT_SPIN_ANGLE,
            inertia_decrement: DEFAULT_INERTIA_DECREMENT,
            drift_range: DEFAULT_DRIFT_RANGE,
            seed: None,
        }
    }
}

impl CloudConfig {
    pub fn validate(&self) -> Result<()> {
        check_positive("spin angle", self.spin_angle)?;
        check_positive("inertia decrement", self.inertia_decrement)?;
        check_positive("drift range", self.drift_range)?;
        Ok(())
    }
}

fn check_positive(name: &str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(CloudError::Config(format!(
            "{} must be a positive number, got {}",
            name, value
        )))
    }
}
