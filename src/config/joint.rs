//! Per-joint limit configuration from TOML.

use serde::Deserialize;

use super::limits::{JointLimits, SoftJointLimits};

/// Limits of one joint as written in a configuration file.
///
/// Every value is optional; an absent value clears the matching presence flag
/// of the derived [`JointLimits`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct JointLimitsConfig {
    /// Lower position bound (requires `max_position`).
    #[serde(default)]
    pub min_position: Option<f64>,

    /// Upper position bound (requires `min_position`).
    #[serde(default)]
    pub max_position: Option<f64>,

    /// Velocity magnitude bound.
    #[serde(default)]
    pub max_velocity: Option<f64>,

    /// Acceleration magnitude bound.
    #[serde(default)]
    pub max_acceleration: Option<f64>,

    /// Jerk magnitude bound.
    #[serde(default)]
    pub max_jerk: Option<f64>,

    /// Effort magnitude bound.
    #[serde(default)]
    pub max_effort: Option<f64>,

    /// Continuous joint.
    #[serde(default)]
    pub angle_wraparound: bool,

    /// Optional soft limits.
    #[serde(default)]
    pub soft_limits: Option<SoftJointLimits>,
}

impl JointLimitsConfig {
    /// Build the hard limit record.
    ///
    /// Position limits are only set when both bounds are present; validation
    /// reports a half-specified pair.
    pub fn limits(&self) -> JointLimits {
        let mut limits = JointLimits::new();

        if let (Some(min), Some(max)) = (self.min_position, self.max_position) {
            limits = limits.with_position_limits(min, max);
        }
        if let Some(v) = self.max_velocity {
            limits = limits.with_velocity_limit(v);
        }
        if let Some(a) = self.max_acceleration {
            limits = limits.with_acceleration_limit(a);
        }
        if let Some(j) = self.max_jerk {
            limits = limits.with_jerk_limit(j);
        }
        if let Some(e) = self.max_effort {
            limits = limits.with_effort_limit(e);
        }
        if self.angle_wraparound {
            limits = limits.with_angle_wraparound();
        }

        limits
    }

    /// Check if exactly one of the two position bounds is present.
    pub fn has_partial_position_limits(&self) -> bool {
        self.min_position.is_some() != self.max_position.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_limits_from_partial_config() {
        let config = JointLimitsConfig {
            max_velocity: Some(1.5),
            max_effort: Some(20.0),
            ..Default::default()
        };

        let limits = config.limits();
        assert!(!limits.has_position_limits);
        assert!(limits.has_velocity_limits);
        assert!(limits.has_effort_limits);
        assert_eq!(limits.max_velocity, 1.5);
        assert_eq!(limits.max_effort, 20.0);
    }

    #[test]
    fn test_half_position_pair_is_ignored() {
        let config = JointLimitsConfig {
            min_position: Some(-1.0),
            ..Default::default()
        };

        assert!(config.has_partial_position_limits());
        assert!(!config.limits().has_position_limits);
    }
}
