//! Configuration validation.

use crate::error::{joint_name, ConfigError, Error, Result};

use super::joint::JointLimitsConfig;
use super::LimitsConfig;

/// Validate a limits configuration.
///
/// Checks:
/// - Position limits are given as a pair, with min < max (NaN rejected)
/// - Velocity, acceleration, jerk and effort limits are positive
/// - Continuous joints have no position limits
/// - Soft limits are ordered and have non-negative gains
pub fn validate_config(config: &LimitsConfig) -> Result<()> {
    for (name, joint) in config.joints.iter() {
        validate_joint(name.as_str(), joint)?;
    }

    Ok(())
}

fn validate_joint(name: &str, config: &JointLimitsConfig) -> Result<()> {
    if config.has_partial_position_limits() {
        return Err(Error::Config(ConfigError::IncompletePositionLimits(
            joint_name(name),
        )));
    }

    let limits = config.limits();

    if limits.has_position_limits {
        if limits.angle_wraparound {
            return Err(Error::Config(ConfigError::WraparoundWithPositionLimits(
                joint_name(name),
            )));
        }
        let (min, max) = (limits.min_position, limits.max_position);
        if min.is_nan() || max.is_nan() || min >= max {
            return Err(Error::Config(ConfigError::InvalidPositionLimits {
                joint: joint_name(name),
                min,
                max,
            }));
        }
    }

    let magnitudes = [
        ("max_velocity", config.max_velocity),
        ("max_acceleration", config.max_acceleration),
        ("max_jerk", config.max_jerk),
        ("max_effort", config.max_effort),
    ];
    for (field, value) in magnitudes {
        if let Some(value) = value {
            if value.is_nan() || value <= 0.0 {
                return Err(Error::Config(ConfigError::InvalidLimit { field, value }));
            }
        }
    }

    if let Some(ref soft) = config.soft_limits {
        if !soft.is_valid() {
            return Err(Error::Config(ConfigError::InvalidSoftLimits(joint_name(name))));
        }
        if !soft.is_within(&limits) {
            crate::fmt::warning!("soft limits of joint '{}' exceed its hard limits", name);
        }
    }

    Ok(())
}
