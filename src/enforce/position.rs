//! Soft limits for position-controlled joints.

use core::time::Duration;

use libm::{fmax, fmin};

use crate::config::{JointLimits, SoftJointLimits};
use crate::error::{joint_name, ConfigError, Error, Result};
use crate::joint::JointHandle;

use super::{saturate, soft_velocity_bounds, EnforceLimits};

/// Enforces position and velocity limits of a position-controlled joint.
///
/// The allowed velocity shrinks to zero, then reverses, as the joint crosses
/// a soft position bound. The position command is clamped to the positions
/// reachable within one period at that velocity, and never leaves the hard
/// position band.
#[derive(Debug)]
pub struct PositionJointSoftLimitsHandle<J>
where
    J: JointHandle,
{
    joint: J,
    limits: JointLimits,
    soft_limits: SoftJointLimits,
}

impl<J> PositionJointSoftLimitsHandle<J>
where
    J: JointHandle,
{
    /// Create a handle for `joint`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingVelocityLimits`] if `limits` has no
    /// velocity limits.
    pub fn new(joint: J, limits: JointLimits, soft_limits: SoftJointLimits) -> Result<Self> {
        if !limits.has_velocity_limits {
            crate::fmt::warning!("joint '{}' has no velocity limits", joint.name());
            return Err(Error::Config(ConfigError::MissingVelocityLimits(joint_name(
                joint.name(),
            ))));
        }

        Ok(Self {
            joint,
            limits,
            soft_limits,
        })
    }

    /// Hard limits.
    #[inline]
    pub fn limits(&self) -> &JointLimits {
        &self.limits
    }

    /// Soft limits.
    #[inline]
    pub fn soft_limits(&self) -> &SoftJointLimits {
        &self.soft_limits
    }

    /// Underlying joint handle.
    #[inline]
    pub fn joint(&self) -> &J {
        &self.joint
    }

    /// Release the joint handle.
    pub fn into_inner(self) -> J {
        self.joint
    }
}

impl<J> EnforceLimits for PositionJointSoftLimitsHandle<J>
where
    J: JointHandle,
{
    #[inline]
    fn name(&self) -> &str {
        self.joint.name()
    }

    fn enforce_limits(&mut self, period: Duration) {
        let dt = period.as_secs_f64();
        debug_assert!(dt > 0.0, "control period must be positive");

        let pos = self.joint.position();
        let (min_vel, max_vel) = soft_velocity_bounds(pos, &self.limits, &self.soft_limits);

        // Positions reachable within one period
        let mut pos_low = pos + min_vel * dt;
        let mut pos_high = pos + max_vel * dt;

        // Hard band wins over a soft band that lies outside it
        if self.limits.has_position_limits {
            pos_low = fmax(pos_low, self.limits.min_position);
            pos_high = fmin(pos_high, self.limits.max_position);
        }

        let pos_cmd = saturate(self.joint.command(), pos_low, pos_high);
        self.joint.set_command(pos_cmd);
    }
}
