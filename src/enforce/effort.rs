//! Soft limits for effort-controlled joints.

use core::time::Duration;

use crate::config::{JointLimits, SoftJointLimits};
use crate::error::{joint_name, ConfigError, Error, Result};
use crate::joint::JointHandle;

use super::{saturate, soft_velocity_bounds, EnforceLimits};

/// Enforces position, velocity and effort limits of an effort-controlled joint.
///
/// Velocity bounds follow the same soft position band as
/// [`PositionJointSoftLimitsHandle`](super::PositionJointSoftLimitsHandle).
/// Effort bounds then grow with how far the measured velocity is from those
/// bounds. The law is memoryless and does not use the control period.
#[derive(Debug)]
pub struct EffortJointSoftLimitsHandle<J>
where
    J: JointHandle,
{
    joint: J,
    limits: JointLimits,
    soft_limits: SoftJointLimits,
}

impl<J> EffortJointSoftLimitsHandle<J>
where
    J: JointHandle,
{
    /// Create a handle for `joint`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingVelocityLimits`] or
    /// [`ConfigError::MissingEffortLimits`] if `limits` lacks either; velocity
    /// is checked first.
    pub fn new(joint: J, limits: JointLimits, soft_limits: SoftJointLimits) -> Result<Self> {
        if !limits.has_velocity_limits {
            crate::fmt::warning!("joint '{}' has no velocity limits", joint.name());
            return Err(Error::Config(ConfigError::MissingVelocityLimits(joint_name(
                joint.name(),
            ))));
        }
        if !limits.has_effort_limits {
            crate::fmt::warning!("joint '{}' has no effort limits", joint.name());
            return Err(Error::Config(ConfigError::MissingEffortLimits(joint_name(
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

impl<J> EnforceLimits for EffortJointSoftLimitsHandle<J>
where
    J: JointHandle,
{
    #[inline]
    fn name(&self) -> &str {
        self.joint.name()
    }

    fn enforce_limits(&mut self, _period: Duration) {
        let pos = self.joint.position();
        let vel = self.joint.velocity();

        let (min_vel, max_vel) = soft_velocity_bounds(pos, &self.limits, &self.soft_limits);

        let max_eff = self.limits.max_effort;
        let k_vel = self.soft_limits.k_velocity;
        let min_eff = saturate(-k_vel * (vel - min_vel), -max_eff, max_eff);
        let max_eff_bound = saturate(-k_vel * (vel - max_vel), -max_eff, max_eff);

        let eff_cmd = saturate(self.joint.command(), min_eff, max_eff_bound);
        self.joint.set_command(eff_cmd);
    }
}
