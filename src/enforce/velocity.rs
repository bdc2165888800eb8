//! Saturation for velocity-controlled joints.

use core::time::Duration;

use crate::config::JointLimits;
use crate::error::{joint_name, ConfigError, Error, Result};
use crate::joint::JointHandle;

use super::{saturate, EnforceLimits};

/// Enforces the velocity limit of a velocity-controlled joint.
///
/// The command is hard-saturated to `±max_velocity`; there is no soft band.
#[derive(Debug)]
pub struct VelocityJointSaturationHandle<J>
where
    J: JointHandle,
{
    joint: J,
    limits: JointLimits,
}

impl<J> VelocityJointSaturationHandle<J>
where
    J: JointHandle,
{
    /// Create a handle for `joint`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingVelocityLimits`] if `limits` has no
    /// velocity limits.
    pub fn new(joint: J, limits: JointLimits) -> Result<Self> {
        if !limits.has_velocity_limits {
            crate::fmt::warning!("joint '{}' has no velocity limits", joint.name());
            return Err(Error::Config(ConfigError::MissingVelocityLimits(joint_name(
                joint.name(),
            ))));
        }

        Ok(Self { joint, limits })
    }

    /// Hard limits.
    #[inline]
    pub fn limits(&self) -> &JointLimits {
        &self.limits
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

impl<J> EnforceLimits for VelocityJointSaturationHandle<J>
where
    J: JointHandle,
{
    #[inline]
    fn name(&self) -> &str {
        self.joint.name()
    }

    fn enforce_limits(&mut self, _period: Duration) {
        let max_vel = self.limits.max_velocity;
        let vel_cmd = saturate(self.joint.command(), -max_vel, max_vel);
        self.joint.set_command(vel_cmd);
    }
}
