//! Enforcement module for joint-limits.
//!
//! One handle per joint and actuation mode binds a [`JointHandle`] to its
//! limits and implements one saturation law:
//!
//! - [`PositionJointSoftLimitsHandle`]: position command, soft position band
//! - [`EffortJointSoftLimitsHandle`]: effort command, soft position band
//! - [`VelocityJointSaturationHandle`]: velocity command, hard saturation
//!
//! Handles are built once at setup and fail there if a limit they need is
//! missing. [`EnforceLimits::enforce_limits`] is real-time safe: it does not
//! allocate, lock, log or fail.
//!
//! [`JointHandle`]: crate::joint::JointHandle

use core::time::Duration;

use libm::{fmax, fmin};

use crate::config::{JointLimits, SoftJointLimits};

mod effort;
mod position;
mod velocity;

pub use effort::EffortJointSoftLimitsHandle;
pub use position::PositionJointSoftLimitsHandle;
pub use velocity::VelocityJointSaturationHandle;

/// Per-tick limit enforcement of one joint.
///
/// Sealed: implemented by the three handles of this module only.
pub trait EnforceLimits: private::Sealed {
    /// Name of the joint this handle enforces.
    fn name(&self) -> &str;

    /// Saturate the joint's pending command.
    ///
    /// `period` is the control period and must be strictly positive.
    fn enforce_limits(&mut self, period: Duration);
}

mod private {
    use crate::joint::JointHandle;

    pub trait Sealed {}
    impl<J: JointHandle> Sealed for super::PositionJointSoftLimitsHandle<J> {}
    impl<J: JointHandle> Sealed for super::EffortJointSoftLimitsHandle<J> {}
    impl<J: JointHandle> Sealed for super::VelocityJointSaturationHandle<J> {}
}

/// Clamp `val` into `[min, max]`.
///
/// Never panics. When `min > max` the result is `max`. A NaN `val` is
/// dropped by `fmax`, so it saturates to `min` rather than passing through.
#[inline]
pub fn saturate(val: f64, min: f64, max: f64) -> f64 {
    fmin(fmax(val, min), max)
}

/// Velocity bounds allowed at `position`.
///
/// `±max_velocity`, shrunk proportionally to the distance past the soft
/// position bounds when the joint has position limits.
#[inline]
fn soft_velocity_bounds(position: f64, limits: &JointLimits, soft: &SoftJointLimits) -> (f64, f64) {
    let max_vel = limits.max_velocity;

    if !limits.has_position_limits {
        return (-max_vel, max_vel);
    }

    let min_vel = saturate(-soft.k_position * (position - soft.min_position), -max_vel, max_vel);
    let max_vel_bound = saturate(-soft.k_position * (position - soft.max_position), -max_vel, max_vel);

    (min_vel, max_vel_bound)
}
