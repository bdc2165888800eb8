//! Interface module for joint-limits.
//!
//! Provides the per-mode registries that own the limits handles and enforce
//! all of them once per control tick.

mod registry;

pub use registry::{
    EffortJointSoftLimitsInterface, JointLimitsInterface, PositionJointSoftLimitsInterface,
    VelocityJointSaturationInterface, DEFAULT_MAX_JOINTS,
};
