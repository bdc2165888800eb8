//! Hard and soft joint limit records.

use serde::Deserialize;

/// Hard limits of a single joint.
///
/// Each `has_*` flag gates whether the matching value may be read. Enforcement
/// handles check the flags they depend on when they are constructed.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct JointLimits {
    /// Lower position bound.
    pub min_position: f64,
    /// Upper position bound.
    pub max_position: f64,
    /// Velocity magnitude bound.
    pub max_velocity: f64,
    /// Acceleration magnitude bound.
    pub max_acceleration: f64,
    /// Jerk magnitude bound.
    pub max_jerk: f64,
    /// Effort magnitude bound.
    pub max_effort: f64,

    /// `min_position` and `max_position` are meaningful.
    pub has_position_limits: bool,
    /// `max_velocity` is meaningful.
    pub has_velocity_limits: bool,
    /// `max_acceleration` is meaningful.
    pub has_acceleration_limits: bool,
    /// `max_jerk` is meaningful.
    pub has_jerk_limits: bool,
    /// `max_effort` is meaningful.
    pub has_effort_limits: bool,
    /// Continuous joint whose position wraps around.
    pub angle_wraparound: bool,
}

impl JointLimits {
    /// Create an empty limit record (no limits present).
    pub const fn new() -> Self {
        Self {
            min_position: 0.0,
            max_position: 0.0,
            max_velocity: 0.0,
            max_acceleration: 0.0,
            max_jerk: 0.0,
            max_effort: 0.0,
            has_position_limits: false,
            has_velocity_limits: false,
            has_acceleration_limits: false,
            has_jerk_limits: false,
            has_effort_limits: false,
            angle_wraparound: false,
        }
    }

    /// Set hard position limits.
    pub fn with_position_limits(mut self, min: f64, max: f64) -> Self {
        self.min_position = min;
        self.max_position = max;
        self.has_position_limits = true;
        self
    }

    /// Set velocity limit.
    pub fn with_velocity_limit(mut self, max_velocity: f64) -> Self {
        self.max_velocity = max_velocity;
        self.has_velocity_limits = true;
        self
    }

    /// Set acceleration limit.
    pub fn with_acceleration_limit(mut self, max_acceleration: f64) -> Self {
        self.max_acceleration = max_acceleration;
        self.has_acceleration_limits = true;
        self
    }

    /// Set jerk limit.
    pub fn with_jerk_limit(mut self, max_jerk: f64) -> Self {
        self.max_jerk = max_jerk;
        self.has_jerk_limits = true;
        self
    }

    /// Set effort limit.
    pub fn with_effort_limit(mut self, max_effort: f64) -> Self {
        self.max_effort = max_effort;
        self.has_effort_limits = true;
        self
    }

    /// Mark the joint as continuous.
    pub fn with_angle_wraparound(mut self) -> Self {
        self.angle_wraparound = true;
        self
    }

    /// Check if a position lies inside the hard position limits.
    ///
    /// Always true when the joint has no position limits.
    pub fn contains_position(&self, position: f64) -> bool {
        !self.has_position_limits
            || (position >= self.min_position && position <= self.max_position)
    }
}

/// Soft limit tuning for the soft-limited enforcement laws.
///
/// The soft position band normally lies inside the hard position band.
/// `k_position` turns distance past a soft bound into a velocity bound,
/// `k_velocity` turns distance past a velocity bound into an effort bound.
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
pub struct SoftJointLimits {
    /// Position gain.
    pub k_position: f64,
    /// Velocity gain.
    pub k_velocity: f64,
    /// Lower soft position bound.
    pub min_position: f64,
    /// Upper soft position bound.
    pub max_position: f64,
}

impl SoftJointLimits {
    /// Create soft limits from a position band and gains.
    pub fn new(min_position: f64, max_position: f64, k_position: f64, k_velocity: f64) -> Self {
        Self {
            k_position,
            k_velocity,
            min_position,
            max_position,
        }
    }

    /// Check if the band is ordered and both gains are non-negative.
    pub fn is_valid(&self) -> bool {
        self.min_position <= self.max_position && self.k_position >= 0.0 && self.k_velocity >= 0.0
    }

    /// Check if the soft band lies inside the hard position band.
    ///
    /// Joints without hard position limits contain any soft band.
    pub fn is_within(&self, hard: &JointLimits) -> bool {
        hard.contains_position(self.min_position) && hard.contains_position(self.max_position)
    }
}
