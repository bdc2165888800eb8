//! # joint-limits
//!
//! Real-time joint limit enforcement for robot controllers.
//!
//! ## Features
//!
//! - **Soft limits**: Position and effort commands decelerate the joint as it
//!   nears a soft position band instead of hitting a wall
//! - **Hard saturation**: Velocity commands are clamped to the velocity limit
//! - **Real-time safe**: Enforcement never allocates, locks or fails
//! - **Fail at setup**: Missing limits are reported when a handle is built
//! - **Configuration-driven**: Load per-joint limits from TOML files
//! - **no_std compatible**: Core library works without standard library
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use core::time::Duration;
//! use joint_limits::{JointState, PositionJointSoftLimitsHandle, PositionJointSoftLimitsInterface};
//!
//! let config = joint_limits::load_config("limits.toml")?;
//! let shoulder = JointState::new();
//!
//! let mut limits = PositionJointSoftLimitsInterface::<_>::new();
//! limits.register_handle(PositionJointSoftLimitsHandle::new(
//!     shoulder.handle("shoulder"),
//!     config.joint_limits("shoulder")?,
//!     config.soft_limits("shoulder")?,
//! )?)?;
//!
//! // Every control tick, after the controller wrote its commands:
//! limits.enforce_limits(Duration::from_millis(1));
//! ```
//!
//! ## Feature Flags
//!
//! - `std` (default): Enables file I/O and TOML parsing
//! - `alloc`: Enables heap allocation for no_std with allocator
//! - `defmt`: Enables defmt logging for embedded targets

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]
// Allow large error types - necessary for no_std with heapless strings
#![allow(clippy::result_large_err)]

#[cfg(feature = "alloc")]
extern crate alloc;

mod fmt;

// Core modules
pub mod config;
pub mod enforce;
pub mod error;
pub mod interface;
pub mod joint;

// Re-exports for ergonomic API
pub use config::{validate_config, JointLimits, JointLimitsConfig, LimitsConfig, SoftJointLimits};
pub use enforce::{
    saturate, EffortJointSoftLimitsHandle, EnforceLimits, PositionJointSoftLimitsHandle,
    VelocityJointSaturationHandle,
};
pub use error::{ConfigError, Error, LookupError, RegistrationError, Result};
pub use interface::{
    EffortJointSoftLimitsInterface, JointLimitsInterface, PositionJointSoftLimitsInterface,
    VelocityJointSaturationInterface,
};
pub use joint::{JointHandle, JointState, JointStateHandle};

// Configuration loading (std only)
#[cfg(feature = "std")]
pub use config::{load_config, parse_config};
