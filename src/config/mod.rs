//! Configuration module for joint-limits.
//!
//! Provides the hard and soft limit records consumed by the enforcement
//! handles, and their loading and validation from TOML files (with `std`
//! feature) or pre-parsed data.

mod joint;
mod limits;
#[cfg(feature = "std")]
mod loader;
mod system;
mod validation;

pub use joint::JointLimitsConfig;
pub use limits::{JointLimits, SoftJointLimits};
pub use system::{LimitsConfig, MAX_CONFIG_JOINTS};
pub use validation::validate_config;

#[cfg(feature = "std")]
pub use loader::{load_config, parse_config};
