//! Limits configuration - root configuration structure.

use heapless::{FnvIndexMap, String};
use serde::Deserialize;

use crate::error::{joint_name, ConfigError, Error, Result};

use super::joint::JointLimitsConfig;
use super::limits::{JointLimits, SoftJointLimits};

/// Maximum number of joints in one limits file.
pub const MAX_CONFIG_JOINTS: usize = 32;

/// Root configuration structure from TOML.
#[derive(Debug, Clone, Deserialize)]
pub struct LimitsConfig {
    /// Named joint limit configurations.
    #[serde(default)]
    pub joints: FnvIndexMap<String<32>, JointLimitsConfig, MAX_CONFIG_JOINTS>,
}

impl LimitsConfig {
    /// Get a joint configuration by name.
    pub fn joint(&self, name: &str) -> Option<&JointLimitsConfig> {
        self.joints
            .iter()
            .find(|(k, _)| k.as_str() == name)
            .map(|(_, v)| v)
    }

    /// Hard limits of a joint.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::JointNotFound`] if the joint is not configured.
    pub fn joint_limits(&self, name: &str) -> Result<JointLimits> {
        self.joint(name)
            .map(JointLimitsConfig::limits)
            .ok_or_else(|| Error::Config(ConfigError::JointNotFound(joint_name(name))))
    }

    /// Soft limits of a joint.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::JointNotFound`] if the joint is not configured,
    /// or [`ConfigError::MissingSoftLimits`] if it has no soft limits section.
    pub fn soft_limits(&self, name: &str) -> Result<SoftJointLimits> {
        let joint = self
            .joint(name)
            .ok_or_else(|| Error::Config(ConfigError::JointNotFound(joint_name(name))))?;

        joint
            .soft_limits
            .ok_or_else(|| Error::Config(ConfigError::MissingSoftLimits(joint_name(name))))
    }

    /// List all joint names.
    pub fn joint_names(&self) -> impl Iterator<Item = &str> {
        self.joints.keys().map(|s| s.as_str())
    }
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            joints: FnvIndexMap::new(),
        }
    }
}
