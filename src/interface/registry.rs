//! Joint limits registry for named handle lookup and per-tick enforcement.

use core::time::Duration;

use heapless::{FnvIndexMap, String};

use crate::enforce::{
    EffortJointSoftLimitsHandle, EnforceLimits, PositionJointSoftLimitsHandle,
    VelocityJointSaturationHandle,
};
use crate::error::{joint_name, Error, LookupError, RegistrationError, Result};

/// Default number of joints in a registry.
pub const DEFAULT_MAX_JOINTS: usize = 16;

/// Registry of limits handles of one actuation mode, keyed by joint name.
///
/// Capacity `N` is fixed at compile time and must be a power of two.
/// At most one handle is registered per joint, so every joint command has
/// exactly one writer per tick.
pub struct JointLimitsInterface<H, const N: usize = DEFAULT_MAX_JOINTS>
where
    H: EnforceLimits,
{
    handles: FnvIndexMap<String<32>, H, N>,
}

/// Soft limits registry for position-controlled joints.
pub type PositionJointSoftLimitsInterface<J, const N: usize = DEFAULT_MAX_JOINTS> =
    JointLimitsInterface<PositionJointSoftLimitsHandle<J>, N>;

/// Soft limits registry for effort-controlled joints.
pub type EffortJointSoftLimitsInterface<J, const N: usize = DEFAULT_MAX_JOINTS> =
    JointLimitsInterface<EffortJointSoftLimitsHandle<J>, N>;

/// Saturation registry for velocity-controlled joints.
pub type VelocityJointSaturationInterface<J, const N: usize = DEFAULT_MAX_JOINTS> =
    JointLimitsInterface<VelocityJointSaturationHandle<J>, N>;

impl<H, const N: usize> Default for JointLimitsInterface<H, N>
where
    H: EnforceLimits,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<H, const N: usize> JointLimitsInterface<H, N>
where
    H: EnforceLimits,
{
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            handles: FnvIndexMap::new(),
        }
    }

    /// Register a handle under its joint name.
    ///
    /// # Errors
    ///
    /// Returns an error if a handle for the joint is already registered, the
    /// name is longer than 32 bytes, or the registry is full.
    pub fn register_handle(&mut self, handle: H) -> Result<()> {
        let name: String<32> = String::try_from(handle.name())
            .map_err(|_| Error::Registration(RegistrationError::NameTooLong))?;

        if self.handles.contains_key(&name) {
            crate::fmt::warning!("joint '{}' is already registered", name.as_str());
            return Err(Error::Registration(RegistrationError::DuplicateJoint(name)));
        }

        self.handles.insert(name, handle).map_err(|_| {
            Error::Registration(RegistrationError::RegistryFull { capacity: N })
        })?;

        crate::fmt::debug!("registered limits for {} joints", self.handles.len());

        Ok(())
    }

    /// Get a handle by joint name.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::JointNotFound`] if no handle is registered for
    /// the joint.
    pub fn get_handle(&self, name: &str) -> Result<&H> {
        let handle = match String::<32>::try_from(name) {
            Ok(key) => self.handles.get(&key),
            Err(_) => None,
        };

        handle.ok_or_else(|| Error::Lookup(LookupError::JointNotFound(joint_name(name))))
    }

    /// Get a mutable handle by joint name.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::JointNotFound`] if no handle is registered for
    /// the joint.
    pub fn get_handle_mut(&mut self, name: &str) -> Result<&mut H> {
        let handle = match String::<32>::try_from(name) {
            Ok(key) => self.handles.get_mut(&key),
            Err(_) => None,
        };

        handle.ok_or_else(|| Error::Lookup(LookupError::JointNotFound(joint_name(name))))
    }

    /// Check if a joint is registered.
    pub fn contains(&self, name: &str) -> bool {
        if let Ok(key) = String::<32>::try_from(name) {
            self.handles.contains_key(&key)
        } else {
            false
        }
    }

    /// Get the number of registered handles.
    pub fn len(&self) -> usize {
        self.handles.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }

    /// Registry capacity.
    pub fn capacity(&self) -> usize {
        N
    }

    /// Get an iterator over joint names, in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.handles.keys().map(|s| s.as_str())
    }

    /// Get an iterator over handles, in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &H)> {
        self.handles.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Enforce limits on every registered joint.
    ///
    /// Each handle runs exactly once, in registration order, with the same
    /// `period`. Real-time safe.
    pub fn enforce_limits(&mut self, period: Duration) {
        for handle in self.handles.values_mut() {
            handle.enforce_limits(period);
        }
    }
}

impl<H, const N: usize> core::fmt::Debug for JointLimitsInterface<H, N>
where
    H: EnforceLimits,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_list().entries(self.names()).finish()
    }
}
