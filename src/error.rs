//! Error types for joint-limits library.
//!
//! Provides unified error handling across configuration, handle construction,
//! and registry operations. Limit enforcement itself has no error path.

use core::fmt;

/// Result type alias using the library's Error type.
pub type Result<T> = core::result::Result<T, Error>;

/// Unified error type for all joint-limits operations.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Limit configuration is missing, incomplete or invalid
    Config(ConfigError),
    /// Joint name could not be resolved in a registry
    Lookup(LookupError),
    /// Handle could not be added to a registry
    Registration(RegistrationError),
}

/// Configuration-related errors.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Joint has no velocity limits but the enforcement law requires them
    MissingVelocityLimits(heapless::String<32>),
    /// Joint has no effort limits but the enforcement law requires them
    MissingEffortLimits(heapless::String<32>),
    /// Joint has no soft limits section in configuration
    MissingSoftLimits(heapless::String<32>),
    /// Joint name not found in configuration
    JointNotFound(heapless::String<32>),
    /// Only one of min/max position was given
    IncompletePositionLimits(heapless::String<32>),
    /// Position limits are inverted or empty (min must be < max)
    InvalidPositionLimits {
        /// Joint name
        joint: heapless::String<32>,
        /// Minimum position
        min: f64,
        /// Maximum position
        max: f64,
    },
    /// A magnitude limit is not strictly positive
    InvalidLimit {
        /// Which limit (e.g. "max_velocity")
        field: &'static str,
        /// Offending value
        value: f64,
    },
    /// Continuous joint declares position limits
    WraparoundWithPositionLimits(heapless::String<32>),
    /// Soft limit band is inverted or a gain is negative
    InvalidSoftLimits(heapless::String<32>),
    /// Failed to parse TOML configuration
    ParseError(heapless::String<128>),
    /// File I/O error (std only)
    #[cfg(feature = "std")]
    IoError(heapless::String<128>),
}

/// Registry lookup errors.
#[derive(Debug, Clone, PartialEq)]
pub enum LookupError {
    /// No handle registered under this joint name
    JointNotFound(heapless::String<32>),
}

/// Registry insertion errors.
#[derive(Debug, Clone, PartialEq)]
pub enum RegistrationError {
    /// A handle for this joint is already registered
    DuplicateJoint(heapless::String<32>),
    /// Joint name does not fit the registry key (max 32 bytes)
    NameTooLong,
    /// Registry capacity reached
    RegistryFull {
        /// Registry capacity
        capacity: usize,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Config(e) => write!(f, "Configuration error: {}", e),
            Error::Lookup(e) => write!(f, "Lookup error: {}", e),
            Error::Registration(e) => write!(f, "Registration error: {}", e),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::MissingVelocityLimits(joint) => write!(
                f,
                "Cannot enforce limits for joint '{}'. It has no velocity limits specification",
                joint
            ),
            ConfigError::MissingEffortLimits(joint) => write!(
                f,
                "Cannot enforce limits for joint '{}'. It has no effort limits specification",
                joint
            ),
            ConfigError::MissingSoftLimits(joint) => {
                write!(f, "Joint '{}' has no soft limits specification", joint)
            }
            ConfigError::JointNotFound(joint) => write!(f, "Joint '{}' not found", joint),
            ConfigError::IncompletePositionLimits(joint) => write!(
                f,
                "Joint '{}' must specify both min_position and max_position, or neither",
                joint
            ),
            ConfigError::InvalidPositionLimits { joint, min, max } => write!(
                f,
                "Invalid position limits for joint '{}': min ({}) must be < max ({})",
                joint, min, max
            ),
            ConfigError::InvalidLimit { field, value } => {
                write!(f, "Invalid {}: {}. Must be > 0", field, value)
            }
            ConfigError::WraparoundWithPositionLimits(joint) => write!(
                f,
                "Joint '{}' wraps around and cannot have position limits",
                joint
            ),
            ConfigError::InvalidSoftLimits(joint) => write!(
                f,
                "Invalid soft limits for joint '{}': min must be <= max and gains must be >= 0",
                joint
            ),
            ConfigError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            #[cfg(feature = "std")]
            ConfigError::IoError(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl fmt::Display for LookupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LookupError::JointNotFound(joint) => {
                write!(f, "No limits handle registered for joint '{}'", joint)
            }
        }
    }
}

impl fmt::Display for RegistrationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegistrationError::DuplicateJoint(joint) => {
                write!(f, "Joint '{}' is already registered", joint)
            }
            RegistrationError::NameTooLong => write!(f, "Joint name too long (max 32 bytes)"),
            RegistrationError::RegistryFull { capacity } => {
                write!(f, "Registry full (capacity {})", capacity)
            }
        }
    }
}

// Conversion impls
impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Error::Config(e)
    }
}

impl From<LookupError> for Error {
    fn from(e: LookupError) -> Self {
        Error::Lookup(e)
    }
}

impl From<RegistrationError> for Error {
    fn from(e: RegistrationError) -> Self {
        Error::Registration(e)
    }
}

/// Truncating conversion of a joint name into an error payload.
pub(crate) fn joint_name(name: &str) -> heapless::String<32> {
    let mut out = heapless::String::new();
    for c in name.chars() {
        if out.push(c).is_err() {
            break;
        }
    }
    out
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

#[cfg(feature = "std")]
impl std::error::Error for LookupError {}

#[cfg(feature = "std")]
impl std::error::Error for RegistrationError {}
