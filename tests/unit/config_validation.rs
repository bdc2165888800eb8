//! Unit tests for configuration validation.

use joint_limits::config::{parse_config, validate_config, LimitsConfig};
use joint_limits::error::{ConfigError, Error};

/// Test validation of a valid configuration.
#[test]
fn test_valid_config_passes_validation() {
    let toml_str = r#"
[joints.shoulder]
min_position = -1.0
max_position = 1.0
max_velocity = 1.0

[joints.shoulder.soft_limits]
min_position = -0.9
max_position = 0.9
k_position = 10.0
k_velocity = 1.0
"#;

    let config: LimitsConfig = toml::from_str(toml_str).expect("Failed to parse TOML");
    assert!(validate_config(&config).is_ok());
}

/// Test validation fails for inverted position limits.
#[test]
fn test_inverted_position_limits() {
    let toml_str = r#"
[joints.shoulder]
min_position = 1.0
max_position = -1.0
max_velocity = 1.0
"#;

    match parse_config(toml_str) {
        Err(Error::Config(ConfigError::InvalidPositionLimits { joint, .. })) => {
            assert_eq!(joint.as_str(), "shoulder")
        }
        other => panic!("Expected inverted limits to be rejected: {:?}", other),
    }
}

/// Test validation fails for a NaN hard position limit.
#[test]
fn test_nan_position_limit() {
    let toml_str = r#"
[joints.wrist]
min_position = nan
max_position = 1.0
max_velocity = 10.0
"#;

    assert!(matches!(
        parse_config(toml_str),
        Err(Error::Config(ConfigError::InvalidPositionLimits { .. }))
    ));
}

/// Test validation fails for non-positive magnitude limits.
#[test]
fn test_non_positive_effort_limit() {
    let toml_str = r#"
[joints.knee]
max_velocity = 1.0
max_effort = 0.0
"#;

    assert!(matches!(
        parse_config(toml_str),
        Err(Error::Config(ConfigError::InvalidLimit {
            field: "max_effort",
            ..
        }))
    ));
}

/// Test validation fails for soft limits with negative gains.
#[test]
fn test_negative_soft_gain() {
    let toml_str = r#"
[joints.knee]
max_velocity = 1.0

[joints.knee.soft_limits]
min_position = -0.9
max_position = 0.9
k_position = -10.0
k_velocity = 1.0
"#;

    assert!(matches!(
        parse_config(toml_str),
        Err(Error::Config(ConfigError::InvalidSoftLimits(_)))
    ));
}

/// Test validation fails for a wraparound joint with position limits.
#[test]
fn test_wraparound_with_position_limits() {
    let toml_str = r#"
[joints.wheel]
min_position = -3.14
max_position = 3.14
angle_wraparound = true
"#;

    assert!(matches!(
        parse_config(toml_str),
        Err(Error::Config(ConfigError::WraparoundWithPositionLimits(_)))
    ));
}

/// Test that empty configuration is valid.
#[test]
fn test_empty_config_is_valid() {
    let config = LimitsConfig::default();
    assert!(validate_config(&config).is_ok());
    assert!(parse_config("").is_ok());
}
