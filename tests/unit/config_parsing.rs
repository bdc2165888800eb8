//! Unit tests for TOML configuration parsing.

use joint_limits::config::{load_config, LimitsConfig};
use joint_limits::error::{ConfigError, Error};

/// Test parsing a fully specified joint from TOML.
#[test]
fn test_parse_joint_limits() {
    let toml_str = r#"
[joints.shoulder]
min_position = -1.57
max_position = 1.57
max_velocity = 2.0
max_acceleration = 4.0
max_jerk = 40.0
max_effort = 30.0
"#;

    let config: LimitsConfig = toml::from_str(toml_str).expect("Failed to parse TOML");
    let limits = config.joint_limits("shoulder").expect("Joint not found");

    assert!(limits.has_position_limits);
    assert!(limits.has_velocity_limits);
    assert!(limits.has_acceleration_limits);
    assert!(limits.has_jerk_limits);
    assert!(limits.has_effort_limits);
    assert!(!limits.angle_wraparound);
    assert_eq!(limits.min_position, -1.57);
    assert_eq!(limits.max_position, 1.57);
    assert_eq!(limits.max_velocity, 2.0);
    assert_eq!(limits.max_acceleration, 4.0);
    assert_eq!(limits.max_jerk, 40.0);
    assert_eq!(limits.max_effort, 30.0);
}

/// Test that absent values clear their presence flags.
#[test]
fn test_parse_continuous_joint() {
    let toml_str = r#"
[joints.wheel]
max_velocity = 10.0
angle_wraparound = true
"#;

    let config: LimitsConfig = toml::from_str(toml_str).expect("Failed to parse TOML");
    let limits = config.joint_limits("wheel").expect("Joint not found");

    assert!(limits.angle_wraparound);
    assert!(limits.has_velocity_limits);
    assert!(!limits.has_position_limits);
    assert!(!limits.has_effort_limits);
}

/// Test parsing soft limits.
#[test]
fn test_parse_soft_limits() {
    let toml_str = r#"
[joints.elbow]
min_position = -2.0
max_position = 2.0
max_velocity = 1.0

[joints.elbow.soft_limits]
min_position = -1.9
max_position = 1.9
k_position = 15.0
k_velocity = 3.0
"#;

    let config: LimitsConfig = toml::from_str(toml_str).expect("Failed to parse TOML");
    let soft = config.soft_limits("elbow").expect("Soft limits not found");

    assert_eq!(soft.min_position, -1.9);
    assert_eq!(soft.max_position, 1.9);
    assert_eq!(soft.k_position, 15.0);
    assert_eq!(soft.k_velocity, 3.0);
}

/// Test that soft limits must specify all fields.
#[test]
fn test_incomplete_soft_limits_rejected() {
    let toml_str = r#"
[joints.elbow]
max_velocity = 1.0

[joints.elbow.soft_limits]
min_position = -1.9
max_position = 1.9
"#;

    let result: Result<LimitsConfig, _> = toml::from_str(toml_str);
    assert!(result.is_err(), "Should reject soft limits without gains");
}

/// Test loading from a file on disk.
#[test]
fn test_load_config_from_file() {
    let path = std::env::temp_dir().join(format!("joint_limits_{}.toml", std::process::id()));
    std::fs::write(&path, "[joints.knee]\nmax_velocity = 1.5\nmax_effort = 12.0\n")
        .expect("Failed to write temp file");

    let config = load_config(&path);
    let _ = std::fs::remove_file(&path);

    let limits = config.expect("Config should load").joint_limits("knee").unwrap();
    assert_eq!(limits.max_effort, 12.0);
}

/// Test that a missing file is an I/O error.
#[test]
fn test_load_missing_file() {
    assert!(matches!(
        load_config("/definitely/not/here.toml"),
        Err(Error::Config(ConfigError::IoError(_)))
    ));
}
