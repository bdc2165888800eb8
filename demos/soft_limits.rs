//! Soft limits example.
//!
//! Loads limits for a two-joint arm from TOML and runs a simple control loop
//! where a naive controller commands both joints far past their limits. The
//! position registry slows each joint down as it enters its soft band.

use core::time::Duration;

use joint_limits::{
    parse_config, JointState, PositionJointSoftLimitsHandle, PositionJointSoftLimitsInterface,
};

const LIMITS_TOML: &str = r#"
[joints.shoulder]
min_position = -1.57
max_position = 1.57
max_velocity = 1.0

[joints.shoulder.soft_limits]
min_position = -1.4
max_position = 1.4
k_position = 5.0
k_velocity = 0.0

[joints.elbow]
min_position = -2.5
max_position = 2.5
max_velocity = 2.0

[joints.elbow.soft_limits]
min_position = -2.3
max_position = 2.3
k_position = 8.0
k_velocity = 0.0
"#;

fn main() -> Result<(), joint_limits::Error> {
    println!("=== Soft Limits Example ===\n");

    let config = parse_config(LIMITS_TOML)?;
    let shoulder = JointState::new();
    let elbow = JointState::new();

    let mut limits: PositionJointSoftLimitsInterface<_> = PositionJointSoftLimitsInterface::new();
    for (name, state) in [("shoulder", &shoulder), ("elbow", &elbow)] {
        limits.register_handle(PositionJointSoftLimitsHandle::new(
            state.handle(name),
            config.joint_limits(name)?,
            config.soft_limits(name)?,
        )?)?;
    }

    let period = Duration::from_millis(20);
    for tick in 0..200 {
        // Naive controller: always aim far beyond the limits
        shoulder.set_command(10.0);
        elbow.set_command(-10.0);

        limits.enforce_limits(period);

        // Ideal servos reach the limited command within one tick
        shoulder.set_position(shoulder.command());
        elbow.set_position(elbow.command());

        if tick % 20 == 0 {
            println!(
                "tick {:3}: shoulder = {:+.4} rad, elbow = {:+.4} rad",
                tick,
                shoulder.position(),
                elbow.position()
            );
        }
    }

    println!(
        "\nFinal: shoulder = {:+.4} rad (soft max 1.4), elbow = {:+.4} rad (soft min -2.3)",
        shoulder.position(),
        elbow.position()
    );

    Ok(())
}
