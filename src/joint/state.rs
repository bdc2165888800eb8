//! Shared joint state and the handle that views it.

use core::cell::Cell;

use super::handle::JointHandle;

/// State of one joint as exposed by the hardware layer.
///
/// Feedback is written by the hardware read step, the command by the
/// controller and the limits handles. All fields are interior-mutable so any
/// number of [`JointStateHandle`]s can view the same joint.
#[derive(Debug, Default)]
pub struct JointState {
    position: Cell<f64>,
    velocity: Cell<f64>,
    effort: Cell<f64>,
    command: Cell<f64>,
}

impl JointState {
    /// Create a joint at rest at the origin with a zero command.
    pub const fn new() -> Self {
        Self {
            position: Cell::new(0.0),
            velocity: Cell::new(0.0),
            effort: Cell::new(0.0),
            command: Cell::new(0.0),
        }
    }

    /// Current position.
    #[inline]
    pub fn position(&self) -> f64 {
        self.position.get()
    }

    /// Current velocity.
    #[inline]
    pub fn velocity(&self) -> f64 {
        self.velocity.get()
    }

    /// Current effort.
    #[inline]
    pub fn effort(&self) -> f64 {
        self.effort.get()
    }

    /// Pending command.
    #[inline]
    pub fn command(&self) -> f64 {
        self.command.get()
    }

    /// Store measured position.
    #[inline]
    pub fn set_position(&self, position: f64) {
        self.position.set(position);
    }

    /// Store measured velocity.
    #[inline]
    pub fn set_velocity(&self, velocity: f64) {
        self.velocity.set(velocity);
    }

    /// Store measured effort.
    #[inline]
    pub fn set_effort(&self, effort: f64) {
        self.effort.set(effort);
    }

    /// Store pending command.
    #[inline]
    pub fn set_command(&self, command: f64) {
        self.command.set(command);
    }

    /// Create a named handle viewing this joint.
    pub fn handle<'a>(&'a self, name: &'a str) -> JointStateHandle<'a> {
        JointStateHandle { name, state: self }
    }
}

/// Named view onto a [`JointState`].
#[derive(Debug, Clone, Copy)]
pub struct JointStateHandle<'a> {
    name: &'a str,
    state: &'a JointState,
}

impl<'a> JointStateHandle<'a> {
    /// Underlying joint state.
    #[inline]
    pub fn state(&self) -> &'a JointState {
        self.state
    }

    /// Measured effort.
    #[inline]
    pub fn effort(&self) -> f64 {
        self.state.effort()
    }
}

impl JointHandle for JointStateHandle<'_> {
    #[inline]
    fn name(&self) -> &str {
        self.name
    }

    #[inline]
    fn position(&self) -> f64 {
        self.state.position()
    }

    #[inline]
    fn velocity(&self) -> f64 {
        self.state.velocity()
    }

    #[inline]
    fn command(&self) -> f64 {
        self.state.command()
    }

    #[inline]
    fn set_command(&mut self, command: f64) {
        self.state.set_command(command);
    }
}
