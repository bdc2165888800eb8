//! Joint handle contract consumed by the enforcement handles.

/// Read/write access to one joint of the hardware layer.
///
/// An implementation is a lightweight view onto joint state owned elsewhere:
/// enforcement handles hold it for the lifetime of the controller and write
/// the saturated command back through it once per tick. Reads and writes must
/// be non-blocking.
pub trait JointHandle {
    /// Joint name.
    fn name(&self) -> &str;

    /// Current measured position.
    fn position(&self) -> f64;

    /// Current measured velocity.
    fn velocity(&self) -> f64;

    /// Pending command.
    fn command(&self) -> f64;

    /// Overwrite the pending command.
    fn set_command(&mut self, command: f64);
}

impl<J: JointHandle + ?Sized> JointHandle for &mut J {
    #[inline]
    fn name(&self) -> &str {
        (**self).name()
    }

    #[inline]
    fn position(&self) -> f64 {
        (**self).position()
    }

    #[inline]
    fn velocity(&self) -> f64 {
        (**self).velocity()
    }

    #[inline]
    fn command(&self) -> f64 {
        (**self).command()
    }

    #[inline]
    fn set_command(&mut self, command: f64) {
        (**self).set_command(command)
    }
}
