//! Joint module for joint-limits.
//!
//! Defines the handle contract through which limits are enforced, and a
//! minimal shared joint state that implements it.

mod handle;
mod state;

pub use handle::JointHandle;
pub use state::{JointState, JointStateHandle};
