// veer_agent/src/prelude.rs

pub use crate::controls::{
    apply_noisy_motion, BodyControl, MoveBackward, MoveForward, TurnLeft, TurnRight,
};
pub use crate::error::ActuationError;
pub use crate::node::AgentNode;
pub use crate::registry::{register_noisy_move_fns, MoveRegistry, RegisteredMove};
pub use crate::spec::ActuationSpec;

// Re-export the core contracts callers need alongside the agent layer.
pub use veer_core::prelude::*;
