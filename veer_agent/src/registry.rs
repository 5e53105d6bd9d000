// veer_agent/src/registry.rs

//! Explicit registry mapping action names to body-control handlers.
//!
//! Registration is an ordinary startup call into a registry the dispatch
//! layer owns, so there is no hidden global registration order to reason
//! about.

use crate::controls::{BodyControl, MoveBackward, MoveForward, TurnLeft, TurnRight};
use crate::error::ActuationError;
use crate::spec::ActuationSpec;
use std::collections::BTreeMap;
use tracing::debug;
use veer_core::node::SceneNode;
use veer_core::sampler::GaussianSampler;

/// A handler plus its dispatch metadata.
pub struct RegisteredMove {
    pub handler: Box<dyn BodyControl>,
    /// `true` if the action moves the agent's body frame (as opposed to a
    /// sensor-only frame); the dispatch framework uses this to decide
    /// whether dependent sensor transforms must be recomputed.
    pub body_action: bool,
}

/// Name-keyed table of invokable motion primitives.
#[derive(Default)]
pub struct MoveRegistry {
    moves: BTreeMap<String, RegisteredMove>,
}

impl MoveRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts (or replaces) a handler under `name`.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        handler: Box<dyn BodyControl>,
        body_action: bool,
    ) {
        let name = name.into();
        debug!(move_name = %name, body_action, "registered move");
        self.moves.insert(name, RegisteredMove { handler, body_action });
    }

    /// Invokes the named handler against `node`.
    pub fn execute(
        &self,
        name: &str,
        node: &mut dyn SceneNode,
        spec: &ActuationSpec,
        sampler: &mut dyn GaussianSampler,
    ) -> Result<(), ActuationError> {
        let entry = self
            .moves
            .get(name)
            .ok_or_else(|| ActuationError::UnknownMove(name.to_owned()))?;
        entry.handler.actuate(node, spec, sampler)
    }

    /// Whether the named move acts on the agent's body frame.
    pub fn is_body_action(&self, name: &str) -> Option<bool> {
        self.moves.get(name).map(|m| m.body_action)
    }

    /// Registered names, in deterministic order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.moves.keys().map(String::as_str)
    }
}

/// Startup routine: registers the four noisy primitives under their fixed
/// identifiers. All four act on the body frame.
pub fn register_noisy_move_fns(registry: &mut MoveRegistry) {
    registry.register("noisy_move_forward", Box::new(MoveForward), true);
    registry.register("noisy_move_backward", Box::new(MoveBackward), true);
    registry.register("noisy_turn_left", Box::new(TurnLeft), true);
    registry.register("noisy_turn_right", Box::new(TurnRight), true);
}
