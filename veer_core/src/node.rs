// veer_core/src/node.rs

use nalgebra::{Isometry3, Vector3};

/// The narrow contract onto the host scene-graph engine.
///
/// Everything the actuation routines do is expressed in the node's local
/// frame, so an implementation backed by any parent hierarchy composes
/// correctly: no world-frame state is read or written here.
///
/// Conventions: Y is up, forward is local -Z, lateral drift is along
/// local +X. Angles are radians.
pub trait SceneNode {
    /// The node's current pose in its parent frame.
    fn pose(&self) -> Isometry3<f64>;

    /// Translates by `translation` expressed in the node's local frame.
    fn translate_local(&mut self, translation: Vector3<f64>);

    /// Rotates by `angle` about the node's local up (Y) axis.
    fn rotate_y_local(&mut self, angle: f64);

    /// Re-normalizes the orientation to unit length.
    ///
    /// Incremental local rotations accumulate floating-point error; callers
    /// are expected to invoke this after every rotation, not periodically.
    fn renormalize_rotation(&mut self);
}
