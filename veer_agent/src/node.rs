// veer_agent/src/node.rs

use nalgebra::{Isometry3, Translation3, UnitQuaternion, Vector3};
use veer_core::node::SceneNode;

/// Reference `SceneNode` implementation backed by a `nalgebra` isometry.
///
/// Hosts with their own scene graph implement [`SceneNode`] over their
/// transform type instead; this one serves tests, demos, and embedders
/// without a scene graph.
#[derive(Debug, Clone, PartialEq)]
pub struct AgentNode {
    pose: Isometry3<f64>,
}

impl AgentNode {
    /// A node at the origin with identity orientation.
    pub fn identity() -> Self {
        Self {
            pose: Isometry3::identity(),
        }
    }

    pub fn from_pose(pose: Isometry3<f64>) -> Self {
        Self { pose }
    }

    pub fn set_pose(&mut self, pose: Isometry3<f64>) {
        self.pose = pose;
    }
}

impl SceneNode for AgentNode {
    fn pose(&self) -> Isometry3<f64> {
        self.pose
    }

    fn translate_local(&mut self, translation: Vector3<f64>) {
        // Appending the translation applies it in the node's local frame:
        // (R, t) * (I, v) = (R, t + R*v).
        self.pose *= Translation3::from(translation);
    }

    fn rotate_y_local(&mut self, angle: f64) {
        self.pose *= UnitQuaternion::from_axis_angle(&Vector3::y_axis(), angle);
    }

    fn renormalize_rotation(&mut self) {
        self.pose.rotation.renormalize();
    }
}
